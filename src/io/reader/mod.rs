/*! Corpus reading utilities

Raw files are read by a [pool::BatchReader], a fixed size pool of workers
that maps a fallible job over independent inputs and collects results in input order.

XML corpora are parsed into owned [xml::Element] trees so that they can leave worker threads.
!*/
pub mod pool;
pub mod xml;

pub use pool::BatchReader;
pub use xml::Element;
