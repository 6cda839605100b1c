/*!
# IO utilities

Raw corpus loading and table saving.

- [reader] holds the bounded parallel batch reader and the owned XML tree used by XML corpora.
- [writer] holds in-memory tables and the SQLite store they are written to.
!*/
pub mod reader;
pub mod writer;
