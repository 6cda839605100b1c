/*! Filtering utilities

Filters decide whether an item is kept ([Filter::detect] returns `true`) or discarded.

- [Length] keeps non-empty strings (normalized phrases).
- [HasAnnotations] keeps aspect-corpus sentences that carry at least one opinion annotation.
! */
mod annotation;
mod filter;
mod length;

pub use annotation::HasAnnotations;
pub use filter::Filter;
pub use length::Length;
