//! Pipelines.
//!
//! Each corpus has its own, independent pipeline that reads the raw dataset,
//! flattens it into tables and replaces these tables in the destination store.
//! The module provides a light [pipeline::Pipeline] trait that every converter implements.
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod corpus;
pub mod restaurantreviews;
pub mod semeval16;
pub mod socc;
pub mod sst;

pub use corpus::{for_corpus, run, Corpus};
pub use pipeline::{Pipeline, Summary};
pub use restaurantreviews::RestaurantReviews;
pub use semeval16::SemEval16;
pub use socc::Socc;
pub use sst::Sst;
