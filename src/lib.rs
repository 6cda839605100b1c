//! # sentiment-corpora
//!
//! Converts four sentiment/opinion-mining research corpora into SQLite tables:
//!
//! | corpus             | source                     | tables                                                       |
//! |--------------------|----------------------------|--------------------------------------------------------------|
//! | Restaurant Reviews | one XML file per restaurant | `restaurantreviews_reviews`, `restaurantreviews_restaurants` |
//! | SemEval16 ABSA     | one XML file               | `semeval16_reviews`, `semeval16_opinion_data`                |
//! | SOCC               | `gnm_articles.csv`         | `socc_articles`                                              |
//! | SST                | `dictionary.txt`, `sentiment_labels.txt` | `sst_phrases`                                  |
//!
//! Each corpus has an independent [pipelines::Pipeline], configured from a [config::Parameters] file.
//! Every run fully replaces the tables it writes.
pub mod config;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod transformers;
