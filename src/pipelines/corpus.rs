//! Corpus selection.
//!
//! Pipelines of a selection are all built before any of them runs,
//! so that every parameter they need is checked upfront.
use log::info;
use structopt::StructOpt;

use crate::config::Parameters;
use crate::error::Error;

use super::pipeline::{Pipeline, Summary};
use super::{RestaurantReviews, SemEval16, Socc, Sst};

#[derive(Debug, Clone, Copy, PartialEq, Eq, StructOpt)]
/// Holds every converter callable by the `sentiment-corpora` command.
pub enum Corpus {
    #[structopt(about = "Convert the Restaurant Reviews corpus")]
    RestaurantReviews,
    #[structopt(about = "Convert the SemEval16 ABSA restaurants corpus")]
    Semeval16,
    #[structopt(about = "Convert SOCC articles")]
    Socc,
    #[structopt(about = "Convert Stanford Sentiment Treebank phrases")]
    Sst,
    #[structopt(about = "Convert every corpus")]
    All,
}

impl Corpus {
    fn selects(&self, other: Corpus) -> bool {
        *self == Corpus::All || *self == other
    }
}

/// Build the pipelines of `corpus`, in conversion order.
pub fn for_corpus(
    corpus: Corpus,
    params: &Parameters,
) -> Result<Vec<Box<dyn Pipeline<Summary>>>, Error> {
    let mut pipelines: Vec<Box<dyn Pipeline<Summary>>> = Vec::new();
    if corpus.selects(Corpus::RestaurantReviews) {
        pipelines.push(Box::new(RestaurantReviews::from_parameters(params)?));
    }
    if corpus.selects(Corpus::Semeval16) {
        pipelines.push(Box::new(SemEval16::from_parameters(params)?));
    }
    if corpus.selects(Corpus::Socc) {
        pipelines.push(Box::new(Socc::from_parameters(params)?));
    }
    if corpus.selects(Corpus::Sst) {
        pipelines.push(Box::new(Sst::from_parameters(params)?));
    }
    Ok(pipelines)
}

/// Run the pipelines of `corpus` one after the other.
///
/// Stops at the first failing pipeline. Tables written by the previous ones are kept.
pub fn run(corpus: Corpus, params: &Parameters) -> Result<Vec<Summary>, Error> {
    let pipelines = for_corpus(corpus, params)?;
    let mut summaries = Vec::with_capacity(pipelines.len());
    for pipeline in pipelines {
        let summary = pipeline.run()?;
        for (table, (rows, cols)) in summary.tables() {
            info!("{}: {} rows, {} columns", table, rows, cols);
        }
        summaries.push(summary);
    }
    Ok(summaries)
}
