//! # sentiment-corpora
//!
//! Converts sentiment/opinion-mining research corpora into SQLite tables.
//!
//! ```sh
//! sentiment-corpora 0.1.0
//! sentiment/opinion-mining corpora to SQLite converter.
//!
//! USAGE:
//!     sentiment-corpora [OPTIONS] <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     all                   Convert every corpus
//!     restaurant-reviews    Convert the Restaurant Reviews corpus
//!     semeval16             Convert the SemEval16 ABSA restaurants corpus
//!     socc                  Convert SOCC articles
//!     sst                   Convert Stanford Sentiment Treebank phrases
//! ```
//!
use sentiment_corpora::config::Parameters;
use sentiment_corpora::error::Error;
use sentiment_corpora::pipelines;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::SentimentCorpora::from_args();
    debug!("cli args\n{:#?}", opt);

    let params = Parameters::from_path(&opt.config)?;

    for summary in pipelines::run(opt.corpus, &params)? {
        println!("{}", summary);
    }

    Ok(())
}
