//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use sentiment_corpora::pipelines::Corpus;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sentiment-corpora",
    about = "sentiment/opinion-mining corpora to SQLite converter."
)]
/// Top level arguments.
///
/// ```sh
/// sentiment-corpora 0.1.0
/// sentiment/opinion-mining corpora to SQLite converter.
///
/// USAGE:
///     sentiment-corpora [OPTIONS] <SUBCOMMAND>
///
/// OPTIONS:
///     -c, --config <config>    path to the parameters file [default: parameters.json]
///
/// SUBCOMMANDS:
///     all                   Convert every corpus
///     restaurant-reviews    Convert the Restaurant Reviews corpus
///     semeval16             Convert the SemEval16 ABSA restaurants corpus
///     socc                  Convert SOCC articles
///     sst                   Convert Stanford Sentiment Treebank phrases
/// ```
pub struct SentimentCorpora {
    #[structopt(
        short = "c",
        long = "config",
        parse(from_os_str),
        default_value = "parameters.json",
        help = "path to the parameters file"
    )]
    pub config: PathBuf,
    #[structopt(subcommand)]
    pub corpus: Corpus,
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use structopt::StructOpt;

    use sentiment_corpora::pipelines::Corpus;

    use super::SentimentCorpora;

    #[test]
    fn test_default_config() {
        let opt = SentimentCorpora::from_iter(["sentiment-corpora", "sst"]);
        assert_eq!(opt.config, Path::new("parameters.json"));
        assert_eq!(opt.corpus, Corpus::Sst);
    }

    #[test]
    fn test_subcommands() {
        let opt = SentimentCorpora::from_iter([
            "sentiment-corpora",
            "-c",
            "other.json",
            "restaurant-reviews",
        ]);
        assert_eq!(opt.config, Path::new("other.json"));
        assert_eq!(opt.corpus, Corpus::RestaurantReviews);

        let opt = SentimentCorpora::from_iter(["sentiment-corpora", "semeval16"]);
        assert_eq!(opt.corpus, Corpus::Semeval16);
    }
}
