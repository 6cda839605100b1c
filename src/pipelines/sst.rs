//! Stanford Sentiment Treebank phrases.
//!
//! Only `dictionary.txt` (`phrase|phrase id`, no header) and
//! `sentiment_labels.txt` (`phrase ids|sentiment values`, with header) are parsed.
//! Both are pipe-delimited, without any quoting.
//!
//! Phrases are normalized (see [NormalizePhrase]), empty phrases are discarded,
//! and the remaining ones are inner-joined with sentiment values on the phrase id.
//! Two labels are then derived from the sentiment value (see [crate::transformers::labels]).
//!
//! Citation:
//! Recursive Deep Models for Semantic Compositionality Over a Sentiment Treebank
//! Richard Socher, Alex Perelygin, Jean Wu, Jason Chuang, Christopher Manning, Andrew Ng and Christopher Potts
//! Conference on Empirical Methods in Natural Language Processing (EMNLP 2013)
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, info};

use crate::config::Parameters;
use crate::error::Error;
use crate::filtering::{Filter, Length};
use crate::io::writer::store::Store;
use crate::io::writer::table::{Column, Record, SqlType, Table, Value};
use crate::transformers::labels::sentiment_exists;
use crate::transformers::{NormalizePhrase, SentimentLabel, Transform};

use super::pipeline::{Pipeline, Summary};

pub const PHRASES_TABLE: &str = "sst_phrases";
pub const DICTIONARY_FILE: &str = "dictionary.txt";
pub const SENTIMENT_LABELS_FILE: &str = "sentiment_labels.txt";

fn pipe_reader<R: Read>(reader: R, has_headers: bool) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(has_headers)
        .quoting(false)
        .flexible(true)
        .from_reader(reader)
}

fn parse_number<T: FromStr>(field: &str, raw: &str) -> Result<T, Error> {
    raw.trim().parse::<T>().map_err(|_| Error::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// Read the phrase dictionary as `(phrase id, phrase)` pairs.
///
/// The id is the last field, so phrases containing `|` are kept whole.
pub fn read_dictionary<R: Read>(reader: R) -> Result<Vec<(i64, String)>, Error> {
    let mut rdr = pipe_reader(reader, false);
    let mut entries: Vec<(i64, String)> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let (phrase, id) = match record.len() {
            0 | 1 => {
                return Err(Error::Custom(format!(
                    "malformed dictionary entry: {:?}",
                    record
                )))
            }
            n => (record.iter().take(n - 1).join("|"), &record[n - 1]),
        };
        entries.push((parse_number("phrase id", id)?, phrase));
    }
    Ok(entries)
}

/// Read sentiment values as `(phrase id, value)` pairs.
pub fn read_sentiment_values<R: Read>(reader: R) -> Result<Vec<(i64, f64)>, Error> {
    let mut rdr = pipe_reader(reader, true);
    let mut values: Vec<(i64, f64)> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        match (record.get(0), record.get(1)) {
            (Some(id), Some(value)) => values.push((
                parse_number("phrase ids", id)?,
                parse_number("sentiment values", value)?,
            )),
            _ => {
                return Err(Error::Custom(format!(
                    "malformed sentiment entry: {:?}",
                    record
                )))
            }
        }
    }
    Ok(values)
}

/// Normalize phrases, discarding the ones that end up empty.
pub fn normalize_phrases(entries: Vec<(i64, String)>) -> Vec<(i64, String)> {
    let normalizer = NormalizePhrase;
    let filter = Length::default();
    entries
        .into_iter()
        .map(|(id, phrase)| (id, normalizer.transform(&phrase)))
        .filter(|(_, phrase)| filter.detect(phrase.as_str()))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Phrase {
    pub phrase_id: i64,
    pub phrase: String,
    pub sentiment_value: f64,
    pub three_label: SentimentLabel,
    pub exists_label: i64,
}

impl Phrase {
    pub fn new(phrase_id: i64, phrase: String, sentiment_value: f64) -> Self {
        Self {
            phrase_id,
            phrase,
            sentiment_value,
            three_label: SentimentLabel::from_value(sentiment_value),
            exists_label: sentiment_exists(sentiment_value),
        }
    }
}

impl Record for Phrase {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("phrase_id", SqlType::Integer),
            Column::new("phrase", SqlType::Text),
            Column::new("sentiment_values", SqlType::Real),
            Column::new("sentiment_three_labels", SqlType::Integer),
            Column::new("sentiment_exists_labels", SqlType::Integer),
        ]
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.phrase_id.into(),
            self.phrase.as_str().into(),
            self.sentiment_value.into(),
            self.three_label.as_i64().into(),
            self.exists_label.into(),
        ]
    }
}

/// Inner join of phrases and sentiment values on the phrase id.
///
/// Output follows `phrases` order. Ids missing on either side are dropped,
/// and an id with several sentiment values yields one row per value.
pub fn join(phrases: Vec<(i64, String)>, values: &[(i64, f64)]) -> Vec<Phrase> {
    let mut by_id: HashMap<i64, Vec<f64>> = HashMap::new();
    for (id, value) in values {
        by_id.entry(*id).or_default().push(*value);
    }

    let mut joined = Vec::with_capacity(phrases.len());
    for (id, phrase) in phrases {
        match by_id.get(&id) {
            Some(values) => joined.extend(
                values
                    .iter()
                    .map(|value| Phrase::new(id, phrase.clone(), *value)),
            ),
            None => debug!("phrase {} has no sentiment value", id),
        }
    }
    joined
}

pub struct Sst {
    src: PathBuf,
    dst: PathBuf,
}

impl Sst {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }

    pub fn from_parameters(params: &Parameters) -> Result<Self, Error> {
        Ok(Self::new(
            params.sst_path()?.to_path_buf(),
            params.database_path().to_path_buf(),
        ))
    }

    /// Read, normalize and join the treebank files.
    pub fn phrases(&self) -> Result<Vec<Phrase>, Error> {
        let dictionary = read_dictionary(File::open(self.src.join(DICTIONARY_FILE))?)?;
        let values = read_sentiment_values(File::open(self.src.join(SENTIMENT_LABELS_FILE))?)?;
        info!(
            "sst: {} phrases, {} sentiment values",
            dictionary.len(),
            values.len()
        );

        let phrases = normalize_phrases(dictionary);
        Ok(join(phrases, &values))
    }
}

impl Pipeline<Summary> for Sst {
    fn run(&self) -> Result<Summary, Error> {
        info!("sst: reading {:?}", self.src);
        let phrases = Table::from_records(&self.phrases()?);

        let mut store = Store::open(&self.dst)?;
        store.replace_table(PHRASES_TABLE, &phrases)?;
        store.close()?;

        let mut summary = Summary::default();
        summary.add(PHRASES_TABLE, phrases.shape());
        info!("sst: done");
        Ok(summary)
    }
}
