//! SOCC (SFU Opinion and Comments Corpus) articles.
//!
//! Only the raw `gnm_articles.csv` file (Globe and Mail articles) is parsed.
//! Every CSV column is kept, with types inferred from the content,
//! and a `words` column is derived from `article_text` (see [crate::transformers::CleanArticle]).
//!
//! Citation for SOCC dataset: <https://github.com/sfu-discourse-lab/SOCC>
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use log::{info, warn};

use crate::config::Parameters;
use crate::error::Error;
use crate::io::writer::store::Store;
use crate::io::writer::table::{Column, SqlType, Table, Value};
use crate::transformers::{CleanArticle, Transform};

use super::pipeline::{Pipeline, Summary};

pub const ARTICLES_TABLE: &str = "socc_articles";
pub const TEXT_COLUMN: &str = "article_text";
pub const WORDS_COLUMN: &str = "words";

/// Make column names unique, suffixing repeated names with `.1`, `.2`, ...
///
/// SQLite compares column names case-insensitively, and `index` is taken by the row index.
fn unique_names(headers: &csv::StringRecord) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(headers.len());
    let taken = |candidate: &str, names: &[String]| {
        candidate.eq_ignore_ascii_case("index")
            || names.iter().any(|n| n.eq_ignore_ascii_case(candidate))
    };
    for name in headers.iter() {
        let mut candidate = name.to_string();
        let mut suffix = 0;
        while taken(&candidate, &names) {
            suffix += 1;
            candidate = format!("{}.{}", name, suffix);
        }
        if candidate != name {
            warn!("socc: duplicate column {:?} renamed to {:?}", name, candidate);
        }
        names.push(candidate);
    }
    names
}

/// Read articles from CSV, adding the cleaned `words` column.
///
/// Empty cells are stored as NULL, and so are `words` of empty articles.
pub fn extract_articles<R: Read>(reader: R) -> Result<Table, Error> {
    let mut rdr = csv::ReaderBuilder::new().from_reader(reader);
    let headers = unique_names(rdr.headers()?);
    let records = rdr
        .records()
        .collect::<Result<Vec<csv::StringRecord>, _>>()?;

    let text_idx = headers
        .iter()
        .position(|h| h == TEXT_COLUMN)
        .ok_or_else(|| Error::MissingColumn(TEXT_COLUMN.to_string()))?;

    // source columns that are kept, an existing `words` column is replaced.
    let kept: Vec<(usize, Column)> = headers
        .iter()
        .enumerate()
        .filter(|(_, name)| name.as_str() != WORDS_COLUMN)
        .map(|(idx, name)| {
            let sql_type = if idx == text_idx {
                SqlType::Text
            } else {
                SqlType::infer(records.iter().map(|r| r.get(idx).unwrap_or("")))
            };
            (idx, Column::new(name, sql_type))
        })
        .collect();

    let mut columns: Vec<Column> = kept.iter().map(|(_, c)| c.clone()).collect();
    columns.push(Column::new(WORDS_COLUMN, SqlType::Text));

    let cleaner = CleanArticle::default();
    let mut table = Table::new(columns);
    for record in &records {
        let mut values: Vec<Value> = kept
            .iter()
            .map(|(idx, col)| col.sql_type.parse(record.get(*idx).unwrap_or("")))
            .collect();

        let words = match record.get(text_idx) {
            Some(text) if !text.is_empty() => Value::Text(cleaner.transform(text)),
            _ => Value::Null,
        };
        values.push(words);
        table.push(values)?;
    }

    Ok(table)
}

pub struct Socc {
    src: PathBuf,
    dst: PathBuf,
}

impl Socc {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }

    pub fn from_parameters(params: &Parameters) -> Result<Self, Error> {
        Ok(Self::new(
            params.socc_path()?.to_path_buf(),
            params.database_path().to_path_buf(),
        ))
    }
}

impl Pipeline<Summary> for Socc {
    fn run(&self) -> Result<Summary, Error> {
        info!("socc: reading {:?}", self.src);
        let articles = extract_articles(File::open(&self.src)?)?;

        let mut store = Store::open(&self.dst)?;
        store.replace_table(ARTICLES_TABLE, &articles)?;
        store.close()?;

        let mut summary = Summary::default();
        summary.add(ARTICLES_TABLE, articles.shape());
        info!("socc: done");
        Ok(summary)
    }
}
