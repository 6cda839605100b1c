//! Parameters file.
//!
//! Every converter reads the same JSON document at startup.
//! Only `database_path` is needed by all of them, the other fields are
//! checked by the converter that uses them.
//!
//! ```json
//! {
//!     "batch_processing": { "num_processes": 4, "chunksize": 8 },
//!     "database_path": "corpora.sqlite",
//!     "restaurantreviews_path": "data/restaurantreviews/",
//!     "semeval16_path": "data/semeval16/restaurants.xml",
//!     "socc_path": "data/socc/gnm_articles.csv",
//!     "sst_path": "data/stanfordSentimentTreebank/"
//! }
//! ```
use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;

use crate::error::Error;

/// Worker pool sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BatchProcessing {
    pub num_processes: usize,
    pub chunksize: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameters {
    batch_processing: Option<BatchProcessing>,
    database_path: PathBuf,
    restaurantreviews_path: Option<PathBuf>,
    semeval16_path: Option<PathBuf>,
    socc_path: Option<PathBuf>,
    sst_path: Option<PathBuf>,
}

impl Parameters {
    /// Load parameters from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path).map_err(|e| {
            Error::Config(format!("could not open parameters file {:?}: {}", path, e))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_reader<R: Read>(r: R) -> Result<Self, Error> {
        let params: Self = serde_json::from_reader(r)
            .map_err(|e| Error::Config(format!("malformed parameters: {}", e)))?;
        debug!("parameters\n{:#?}", params);
        Ok(params)
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Worker pool sizing, required for the pool-backed converters.
    pub fn batch_processing(&self) -> Result<BatchProcessing, Error> {
        let bp = self
            .batch_processing
            .ok_or_else(|| Error::Config("missing field `batch_processing`".to_string()))?;

        if bp.num_processes == 0 {
            return Err(Error::Config(
                "`batch_processing.num_processes` must be at least 1".to_string(),
            ));
        }
        if bp.chunksize == 0 {
            return Err(Error::Config(
                "`batch_processing.chunksize` must be at least 1".to_string(),
            ));
        }
        Ok(bp)
    }

    pub fn restaurantreviews_path(&self) -> Result<&Path, Error> {
        Self::required(&self.restaurantreviews_path, "restaurantreviews_path")
    }

    pub fn semeval16_path(&self) -> Result<&Path, Error> {
        Self::required(&self.semeval16_path, "semeval16_path")
    }

    pub fn socc_path(&self) -> Result<&Path, Error> {
        Self::required(&self.socc_path, "socc_path")
    }

    pub fn sst_path(&self) -> Result<&Path, Error> {
        Self::required(&self.sst_path, "sst_path")
    }

    fn required<'a>(field: &'a Option<PathBuf>, name: &str) -> Result<&'a Path, Error> {
        field
            .as_deref()
            .ok_or_else(|| Error::Config(format!("missing field `{}`", name)))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::error::Error;

    use super::Parameters;

    const FULL: &str = r#"{
        "batch_processing": { "num_processes": 4, "chunksize": 2 },
        "database_path": "db.sqlite",
        "restaurantreviews_path": "data/rr/",
        "semeval16_path": "data/semeval.xml",
        "socc_path": "data/gnm_articles.csv",
        "sst_path": "data/sst/"
    }"#;

    #[test]
    fn test_full() {
        let p = Parameters::from_reader(FULL.as_bytes()).unwrap();
        assert_eq!(p.database_path(), Path::new("db.sqlite"));
        let bp = p.batch_processing().unwrap();
        assert_eq!(bp.num_processes, 4);
        assert_eq!(bp.chunksize, 2);
        assert_eq!(p.sst_path().unwrap(), Path::new("data/sst/"));
        assert_eq!(p.socc_path().unwrap(), Path::new("data/gnm_articles.csv"));
    }

    #[test]
    fn test_missing_database_path() {
        let p = Parameters::from_reader(r#"{"sst_path": "x"}"#.as_bytes());
        assert!(matches!(p, Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_dataset_path() {
        let p = Parameters::from_reader(r#"{"database_path": "db"}"#.as_bytes()).unwrap();
        assert!(matches!(p.semeval16_path(), Err(Error::Config(_))));
        assert!(matches!(p.batch_processing(), Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_workers() {
        let p = Parameters::from_reader(
            r#"{"database_path": "db", "batch_processing": {"num_processes": 0, "chunksize": 1}}"#
                .as_bytes(),
        )
        .unwrap();
        assert!(matches!(p.batch_processing(), Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed() {
        let p = Parameters::from_reader(
            r#"{"database_path": "db", "batch_processing": {"num_processes": "four"}}"#.as_bytes(),
        );
        assert!(matches!(p, Err(Error::Config(_))));
    }
}
