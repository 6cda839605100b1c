/*! Bounded parallel batch reader.

Runs an independent, fallible job per input on a dedicated [rayon] pool of fixed size.
Inputs are handed out to workers in batches of at least `chunksize` items.

Results are collected in *input* order whatever the scheduling was,
and the first error aborts the whole batch.
!*/
use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::BatchProcessing;
use crate::error::Error;

pub struct BatchReader {
    pool: ThreadPool,
    chunksize: usize,
}

impl BatchReader {
    /// Create a new pool of `num_workers` threads.
    pub fn new(num_workers: usize, chunksize: usize) -> Result<Self, Error> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_workers.max(1))
            .thread_name(|idx| format!("batch-reader-{}", idx))
            .build()?;

        Ok(Self {
            pool,
            chunksize: chunksize.max(1),
        })
    }

    pub fn from_parameters(bp: &BatchProcessing) -> Result<Self, Error> {
        Self::new(bp.num_processes, bp.chunksize)
    }

    pub fn num_workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Apply `f` to each item on the pool.
    pub fn map<I, O, F>(&self, items: Vec<I>, f: F) -> Result<Vec<O>, Error>
    where
        I: Send,
        O: Send,
        F: Fn(I) -> Result<O, Error> + Sync + Send,
    {
        debug!(
            "mapping {} items on {} workers (chunksize {})",
            items.len(),
            self.num_workers(),
            self.chunksize
        );
        let chunksize = self.chunksize;
        self.pool.install(|| {
            items
                .into_par_iter()
                .with_min_len(chunksize)
                .map(f)
                .collect()
        })
    }

    /// Read every file matching `pattern` in `dir`, sorted by path.
    pub fn read_files<O, F>(&self, dir: &Path, pattern: &str, f: F) -> Result<Vec<O>, Error>
    where
        O: Send,
        F: Fn(&Path) -> Result<O, Error> + Sync + Send,
    {
        let paths = list_files(dir, pattern)?;
        info!("reading {} files from {:?}", paths.len(), dir);
        self.map(paths, |path| {
            debug!("reading {:?}", path);
            f(&path)
        })
    }
}

/// List files matching `pattern` (glob syntax) in `dir`.
///
/// `dir` is matched literally.
pub fn list_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, Error> {
    let dir = dir
        .to_str()
        .ok_or_else(|| Error::Custom(format!("non UTF-8 path: {:?}", dir)))?;
    let pattern = PathBuf::from(glob::Pattern::escape(dir)).join(pattern);

    let mut paths =
        glob::glob(&pattern.to_string_lossy())?.collect::<Result<Vec<PathBuf>, _>>()?;
    paths.sort();
    Ok(paths)
}
