//! Pipeline trait.
use std::fmt;

use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// any custom pipeline that needs a return type can use the
/// trait aswell.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}

/// Shapes of the tables written by a pipeline, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    tables: Vec<(&'static str, (usize, usize))>,
}

impl Summary {
    pub fn add(&mut self, table: &'static str, shape: (usize, usize)) {
        self.tables.push((table, shape));
    }

    pub fn tables(&self) -> &[(&'static str, (usize, usize))] {
        &self.tables
    }

    /// Shape of a written table.
    pub fn shape(&self, table: &str) -> Option<(usize, usize)> {
        self.tables
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, shape)| *shape)
    }
}

/// Prints shapes as `(rows, columns)` separated by spaces.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shapes: Vec<String> = self
            .tables
            .iter()
            .map(|(_, (rows, cols))| format!("({}, {})", rows, cols))
            .collect();
        write!(f, "{}", shapes.join(" "))
    }
}
