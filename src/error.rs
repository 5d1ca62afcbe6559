use crate::models::Period;
use std::path::PathBuf;
use thiserror::Error;

/// Load-time failures of the period tables. Any of these stops setup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("expected {expected} period tables, got {found}")]
    PeriodCount { expected: usize, found: usize },

    #[error("{period} table: expected {expected} rows, found {found}")]
    RecordCount {
        period: Period,
        expected: usize,
        found: usize,
    },

    #[error("{} is missing required column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}
