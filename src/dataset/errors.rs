//! Dataset load errors
//!
//! Every load error is fatal: the service must not start without its data.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset loading
pub type LoadResult<T> = Result<T, LoadError>;

/// Failure to turn a CSV source into a dataset
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed CSV, including rows whose field count differs from the header
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A data row whose field count differs from the header
    #[error("Row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// No header row, or a header with no columns
    #[error("CSV source has no columns")]
    Empty,

    /// Two header cells share a name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),
}

impl LoadError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "CSVAPI_LOAD_IO",
            LoadError::Csv(_) => "CSVAPI_LOAD_MALFORMED",
            LoadError::RaggedRow { .. } => "CSVAPI_LOAD_RAGGED_ROW",
            LoadError::Empty => "CSVAPI_LOAD_EMPTY",
            LoadError::DuplicateColumn(_) => "CSVAPI_LOAD_DUPLICATE_COLUMN",
        }
    }
}
