use std::path::PathBuf;

use thiserror::Error;

use crate::complexity::ComplexityClass;

/// Errors raised while reading a benchmark table.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("benchmark data not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("benchmark data is missing required column `{0}`")]
    MissingColumn(&'static str),

    /// Row numbers are 1-based data rows (the header is not counted).
    #[error("malformed benchmark row {row}: {message}")]
    MalformedRow { row: usize, message: String },

    #[error("invalid benchmark row {row} ({algorithm}, n={size}): {reason}")]
    InvalidRecord {
        row: usize,
        algorithm: String,
        size: u64,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    /// The complexity factor would be zero or undefined (n = 0, or n = 1 for n log n).
    #[error("complexity factor for {algorithm} ({class}) is undefined at size {size}")]
    DivisionEdgeCase {
        algorithm: String,
        size: u64,
        class: ComplexityClass,
    },

    #[error("no benchmark records to summarize")]
    EmptyInput,

    #[error("{algorithm} produced unsorted output at size {size}")]
    UnsortedOutput { algorithm: String, size: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
