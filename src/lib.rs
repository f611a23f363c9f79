// Sorting benchmark analysis: complexity normalization and rankings

use crate::error::DataSourceError;
use crate::record::BenchmarkRecord;

/// Anything a benchmark table can be read from.
pub trait RecordSource {
    /// Read every row in source order. Row invariants are checked by
    /// [`BenchmarkAnalyzer::load`], not here.
    fn read_records(&self) -> std::result::Result<Vec<BenchmarkRecord>, DataSourceError>;

    fn description(&self) -> String;
}

// Input implementation for tables already in memory
pub struct InMemSource {
    pub records: Vec<BenchmarkRecord>,
}

impl RecordSource for InMemSource {
    fn read_records(&self) -> std::result::Result<Vec<BenchmarkRecord>, DataSourceError> {
        Ok(self.records.clone())
    }

    fn description(&self) -> String {
        format!("in-memory table ({} records)", self.records.len())
    }
}

// Implementations
pub mod analyzer;
pub mod benchmark;
pub mod complexity;
pub mod error;
pub mod export;
pub mod input_reader;
pub mod logging;
pub mod record;
pub mod sort;

// Export the main types
pub use analyzer::{BenchmarkAnalyzer, NormalizedRank, NormalizedResult, RankedEntry};
pub use complexity::{ComplexityClass, ComplexityTable, parse_class_override};
pub use error::{AnalysisError, Result};
pub use input_reader::csv_input::{CsvRecordSource, CsvTextSource};
pub use record::Metric;
pub use sort::counting::{OpCounter, SortAlgorithm};
