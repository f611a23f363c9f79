use crate::RecordSource;
use crate::error::DataSourceError;
use crate::record::{BenchmarkRecord, COLUMNS};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Benchmark table stored as a delimited text file with a header row.
#[derive(Clone, Debug)]
pub struct CsvRecordSource {
    pub path: PathBuf,
    pub delimiter: u8,
}

impl CsvRecordSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl RecordSource for CsvRecordSource {
    fn read_records(&self) -> Result<Vec<BenchmarkRecord>, DataSourceError> {
        if !self.path.exists() {
            return Err(DataSourceError::NotFound(self.path.clone()));
        }
        let file = std::fs::File::open(&self.path)?;
        read_csv_records(file, self.delimiter)
    }

    fn description(&self) -> String {
        format!("CSV file: {:?}", self.path)
    }
}

/// In-memory CSV text, mostly for tests and piped input.
#[derive(Clone, Debug)]
pub struct CsvTextSource {
    pub text: String,
}

impl CsvTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RecordSource for CsvTextSource {
    fn read_records(&self) -> Result<Vec<BenchmarkRecord>, DataSourceError> {
        read_csv_records(self.text.as_bytes(), b',')
    }

    fn description(&self) -> String {
        format!("CSV text ({} bytes)", self.text.len())
    }
}

/// Parse a benchmark table. Columns are matched by header name, so order is
/// free and unknown columns are ignored. Rows are not validated here.
pub fn read_csv_records<R: Read>(
    input: R,
    delimiter: u8,
) -> Result<Vec<BenchmarkRecord>, DataSourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataSourceError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<BenchmarkRecord>().enumerate() {
        let record = row.map_err(|e| DataSourceError::MalformedRow {
            row: i + 1,
            message: describe_csv_error(&e),
        })?;
        records.push(record);
    }

    Ok(records)
}

fn describe_csv_error(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => match err.field() {
            Some(idx) => format!("field {}: {}", idx + 1, err.kind()),
            None => err.kind().to_string(),
        },
        _ => err.to_string(),
    }
}
