pub mod csv_input;

pub use csv_input::{CsvRecordSource, CsvTextSource, read_csv_records};
