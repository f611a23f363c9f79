#![allow(dead_code)]

use sortbench::record::BenchmarkRecord;
use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str =
    "Algorithm,Size,Avg_Comparisons,Min_Comparisons,Max_Comparisons,Avg_Swaps,Min_Swaps,Max_Swaps";

/// Write `contents` to a temporary `.csv` file that lives as long as the handle.
pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

pub fn table(rows: &[&str]) -> String {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

pub fn rec(algorithm: &str, size: u64, comparisons: f64, swaps: f64) -> BenchmarkRecord {
    BenchmarkRecord::from_averages(algorithm, size, comparisons, swaps)
}

/// A small table shaped like the benchmark producer's output (two sizes, six sorts).
pub fn sample_records() -> Vec<BenchmarkRecord> {
    vec![
        rec("Bubble Sort", 100, 4950.0, 2470.0),
        rec("Selection Sort", 100, 4950.0, 95.0),
        rec("Insertion Sort", 100, 2560.0, 2470.0),
        rec("Merge Sort", 100, 541.0, 672.0),
        rec("Quick Sort", 100, 720.0, 390.0),
        rec("Heap Sort", 100, 1030.0, 580.0),
        rec("Bubble Sort", 1000, 499_500.0, 249_700.0),
        rec("Selection Sort", 1000, 499_500.0, 993.0),
        rec("Insertion Sort", 1000, 250_600.0, 249_700.0),
        rec("Merge Sort", 1000, 8700.0, 9976.0),
        rec("Quick Sort", 1000, 11_300.0, 6400.0),
        rec("Heap Sort", 1000, 16_850.0, 9080.0),
    ]
}
