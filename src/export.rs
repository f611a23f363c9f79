//! CSV writers for the benchmark table and derived series.

use crate::analyzer::NormalizedResult;
use crate::error::DataSourceError;
use crate::record::BenchmarkRecord;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Write records with the canonical header.
pub fn write_records_csv<W: Write>(
    records: &[BenchmarkRecord],
    out: W,
) -> Result<(), DataSourceError> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_records_csv(
    records: &[BenchmarkRecord],
    path: impl AsRef<Path>,
) -> Result<(), DataSourceError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_records_csv(records, std::io::BufWriter::new(file))
}

#[derive(Serialize)]
struct NormalizedRow<'a> {
    algorithm: &'a str,
    size: u64,
    complexity: &'static str,
    metric: &'static str,
    value: f64,
    normalized_value: f64,
}

/// One row per normalized result, for charting outside this crate.
pub fn write_normalized_csv<W: Write>(
    results: &[NormalizedResult],
    out: W,
) -> Result<(), DataSourceError> {
    let mut writer = csv::Writer::from_writer(out);
    for r in results {
        writer.serialize(NormalizedRow {
            algorithm: &r.algorithm,
            size: r.size,
            complexity: r.class.notation(),
            metric: r.metric.name(),
            value: r.value,
            normalized_value: r.normalized_value,
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_normalized_csv(
    results: &[NormalizedResult],
    path: impl AsRef<Path>,
) -> Result<(), DataSourceError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_normalized_csv(results, std::io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::BenchmarkAnalyzer;
    use crate::record::Metric;

    #[test]
    fn test_records_header_order() {
        let records = vec![BenchmarkRecord::from_averages("Bubble Sort", 10, 45.0, 20.5)];
        let mut buf = Vec::new();
        write_records_csv(&records, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Algorithm,Size,Avg_Comparisons,Min_Comparisons,Max_Comparisons,Avg_Swaps,Min_Swaps,Max_Swaps")
        );
        assert_eq!(lines.next(), Some("Bubble Sort,10,45.0,45.0,45.0,20.5,20.5,20.5"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_normalized_rows() {
        let analyzer = BenchmarkAnalyzer::default();
        let records = vec![
            BenchmarkRecord::from_averages("Bubble Sort", 10, 50.0, 0.0),
            BenchmarkRecord::from_averages("Merge Sort", 16, 64.0, 0.0),
        ];
        let normalized = analyzer.normalize(&records, Metric::Comparisons).unwrap();
        let mut buf = Vec::new();
        write_normalized_csv(&normalized, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "algorithm,size,complexity,metric,value,normalized_value"
        );
        assert_eq!(lines[1], "Bubble Sort,10,O(n²),comparisons,50.0,0.5");
        assert_eq!(lines[2], "Merge Sort,16,O(n log n),comparisons,64.0,1.0");
    }
}
