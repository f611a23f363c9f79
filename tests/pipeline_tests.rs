// End-to-end: generate a table, write it, load it back and report on it
mod common;
use common::write_csv;

use sortbench::benchmark::{
    AnalysisReport, BenchmarkConfig, BenchmarkRunner, MIN_ARRAY_SIZE, ReportConfig,
};
use sortbench::export::{save_records_csv, write_normalized_csv};
use sortbench::{BenchmarkAnalyzer, CsvRecordSource, Metric, SortAlgorithm};

fn small_config() -> BenchmarkConfig {
    BenchmarkConfig {
        sizes: vec![16, 64],
        algorithms: SortAlgorithm::ALL.to_vec(),
        iterations: 20,
        max_value: 10_000,
        seed: Some(7),
        verify: true,
    }
}

#[test]
fn test_generated_table_round_trips() {
    let records = BenchmarkRunner::new(small_config()).unwrap().run().unwrap();
    assert_eq!(records.len(), 12);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("detailed_results.csv");
    save_records_csv(&records, &path).unwrap();

    let analyzer = BenchmarkAnalyzer::default();
    let loaded = analyzer.load(&CsvRecordSource::new(&path)).unwrap();
    assert_eq!(loaded, records);
    assert!(analyzer.unknown_algorithms(&loaded).is_empty());
}

#[test]
fn test_report_over_generated_table() {
    let records = BenchmarkRunner::new(small_config()).unwrap().run().unwrap();
    let analyzer = BenchmarkAnalyzer::default();
    let config = ReportConfig {
        ranking_sizes: vec![16, 64],
        focus_size: 64,
        efficiency_metric: Metric::Total,
    };
    let report = AnalysisReport::build(&analyzer, &records, &config).unwrap();

    assert_eq!(report.algorithms.len(), 6);
    assert_eq!(report.sizes, vec![16, 64]);
    assert_eq!(report.overall.len(), 6);
    assert_eq!(report.normalization.len(), 6);
    assert_eq!(report.efficiency.len(), 6);

    // Bubble sort always does n(n-1)/2 comparisons and no n log n sort gets near that at n=64
    let worst = report.focus_comparisons.last().unwrap();
    assert!(worst.algorithm == "Bubble Sort" || worst.algorithm == "Selection Sort");
    assert_eq!(worst.value, 2016.0);

    let text = report.to_string();
    assert!(text.contains("ARRAY SIZE 16:"));
    assert!(text.contains("NORMALIZATION ANALYSIS"));
    assert!(text.contains("Most Efficient Algorithm:"));
}

#[test]
fn test_producer_column_order_loads() {
    // Column order written by the original benchmark producer
    let file = write_csv(
        "Algorithm,Size,Min_Comparisons,Max_Comparisons,Avg_Comparisons,Min_Swaps,Max_Swaps,Avg_Swaps\n\
         Bubble Sort,100,4950,4950,4950,2101,2893,2476\n\
         Merge Sort,100,525,560,542,672,672,672\n",
    );
    let analyzer = BenchmarkAnalyzer::default();
    let records = analyzer.load(&CsvRecordSource::new(file.path())).unwrap();
    assert_eq!(records[0].avg_swaps, 2476.0);
    assert_eq!(records[0].min_swaps, 2101.0);
    assert_eq!(records[1].avg_comparisons, 542.0);

    let normalized = analyzer.normalize(&records, Metric::Comparisons).unwrap();
    let mut buf = Vec::new();
    write_normalized_csv(&normalized, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("Bubble Sort,100,O(n²),comparisons,4950.0,0.495"));
}

#[test]
fn test_smallest_generated_size_still_reports() {
    let mut config = small_config();
    config.sizes = vec![1, 16];
    assert!(BenchmarkRunner::new(config).is_err());

    let mut config = small_config();
    config.sizes = vec![MIN_ARRAY_SIZE, 16];
    let records = BenchmarkRunner::new(config).unwrap().run().unwrap();

    let analyzer = BenchmarkAnalyzer::default();
    let report_config = ReportConfig {
        ranking_sizes: vec![MIN_ARRAY_SIZE as u64],
        focus_size: MIN_ARRAY_SIZE as u64,
        efficiency_metric: Metric::Comparisons,
    };
    let report = AnalysisReport::build(&analyzer, &records, &report_config).unwrap();
    assert_eq!(report.efficiency.len(), 6);
    assert_eq!(report.normalization.len(), 6);
}
