pub mod reporting;
pub mod runner;
pub mod types;

pub use reporting::{
    AnalysisReport, ReportConfig, SizeRanking, format_count, print_analysis_report,
    print_compact_summary,
};
pub use runner::BenchmarkRunner;
pub use types::{BenchmarkConfig, CountStats, MIN_ARRAY_SIZE};
