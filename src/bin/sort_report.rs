use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};

use sortbench::benchmark::{
    AnalysisReport, ReportConfig, print_analysis_report, print_compact_summary,
};
use sortbench::export::save_normalized_csv;
use sortbench::logging::init_logging;
use sortbench::{
    BenchmarkAnalyzer, ComplexityClass, ComplexityTable, CsvRecordSource, Metric,
    parse_class_override,
};

#[derive(Parser, Debug)]
#[command(
    name = "sort-report",
    version,
    about = "Normalize and rank sorting benchmark results"
)]
struct Args {
    /// Benchmark table (CSV with a header row)
    #[arg(short, long, default_value = "detailed_results.csv")]
    input: PathBuf,

    /// CSV delimiter. If omitted, we auto-detect (',' vs '|') from the header line.
    #[arg(long)]
    delim: Option<char>,

    /// Sizes that get their own best -> worst tables
    #[arg(long, value_delimiter = ',', default_value = "100,500,1000")]
    sizes: Vec<u64>,

    /// Size used for the overall and normalization rankings
    #[arg(long, default_value_t = 1000)]
    focus_size: u64,

    /// Metric behind the efficiency constants
    #[arg(long, value_enum, default_value_t = Metric::Comparisons)]
    metric: Metric,

    /// Extra or overriding complexity classes, e.g. --class "Tim Sort=linearithmic"
    #[arg(long = "class", value_parser = parse_class_override)]
    classes: Vec<(String, ComplexityClass)>,

    /// Write every normalized series (comparisons, swaps, total) to this CSV
    #[arg(long)]
    export_normalized: Option<PathBuf>,

    /// Also print a one-line-per-algorithm summary
    #[arg(long)]
    compact: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn sniff_delimiter(input: &Path) -> u8 {
    let Ok(file) = File::open(input) else {
        return b',';
    };
    let mut first_line = String::new();
    if BufReader::new(file).read_line(&mut first_line).is_err() {
        return b',';
    }
    let commas = first_line.matches(',').count();
    let pipes = first_line.matches('|').count();
    if pipes > commas { b'|' } else { b',' }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let mut table = ComplexityTable::standard();
    for (name, class) in &args.classes {
        info!("complexity override: {} -> {}", name, class);
        table.insert(name.clone(), *class);
    }
    let analyzer = BenchmarkAnalyzer::new(table);

    let delimiter = match args.delim {
        Some(c) if c.is_ascii() => c as u8,
        Some(c) => return Err(format!("delimiter must be ASCII, got {:?}", c).into()),
        None => sniff_delimiter(&args.input),
    };
    let source = CsvRecordSource::new(&args.input).with_delimiter(delimiter);
    let records = analyzer.load(&source)?;
    if records.is_empty() {
        warn!("{} contains no benchmark rows", args.input.display());
    }

    let config = ReportConfig {
        ranking_sizes: args.sizes.clone(),
        focus_size: args.focus_size,
        efficiency_metric: args.metric,
    };
    let report = AnalysisReport::build(&analyzer, &records, &config)?;
    print_analysis_report(&report);
    if args.compact {
        print_compact_summary(&report);
    }

    if let Some(path) = &args.export_normalized {
        let mut series = Vec::with_capacity(records.len() * 3);
        for metric in [Metric::Comparisons, Metric::Swaps, Metric::Total] {
            series.extend(analyzer.normalize(&records, metric)?);
        }
        save_normalized_csv(&series, path)?;
        info!("wrote {} normalized rows to {}", series.len(), path.display());
    }

    Ok(())
}
