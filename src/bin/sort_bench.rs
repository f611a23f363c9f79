use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use sortbench::SortAlgorithm;
use sortbench::benchmark::{BenchmarkConfig, BenchmarkRunner};
use sortbench::export::save_records_csv;
use sortbench::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "sort-bench",
    version,
    about = "Count comparisons and swaps of classic sorts over random arrays"
)]
struct Args {
    /// Output CSV path
    #[arg(short, long, default_value = "detailed_results.csv")]
    output: PathBuf,

    /// Array sizes to test (each at least 2)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "100,200,300,400,500,600,700,800,900,1000"
    )]
    sizes: Vec<usize>,

    /// Algorithms to run (e.g. "bubble,merge"); all six by default
    #[arg(long, value_delimiter = ',')]
    algorithms: Vec<SortAlgorithm>,

    /// Random arrays per (algorithm, size)
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// Elements are drawn from 0..max-value
    #[arg(long, default_value_t = 10_000)]
    max_value: i32,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Check that every sorted array is in order
    #[arg(short, long)]
    verify: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let algorithms = if args.algorithms.is_empty() {
        SortAlgorithm::ALL.to_vec()
    } else {
        args.algorithms.clone()
    };

    let config = BenchmarkConfig {
        sizes: args.sizes.clone(),
        algorithms,
        iterations: args.iterations,
        max_value: args.max_value,
        seed: args.seed,
        verify: args.verify,
    };

    println!("Sorting Algorithm Analysis");
    println!("{}", "=".repeat(40));
    println!("Array sizes: {:?}", config.sizes);
    println!("Iterations per test: {}", config.iterations);
    println!("Tracking: min, max, average comparisons and swaps\n");

    let mut runner = BenchmarkRunner::new(config)?;
    let records = runner.run()?;

    save_records_csv(&records, &args.output)?;
    info!("wrote {} records", records.len());
    println!("Results saved to {}", args.output.display());

    Ok(())
}
