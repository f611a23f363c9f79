use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the benchmark table: observed operation counts for one
/// algorithm at one array size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    #[serde(rename = "Algorithm")]
    pub algorithm: String,
    #[serde(rename = "Size")]
    pub size: u64,
    #[serde(rename = "Avg_Comparisons")]
    pub avg_comparisons: f64,
    #[serde(rename = "Min_Comparisons")]
    pub min_comparisons: f64,
    #[serde(rename = "Max_Comparisons")]
    pub max_comparisons: f64,
    #[serde(rename = "Avg_Swaps")]
    pub avg_swaps: f64,
    #[serde(rename = "Min_Swaps")]
    pub min_swaps: f64,
    #[serde(rename = "Max_Swaps")]
    pub max_swaps: f64,
}

/// Header names, in the order the table is written.
pub const COLUMNS: [&str; 8] = [
    "Algorithm",
    "Size",
    "Avg_Comparisons",
    "Min_Comparisons",
    "Max_Comparisons",
    "Avg_Swaps",
    "Min_Swaps",
    "Max_Swaps",
];

impl BenchmarkRecord {
    /// Record with identical min/avg/max, handy when only averages are known.
    pub fn from_averages(
        algorithm: impl Into<String>,
        size: u64,
        avg_comparisons: f64,
        avg_swaps: f64,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            size,
            avg_comparisons,
            min_comparisons: avg_comparisons,
            max_comparisons: avg_comparisons,
            avg_swaps,
            min_swaps: avg_swaps,
            max_swaps: avg_swaps,
        }
    }

    /// Average value of `metric` for this row.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Comparisons => self.avg_comparisons,
            Metric::Swaps => self.avg_swaps,
            Metric::Total => self.avg_comparisons + self.avg_swaps,
        }
    }

    pub fn total_operations(&self) -> f64 {
        self.value(Metric::Total)
    }

    /// Check the row invariants: positive size, non-negative finite counts,
    /// and `min <= avg <= max` for both comparisons and swaps.
    pub fn validate(&self) -> Result<(), String> {
        if self.algorithm.trim().is_empty() {
            return Err("empty algorithm name".to_string());
        }
        if self.size == 0 {
            return Err("size must be positive".to_string());
        }
        check_range(
            "comparisons",
            self.min_comparisons,
            self.avg_comparisons,
            self.max_comparisons,
        )?;
        check_range("swaps", self.min_swaps, self.avg_swaps, self.max_swaps)
    }
}

fn check_range(what: &str, min: f64, avg: f64, max: f64) -> Result<(), String> {
    for (label, v) in [("min", min), ("avg", avg), ("max", max)] {
        if !v.is_finite() || v < 0.0 {
            return Err(format!(
                "{} {} must be a non-negative number, got {}",
                label, what, v
            ));
        }
    }
    if !(min <= avg && avg <= max) {
        return Err(format!(
            "{} violate min <= avg <= max ({} / {} / {})",
            what, min, avg, max
        ));
    }
    Ok(())
}

/// Which observed count an analysis is run over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Metric {
    Comparisons,
    Swaps,
    /// Comparisons + swaps
    Total,
}

impl Metric {
    pub fn name(self) -> &'static str {
        match self {
            Metric::Comparisons => "comparisons",
            Metric::Swaps => "swaps",
            Metric::Total => "total operations",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
