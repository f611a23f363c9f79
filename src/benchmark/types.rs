use crate::error::{AnalysisError, Result};
use crate::sort::SortAlgorithm;

/// Smallest array size every complexity class has a defined factor for.
pub const MIN_ARRAY_SIZE: usize = 2;

#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    pub sizes: Vec<usize>,
    pub algorithms: Vec<SortAlgorithm>,
    /// Random arrays sorted per (algorithm, size)
    pub iterations: usize,
    /// Elements are drawn uniformly from `0..max_value`
    pub max_value: i32,
    pub seed: Option<u64>,
    /// Check every sorted array and fail on an ordering violation
    pub verify: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: (1..=10).map(|i| i * 100).collect(),
            algorithms: SortAlgorithm::ALL.to_vec(),
            iterations: 1000,
            max_value: 10_000,
            seed: None,
            verify: false,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "at least one array size is required".to_string(),
            ));
        }
        // n log2 n is zero at n = 1, so smaller tables could not be normalized
        if let Some(size) = self.sizes.iter().find(|&&s| s < MIN_ARRAY_SIZE) {
            return Err(AnalysisError::InvalidConfig(format!(
                "array sizes must be at least {}, got {}",
                MIN_ARRAY_SIZE, size
            )));
        }
        if self.algorithms.is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "at least one algorithm is required".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(AnalysisError::InvalidConfig(
                "iterations must be positive".to_string(),
            ));
        }
        if self.max_value < 1 {
            return Err(AnalysisError::InvalidConfig(format!(
                "max value must be at least 1, got {}",
                self.max_value
            )));
        }
        Ok(())
    }
}

/// Min / max / running total of one counter across iterations.
#[derive(Clone, Copy, Debug)]
pub struct CountStats {
    pub min: u64,
    pub max: u64,
    pub total: u64,
}

impl Default for CountStats {
    fn default() -> Self {
        Self {
            min: u64::MAX,
            max: 0,
            total: 0,
        }
    }
}

impl CountStats {
    pub fn update(&mut self, value: u64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.total += value;
    }

    pub fn average(&self, samples: usize) -> f64 {
        if samples == 0 {
            0.0
        } else {
            self.total as f64 / samples as f64
        }
    }
}
