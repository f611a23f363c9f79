use super::types::{BenchmarkConfig, CountStats};
use crate::error::{AnalysisError, Result};
use crate::record::BenchmarkRecord;
use crate::sort::{OpCounter, SortAlgorithm};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Runs the instrumented sorts over random arrays and aggregates the counts
/// into one [`BenchmarkRecord`] per (size, algorithm).
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    rng: StdRng,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Sizes are the outer loop, algorithms the inner one.
    pub fn run(&mut self) -> Result<Vec<BenchmarkRecord>> {
        let sizes = self.config.sizes.clone();
        let algorithms = self.config.algorithms.clone();
        let mut records = Vec::with_capacity(sizes.len() * algorithms.len());

        for size in sizes {
            info!("Testing array size: {}", size);
            for &algorithm in &algorithms {
                let record = self.run_algorithm(algorithm, size)?;
                info!(
                    "  {}: comparisons min={} max={} avg={:.1}; swaps min={} max={} avg={:.1}",
                    algorithm,
                    record.min_comparisons,
                    record.max_comparisons,
                    record.avg_comparisons,
                    record.min_swaps,
                    record.max_swaps,
                    record.avg_swaps
                );
                records.push(record);
            }
        }

        Ok(records)
    }

    /// Sort `iterations` fresh random arrays of `size` elements.
    pub fn run_algorithm(&mut self, algorithm: SortAlgorithm, size: usize) -> Result<BenchmarkRecord> {
        debug!(
            "running {} ({} iterations, n={})",
            algorithm, self.config.iterations, size
        );
        let mut comparisons = CountStats::default();
        let mut swaps = CountStats::default();
        let mut data = vec![0i32; size];

        for _ in 0..self.config.iterations {
            self.fill_random(&mut data);
            let mut counter = OpCounter::new();
            algorithm.sort(&mut data, &mut counter);

            if self.config.verify && !data.windows(2).all(|w| w[0] <= w[1]) {
                return Err(AnalysisError::UnsortedOutput {
                    algorithm: algorithm.name().to_string(),
                    size,
                });
            }

            comparisons.update(counter.comparisons);
            swaps.update(counter.swaps);
        }

        let n = self.config.iterations;
        Ok(BenchmarkRecord {
            algorithm: algorithm.name().to_string(),
            size: size as u64,
            avg_comparisons: comparisons.average(n),
            min_comparisons: comparisons.min as f64,
            max_comparisons: comparisons.max as f64,
            avg_swaps: swaps.average(n),
            min_swaps: swaps.min as f64,
            max_swaps: swaps.max as f64,
        })
    }

    fn fill_random(&mut self, data: &mut [i32]) {
        let max = self.config.max_value;
        for slot in data.iter_mut() {
            *slot = self.rng.random_range(0..max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchmarkConfig {
        BenchmarkConfig {
            sizes: vec![10, 20],
            algorithms: vec![SortAlgorithm::Bubble, SortAlgorithm::Merge],
            iterations: 25,
            max_value: 1000,
            seed: Some(42),
            verify: true,
        }
    }

    #[test]
    fn test_record_order_and_shape() {
        let mut runner = BenchmarkRunner::new(small_config()).unwrap();
        let records = runner.run().unwrap();
        let keys: Vec<_> = records
            .iter()
            .map(|r| (r.size, r.algorithm.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (10, "Bubble Sort"),
                (10, "Merge Sort"),
                (20, "Bubble Sort"),
                (20, "Merge Sort")
            ]
        );
        for r in &records {
            assert!(r.validate().is_ok(), "invalid record {:?}", r);
        }
    }

    #[test]
    fn test_bubble_comparisons_are_constant() {
        let mut runner = BenchmarkRunner::new(small_config()).unwrap();
        let record = runner.run_algorithm(SortAlgorithm::Bubble, 10).unwrap();
        assert_eq!(record.min_comparisons, 45.0);
        assert_eq!(record.max_comparisons, 45.0);
        assert!((record.avg_comparisons - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = BenchmarkRunner::new(small_config()).unwrap().run().unwrap();
        let b = BenchmarkRunner::new(small_config()).unwrap().run().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_configs() {
        let mut config = small_config();
        config.iterations = 0;
        assert!(matches!(
            BenchmarkRunner::new(config),
            Err(AnalysisError::InvalidConfig(_))
        ));

        let mut config = small_config();
        config.sizes = vec![10, 0];
        assert!(BenchmarkRunner::new(config).is_err());

        let mut config = small_config();
        config.sizes = vec![1, 16];
        match BenchmarkRunner::new(config) {
            Err(AnalysisError::InvalidConfig(message)) => assert!(message.contains("got 1")),
            other => panic!("size 1 accepted: {:?}", other.map(|_| ())),
        }

        let mut config = small_config();
        config.sizes = vec![2];
        assert!(BenchmarkRunner::new(config).is_ok());

        let mut config = small_config();
        config.max_value = 0;
        assert!(BenchmarkRunner::new(config).is_err());

        let mut config = small_config();
        config.algorithms.clear();
        assert!(BenchmarkRunner::new(config).is_err());
    }
}
