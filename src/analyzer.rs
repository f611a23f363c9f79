use crate::RecordSource;
use crate::complexity::{ComplexityClass, ComplexityTable};
use crate::error::{AnalysisError, DataSourceError, Result};
use crate::record::{BenchmarkRecord, Metric};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{debug, warn};

/// Observed metric divided by the theoretical complexity factor for one row.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedResult {
    pub algorithm: String,
    pub size: u64,
    pub class: ComplexityClass,
    pub metric: Metric,
    /// Raw average count
    pub value: f64,
    pub normalized_value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntry {
    pub algorithm: String,
    pub size: u64,
    pub value: f64,
}

/// Normalized value ranking entry, carries the class for labelling.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedRank {
    pub algorithm: String,
    pub size: u64,
    pub class: ComplexityClass,
    pub value: f64,
    pub normalized_value: f64,
}

/// Pure transformations over a loaded benchmark table.
///
/// The analyzer only holds the algorithm -> complexity lookup; records are
/// passed to every operation and never modified.
#[derive(Clone, Debug, Default)]
pub struct BenchmarkAnalyzer {
    table: ComplexityTable,
}

impl BenchmarkAnalyzer {
    pub fn new(table: ComplexityTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ComplexityTable {
        &self.table
    }

    /// Read every record from `source` and validate the row invariants.
    pub fn load(&self, source: &dyn RecordSource) -> Result<Vec<BenchmarkRecord>> {
        debug!("loading benchmark records from {}", source.description());
        let records = source.read_records()?;

        for (i, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|reason| DataSourceError::InvalidRecord {
                    row: i + 1,
                    algorithm: record.algorithm.clone(),
                    size: record.size,
                    reason,
                })?;
        }

        debug!("loaded {} benchmark records", records.len());
        self.warn_unknown(&records);
        Ok(records)
    }

    pub fn classify(&self, algorithm: &str) -> ComplexityClass {
        self.table.classify(algorithm)
    }

    /// n² or n·log2(n) depending on the class of `algorithm`.
    pub fn complexity_factor(&self, algorithm: &str, size: u64) -> Result<f64> {
        self.classify(algorithm).factor(algorithm, size)
    }

    /// One result per record, in input order.
    pub fn normalize(
        &self,
        records: &[BenchmarkRecord],
        metric: Metric,
    ) -> Result<Vec<NormalizedResult>> {
        records
            .iter()
            .map(|r| -> Result<NormalizedResult> {
                let class = self.classify(&r.algorithm);
                let factor = class.factor(&r.algorithm, r.size)?;
                let value = r.value(metric);
                Ok(NormalizedResult {
                    algorithm: r.algorithm.clone(),
                    size: r.size,
                    class,
                    metric,
                    value,
                    normalized_value: value / factor,
                })
            })
            .collect()
    }

    /// Rows sorted by the raw metric. Stable: equal values keep input order
    /// in both directions.
    pub fn rank(
        &self,
        records: &[BenchmarkRecord],
        metric: Metric,
        ascending: bool,
    ) -> Vec<RankedEntry> {
        let mut ranked: Vec<RankedEntry> = records
            .iter()
            .map(|r| RankedEntry {
                algorithm: r.algorithm.clone(),
                size: r.size,
                value: r.value(metric),
            })
            .collect();

        if ascending {
            ranked.sort_by(|a, b| a.value.total_cmp(&b.value));
        } else {
            ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
        }
        ranked
    }

    /// Rows sorted by normalized value, stable like [`Self::rank`].
    pub fn rank_normalized(
        &self,
        records: &[BenchmarkRecord],
        metric: Metric,
        ascending: bool,
    ) -> Result<Vec<NormalizedRank>> {
        let mut ranked: Vec<NormalizedRank> = self
            .normalize(records, metric)?
            .into_iter()
            .map(|n| NormalizedRank {
                algorithm: n.algorithm,
                size: n.size,
                class: n.class,
                value: n.value,
                normalized_value: n.normalized_value,
            })
            .collect();

        if ascending {
            ranked.sort_by(|a, b| a.normalized_value.total_cmp(&b.normalized_value));
        } else {
            ranked.sort_by(|a, b| b.normalized_value.total_cmp(&a.normalized_value));
        }
        Ok(ranked)
    }

    /// Mean normalized value per algorithm, across every size present.
    pub fn average_normalized_by_algorithm(
        &self,
        records: &[BenchmarkRecord],
        metric: Metric,
    ) -> Result<BTreeMap<String, f64>> {
        let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        for n in self.normalize(records, metric)? {
            let entry = sums.entry(n.algorithm).or_insert((0.0, 0));
            entry.0 += n.normalized_value;
            entry.1 += 1;
        }

        Ok(sums
            .into_iter()
            .map(|(algorithm, (sum, count))| (algorithm, sum / count as f64))
            .collect())
    }

    /// Efficiency constants, lowest (best) first. Ties keep the order in
    /// which algorithms first appear in `records`.
    pub fn efficiency_ranking(
        &self,
        records: &[BenchmarkRecord],
        metric: Metric,
    ) -> Result<Vec<(String, f64)>> {
        let mut averages = self.average_normalized_by_algorithm(records, metric)?;
        let mut ranking: Vec<(String, f64)> = algorithms(records)
            .into_iter()
            .filter_map(|name| averages.remove(&name).map(|avg| (name, avg)))
            .collect();
        ranking.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(ranking)
    }

    pub fn most_efficient(
        &self,
        records: &[BenchmarkRecord],
        metric: Metric,
    ) -> Result<(String, f64)> {
        self.efficiency_ranking(records, metric)?
            .into_iter()
            .next()
            .ok_or(AnalysisError::EmptyInput)
    }

    pub fn least_efficient(
        &self,
        records: &[BenchmarkRecord],
        metric: Metric,
    ) -> Result<(String, f64)> {
        let ranking = self.efficiency_ranking(records, metric)?;
        least_of(&ranking).cloned().ok_or(AnalysisError::EmptyInput)
    }

    /// Total operations per element, `(comparisons + swaps) / n`, in input order.
    pub fn ops_per_element(&self, records: &[BenchmarkRecord]) -> Vec<RankedEntry> {
        records
            .iter()
            .map(|r| RankedEntry {
                algorithm: r.algorithm.clone(),
                size: r.size,
                value: r.total_operations() / r.size as f64,
            })
            .collect()
    }

    /// Distinct algorithm names that are not in the lookup table.
    pub fn unknown_algorithms(&self, records: &[BenchmarkRecord]) -> Vec<String> {
        algorithms(records)
            .into_iter()
            .filter(|name| !self.table.is_known(name))
            .collect()
    }

    fn warn_unknown(&self, records: &[BenchmarkRecord]) {
        for name in self.unknown_algorithms(records) {
            warn!(
                "algorithm {:?} is not in the complexity table, treating it as {}",
                name,
                self.table.fallback()
            );
        }
    }
}

/// Highest constant in an ascending efficiency ranking. On a tie the entry
/// that appears first wins, same as the best end.
pub fn least_of(ranking: &[(String, f64)]) -> Option<&(String, f64)> {
    let worst = ranking.last()?;
    ranking.iter().find(|(_, v)| v.total_cmp(&worst.1).is_eq())
}

/// Records for one array size, in input order.
pub fn at_size(records: &[BenchmarkRecord], size: u64) -> Vec<BenchmarkRecord> {
    records.iter().filter(|r| r.size == size).cloned().collect()
}

/// Distinct algorithm names in order of first appearance.
pub fn algorithms(records: &[BenchmarkRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut names = Vec::new();
    for record in records {
        if seen.insert(record.algorithm.as_str()) {
            names.push(record.algorithm.clone());
        }
    }
    names
}

/// Distinct sizes, ascending.
pub fn sizes(records: &[BenchmarkRecord]) -> Vec<u64> {
    records
        .iter()
        .map(|r| r.size)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
