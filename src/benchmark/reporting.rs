use crate::analyzer::{
    BenchmarkAnalyzer, NormalizedRank, RankedEntry, algorithms, at_size, least_of, sizes,
};
use crate::error::Result;
use crate::record::{BenchmarkRecord, Metric};
use std::fmt;

/// Which parts of the table the console report focuses on.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Sizes that get their own best -> worst tables
    pub ranking_sizes: Vec<u64>,
    /// Size used for the overall and normalization rankings
    pub focus_size: u64,
    /// Metric behind the efficiency constants
    pub efficiency_metric: Metric,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            ranking_sizes: vec![100, 500, 1000],
            focus_size: 1000,
            efficiency_metric: Metric::Comparisons,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SizeRanking {
    pub size: u64,
    pub comparisons: Vec<RankedEntry>,
    pub swaps: Vec<RankedEntry>,
}

/// Everything the console summary prints, computed once up front.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    pub algorithms: Vec<String>,
    pub sizes: Vec<u64>,
    pub size_rankings: Vec<SizeRanking>,
    pub focus_size: u64,
    /// Total operations at the focus size, best first
    pub overall: Vec<RankedEntry>,
    /// Total operations / complexity factor at the focus size, best first
    pub normalization: Vec<NormalizedRank>,
    pub efficiency_metric: Metric,
    /// Mean normalized metric per algorithm, best first
    pub efficiency: Vec<(String, f64)>,
    /// Comparisons at the focus size, best first
    pub focus_comparisons: Vec<RankedEntry>,
    /// (comparisons + swaps) / n at the focus size, best first
    pub per_element: Vec<RankedEntry>,
    pub unknown_algorithms: Vec<String>,
}

impl AnalysisReport {
    pub fn build(
        analyzer: &BenchmarkAnalyzer,
        records: &[BenchmarkRecord],
        config: &ReportConfig,
    ) -> Result<Self> {
        let size_rankings = config
            .ranking_sizes
            .iter()
            .map(|&size| {
                let rows = at_size(records, size);
                SizeRanking {
                    size,
                    comparisons: analyzer.rank(&rows, Metric::Comparisons, true),
                    swaps: analyzer.rank(&rows, Metric::Swaps, true),
                }
            })
            .collect();

        let focus_rows = at_size(records, config.focus_size);
        let mut per_element = analyzer.ops_per_element(&focus_rows);
        per_element.sort_by(|a, b| a.value.total_cmp(&b.value));

        Ok(Self {
            algorithms: algorithms(records),
            sizes: sizes(records),
            size_rankings,
            focus_size: config.focus_size,
            overall: analyzer.rank(&focus_rows, Metric::Total, true),
            normalization: analyzer.rank_normalized(&focus_rows, Metric::Total, true)?,
            efficiency_metric: config.efficiency_metric,
            efficiency: analyzer.efficiency_ranking(records, config.efficiency_metric)?,
            focus_comparisons: analyzer.rank(&focus_rows, Metric::Comparisons, true),
            per_element,
            unknown_algorithms: analyzer.unknown_algorithms(records),
        })
    }

    pub fn most_efficient(&self) -> Option<&(String, f64)> {
        self.efficiency.first()
    }

    pub fn least_efficient(&self) -> Option<&(String, f64)> {
        least_of(&self.efficiency)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Found data for algorithms: {}", self.algorithms.join(", "))?;
        let sizes: Vec<String> = self.sizes.iter().map(|s| s.to_string()).collect();
        writeln!(f, "Array sizes: [{}]", sizes.join(", "))?;

        writeln!(f, "\n{}", "=".repeat(70))?;
        writeln!(f, "DETAILED PERFORMANCE ANALYSIS")?;
        writeln!(f, "{}", "=".repeat(70))?;

        for ranking in &self.size_rankings {
            writeln!(f, "\nARRAY SIZE {}:", ranking.size)?;
            writeln!(f, "{}", "-".repeat(40))?;
            if ranking.comparisons.is_empty() {
                writeln!(f, "  (no data for this size)")?;
                continue;
            }
            writeln!(f, "COMPARISONS (Best -> Worst):")?;
            write_ranking(f, &ranking.comparisons, "comparisons")?;
            writeln!(f, "\nSWAPS (Best -> Worst):")?;
            write_ranking(f, &ranking.swaps, "swaps")?;
        }

        writeln!(
            f,
            "\nOVERALL EFFICIENCY RANKING (for size {}):",
            self.focus_size
        )?;
        writeln!(f, "{}", "-".repeat(50))?;
        if self.overall.is_empty() {
            writeln!(f, "  (no data for this size)")?;
        } else {
            write_ranking(f, &self.overall, "total operations")?;
        }

        writeln!(
            f,
            "\nNORMALIZATION ANALYSIS (Actual vs Theoretical Performance):"
        )?;
        writeln!(f, "{}", "-".repeat(60))?;
        writeln!(
            f,
            "Lower values = better performance relative to theoretical complexity\n"
        )?;
        if self.normalization.is_empty() {
            writeln!(f, "  (no data for size {})", self.focus_size)?;
        } else {
            writeln!(f, "Array Size {} - Normalized Values:", self.focus_size)?;
            writeln!(f, "(Actual Operations / Theoretical Complexity)\n")?;
            for (i, entry) in self.normalization.iter().enumerate() {
                writeln!(
                    f,
                    "  {}. {:<15} ({:<10}) - Normalized: {:6.2}",
                    i + 1,
                    entry.algorithm,
                    entry.class.notation(),
                    entry.normalized_value
                )?;
            }
        }

        writeln!(
            f,
            "\nOPERATIONS PER ELEMENT (for size {}):",
            self.focus_size
        )?;
        writeln!(f, "{}", "-".repeat(50))?;
        if self.per_element.is_empty() {
            writeln!(f, "  (no data for this size)")?;
        } else {
            for (i, entry) in self.per_element.iter().enumerate() {
                writeln!(
                    f,
                    "  {}. {:<15} - {:>10.2} ops/element",
                    i + 1,
                    entry.algorithm,
                    entry.value
                )?;
            }
        }

        writeln!(f, "\n{}", "=".repeat(60))?;
        writeln!(f, "COMPREHENSIVE ANALYSIS SUMMARY")?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(
            f,
            "\nAlgorithm Efficiency Constants ({} / complexity, lower = better):",
            self.efficiency_metric
        )?;
        for (algorithm, constant) in &self.efficiency {
            writeln!(f, "   {:<15}: {:.6}", algorithm, constant)?;
        }
        if let (Some(best), Some(worst)) = (self.most_efficient(), self.least_efficient()) {
            writeln!(f, "\nMost Efficient Algorithm: {}", best.0)?;
            writeln!(f, "Least Efficient Algorithm: {}", worst.0)?;
        }

        if let (Some(best), Some(worst)) =
            (self.focus_comparisons.first(), self.focus_comparisons.last())
        {
            writeln!(f, "\nFor Array Size {}:", self.focus_size)?;
            writeln!(
                f,
                "   Best Performance:  {} ({} comparisons)",
                best.algorithm,
                format_count(best.value)
            )?;
            writeln!(
                f,
                "   Worst Performance: {} ({} comparisons)",
                worst.algorithm,
                format_count(worst.value)
            )?;
        }

        if !self.unknown_algorithms.is_empty() {
            writeln!(
                f,
                "\nWARNING: no complexity class configured for {}; normalized as O(n²)",
                self.unknown_algorithms.join(", ")
            )?;
        }

        Ok(())
    }
}

fn write_ranking(f: &mut fmt::Formatter, entries: &[RankedEntry], unit: &str) -> fmt::Result {
    for (i, entry) in entries.iter().enumerate() {
        writeln!(
            f,
            "  {}. {:<15} - {:>8} {}",
            i + 1,
            entry.algorithm,
            format_count(entry.value),
            unit
        )?;
    }
    Ok(())
}

/// Round to a whole count and group thousands: `1234567.4` -> `"1,234,567"`.
pub fn format_count(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Print the full console report.
pub fn print_analysis_report(report: &AnalysisReport) {
    print!("{}", report);
}

/// One line per algorithm with its efficiency constant.
pub fn print_compact_summary(report: &AnalysisReport) {
    println!("\n=== COMPACT SUMMARY ===");
    for (algorithm, constant) in &report.efficiency {
        println!(
            "{}: {:.6} ({} / complexity)",
            algorithm, constant, report.efficiency_metric
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(999.4), "999");
        assert_eq!(format_count(999.6), "1,000");
        assert_eq!(format_count(1_234_567.0), "1,234,567");
        assert_eq!(format_count(-12_345.0), "-12,345");
    }

    fn records() -> Vec<BenchmarkRecord> {
        vec![
            BenchmarkRecord::from_averages("Bubble Sort", 100, 4950.0, 2500.0),
            BenchmarkRecord::from_averages("Merge Sort", 100, 540.0, 672.0),
            BenchmarkRecord::from_averages("Bubble Sort", 1000, 499_500.0, 250_000.0),
            BenchmarkRecord::from_averages("Merge Sort", 1000, 8700.0, 9976.0),
        ]
    }

    #[test]
    fn test_report_sections() {
        let analyzer = BenchmarkAnalyzer::default();
        let report = AnalysisReport::build(&analyzer, &records(), &ReportConfig::default()).unwrap();

        assert_eq!(report.algorithms, vec!["Bubble Sort", "Merge Sort"]);
        assert_eq!(report.sizes, vec![100, 1000]);
        assert_eq!(report.size_rankings.len(), 3);
        assert!(report.size_rankings[1].comparisons.is_empty()); // no size 500
        assert_eq!(report.overall[0].algorithm, "Merge Sort");
        assert_eq!(report.focus_comparisons.last().unwrap().algorithm, "Bubble Sort");
        assert!(report.unknown_algorithms.is_empty());
        let per_element: Vec<_> = report
            .per_element
            .iter()
            .map(|e| (e.algorithm.as_str(), e.value))
            .collect();
        assert_eq!(per_element, vec![("Merge Sort", 18.676), ("Bubble Sort", 749.5)]);

        let text = report.to_string();
        assert!(text.contains("ARRAY SIZE 500:"));
        assert!(text.contains("(no data for this size)"));
        assert!(text.contains("499,500 comparisons"));
        assert!(text.contains("O(n log n)"));
        assert!(text.contains("OPERATIONS PER ELEMENT (for size 1000):"));
        assert!(text.contains("749.50 ops/element"));
        assert!(!text.contains("WARNING"));
    }

    #[test]
    fn test_report_least_efficient_tie_is_first_seen() {
        let analyzer = BenchmarkAnalyzer::default();
        let rows = vec![
            BenchmarkRecord::from_averages("Selection Sort", 10, 50.0, 0.0),
            BenchmarkRecord::from_averages("Bubble Sort", 10, 50.0, 0.0),
        ];
        let config = ReportConfig {
            ranking_sizes: vec![10],
            focus_size: 10,
            efficiency_metric: Metric::Comparisons,
        };
        let report = AnalysisReport::build(&analyzer, &rows, &config).unwrap();
        assert_eq!(report.most_efficient().unwrap().0, "Selection Sort");
        assert_eq!(report.least_efficient().unwrap().0, "Selection Sort");
    }

    #[test]
    fn test_report_flags_unknown_algorithms() {
        let analyzer = BenchmarkAnalyzer::default();
        let mut rows = records();
        rows.push(BenchmarkRecord::from_averages("Tim Sort", 1000, 9000.0, 100.0));
        let report = AnalysisReport::build(&analyzer, &rows, &ReportConfig::default()).unwrap();
        assert_eq!(report.unknown_algorithms, vec!["Tim Sort"]);
        assert!(report.to_string().contains("WARNING: no complexity class configured for Tim Sort"));
    }
}
