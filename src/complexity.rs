//! Theoretical complexity classes and the name -> class lookup used for normalization.
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{AnalysisError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexityClass {
    /// O(n²)
    Quadratic,
    /// O(n log n)
    Linearithmic,
}

impl ComplexityClass {
    /// Operation-count formula for an array of `size` elements.
    ///
    /// Fails with [`AnalysisError::DivisionEdgeCase`] when the factor would be
    /// zero: `size == 0` for either class, `size == 1` for n log n.
    pub fn factor(self, algorithm: &str, size: u64) -> Result<f64> {
        let n = size as f64;
        let factor = match self {
            ComplexityClass::Quadratic => n * n,
            ComplexityClass::Linearithmic => n * n.log2(),
        };
        if factor > 0.0 && factor.is_finite() {
            Ok(factor)
        } else {
            Err(AnalysisError::DivisionEdgeCase {
                algorithm: algorithm.to_string(),
                size,
                class: self,
            })
        }
    }

    /// Big-O label used in reports.
    pub fn notation(self) -> &'static str {
        match self {
            ComplexityClass::Quadratic => "O(n²)",
            ComplexityClass::Linearithmic => "O(n log n)",
        }
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

impl FromStr for ComplexityClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quadratic" | "n2" | "n^2" => Ok(ComplexityClass::Quadratic),
            "linearithmic" | "nlogn" | "n log n" => Ok(ComplexityClass::Linearithmic),
            other => Err(format!(
                "unknown complexity class `{}` (expected quadratic or linearithmic)",
                other
            )),
        }
    }
}

pub const QUADRATIC_ALGORITHMS: [&str; 3] = ["Bubble Sort", "Selection Sort", "Insertion Sort"];
pub const LINEARITHMIC_ALGORITHMS: [&str; 3] = ["Merge Sort", "Quick Sort", "Heap Sort"];

/// Explicit algorithm-name -> complexity-class mapping.
///
/// Names missing from the table resolve to `fallback` (Quadratic unless changed).
/// Lookups are exact and case-sensitive, matching the names the benchmark
/// producer writes.
#[derive(Debug, Clone)]
pub struct ComplexityTable {
    classes: HashMap<String, ComplexityClass>,
    fallback: ComplexityClass,
}

impl ComplexityTable {
    /// Empty table; every name falls back to Quadratic.
    pub fn empty() -> Self {
        Self {
            classes: HashMap::new(),
            fallback: ComplexityClass::Quadratic,
        }
    }

    /// The six classic sorts.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        for name in QUADRATIC_ALGORITHMS {
            table.insert(name, ComplexityClass::Quadratic);
        }
        for name in LINEARITHMIC_ALGORITHMS {
            table.insert(name, ComplexityClass::Linearithmic);
        }
        table
    }

    /// Add or override an entry.
    pub fn insert(&mut self, algorithm: impl Into<String>, class: ComplexityClass) {
        self.classes.insert(algorithm.into(), class);
    }

    pub fn with(mut self, algorithm: impl Into<String>, class: ComplexityClass) -> Self {
        self.insert(algorithm, class);
        self
    }

    pub fn fallback(&self) -> ComplexityClass {
        self.fallback
    }

    pub fn set_fallback(&mut self, class: ComplexityClass) {
        self.fallback = class;
    }

    /// Class for `algorithm`, or `None` if the name is not in the table.
    pub fn get(&self, algorithm: &str) -> Option<ComplexityClass> {
        self.classes.get(algorithm).copied()
    }

    pub fn is_known(&self, algorithm: &str) -> bool {
        self.classes.contains_key(algorithm)
    }

    /// Class for `algorithm`, defaulting to the fallback for unknown names.
    pub fn classify(&self, algorithm: &str) -> ComplexityClass {
        self.get(algorithm).unwrap_or(self.fallback)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for ComplexityTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parse a `NAME=CLASS` override, e.g. `"Tim Sort=linearithmic"`.
pub fn parse_class_override(s: &str) -> std::result::Result<(String, ComplexityClass), String> {
    let (name, class) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=CLASS, got `{}`", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty algorithm name in `{}`", s));
    }
    Ok((name.to_string(), class.parse()?))
}
