//! Measurement counts and execution results.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Measurement counts keyed by outcome bitstring.
///
/// Bitstrings render the most-significant qubit first: qubit N−1 is the
/// leftmost character. Values always sum to the number of shots that
/// produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Counts(FxHashMap<String, u64>);

impl Counts {
    /// Create an empty counts table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` observations of `bitstring`, accumulating with any
    /// existing entry.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for a bitstring (zero if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of observations.
    pub fn total_shots(&self) -> u64 {
        self.0.values().sum()
    }

    /// The most frequently observed outcome, if any.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.0
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(k, v)| (k.as_str(), *v))
    }

    /// Outcomes sorted by descending count, ties broken by bitstring.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.0.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no outcomes were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (bitstring, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bitstring, count) in iter {
            counts.insert(bitstring, count);
        }
        counts
    }
}

/// The result of executing a circuit on a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts.
    pub counts: Counts,
    /// Number of shots requested.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Record the execution time.
    #[must_use]
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut counts = Counts::new();
        counts.insert("011", 1);
        counts.insert("011", 1);
        counts.insert("100", 5);

        assert_eq!(counts.get("011"), 2);
        assert_eq!(counts.get("100"), 5);
        assert_eq!(counts.get("000"), 0);
        assert_eq!(counts.total_shots(), 7);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_counts_most_frequent() {
        let counts: Counts = [("011".to_string(), 600), ("100".to_string(), 400)]
            .into_iter()
            .collect();
        assert_eq!(counts.most_frequent(), Some(("011", 600)));
    }

    #[test]
    fn test_counts_sorted() {
        let counts: Counts = [
            ("00".to_string(), 10),
            ("11".to_string(), 30),
            ("01".to_string(), 10),
        ]
        .into_iter()
        .collect();

        let sorted = counts.sorted();
        assert_eq!(sorted[0], ("11", 30));
        // Ties are broken by bitstring.
        assert_eq!(sorted[1], ("00", 10));
        assert_eq!(sorted[2], ("01", 10));
    }

    #[test]
    fn test_execution_result() {
        let mut counts = Counts::new();
        counts.insert("00", 512);
        counts.insert("11", 512);

        let result = ExecutionResult::new(counts, 1024).with_execution_time(12);
        assert_eq!(result.shots, 1024);
        assert_eq!(result.counts.total_shots(), 1024);
        assert_eq!(result.execution_time_ms, Some(12));
    }

    #[test]
    fn test_counts_serde_round_trip() {
        let counts: Counts = [("011".to_string(), 3)].into_iter().collect();
        let json = serde_json::to_string(&counts).unwrap();
        let restored: Counts = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, counts);
    }
}
