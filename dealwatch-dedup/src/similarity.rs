//! Fuzzy title similarity
//!
//! Edit-distance ratio on a 0-100 scale with a configurable duplicate
//! threshold. Identical strings score 100, fully disjoint strings of any
//! length score near 0.

use strsim::normalized_levenshtein;

/// Title similarity scorer with a duplicate threshold
#[derive(Debug, Clone)]
pub struct TitleSimilarity {
    /// Minimum score (0-100) at which two titles count as duplicates
    threshold: f64,
}

impl TitleSimilarity {
    /// Create a scorer with the given duplicate threshold (0-100 scale)
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Edit-distance similarity ratio between two strings, 0-100
    ///
    /// Two empty strings are identical and score 100.
    pub fn ratio(a: &str, b: &str) -> f64 {
        if a.is_empty() && b.is_empty() {
            return 100.0;
        }
        normalized_levenshtein(a, b) * 100.0
    }

    /// Whether two strings score at or above the duplicate threshold
    pub fn is_match(&self, a: &str, b: &str) -> bool {
        if !self.lengths_within_threshold(a, b) {
            return false;
        }
        Self::ratio(a, b) >= self.threshold
    }

    /// Cheap pre-filter: the edit distance is at least the length
    /// difference, which caps the best possible ratio. Pairs that cannot
    /// reach the threshold are skipped without computing the distance.
    fn lengths_within_threshold(&self, a: &str, b: &str) -> bool {
        let len_a = a.chars().count();
        let len_b = b.chars().count();
        let longest = len_a.max(len_b);
        if longest == 0 {
            return true;
        }
        let best_possible = 100.0 * (1.0 - len_a.abs_diff(len_b) as f64 / longest as f64);
        best_possible >= self.threshold
    }
}
