//! Configuration for the filter, dedup, and output stages
//!
//! Term sets, the fuzzy threshold, and the history bound are configuration
//! data: components take them as parameters and never hard-code them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Keyword term sets for entry filtering
///
/// An entry is kept only when its combined title+summary text matches at
/// least one term from *each* set (case-insensitive substring match).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// M&A transaction terminology
    pub transaction_terms: Vec<String>,
    /// Defense-industry terminology
    pub domain_terms: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            transaction_terms: [
                "acquisition",
                "merger",
                "takeover",
                "buyout",
                "acquires",
                "merges with",
                "purchases",
                "absorbs",
                "joint venture",
                "consolidates with",
                "stake in",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            domain_terms: [
                "defense company",
                "defense",
                "defence",
                "military",
                "military contractor",
                "aerospace",
                "security firm",
                "military supplier",
                "weapons manufacturer",
                "armed forces",
                "defense technology",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Configuration for the deduplication store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupConfig {
    /// Minimum title similarity score (0-100 scale) treated as a duplicate
    pub fuzzy_threshold: f64,
    /// Maximum retained entries per history sequence, oldest evicted first
    pub capacity: usize,
    /// Path of the persisted dedup record
    pub state_path: PathBuf,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 97.0,
            capacity: 3000,
            state_path: PathBuf::from("deduplication.json"),
        }
    }
}

/// Configuration for the output writers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory under which the date-stamped result folder is created
    pub root_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
        }
    }
}
