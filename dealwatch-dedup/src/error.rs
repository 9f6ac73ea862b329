//! Error types for the dedup subsystem

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or persisting the dedup record
#[derive(Debug, Error)]
pub enum DedupError {
    /// The persisted record exists but cannot be parsed. Fatal: running
    /// with partial history risks mass duplicate leakage, so the record
    /// is never silently discarded.
    #[error("Corrupt dedup record at {path}: {source}")]
    Corrupt {
        /// Path of the offending record
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the record failed for filesystem reasons
    #[error("I/O error on dedup record at {path}: {source}")]
    Io {
        /// Path of the record
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
