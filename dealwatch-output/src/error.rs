//! Error types for the output module

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing result files
#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating the output directory or writing a file failed
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
