//! Error types for dealwatch

use thiserror::Error;

/// Workspace-wide error type
#[derive(Error, Debug)]
pub enum DealwatchError {
    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Dedup error: {0}")]
    Dedup(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DealwatchError {
    pub fn feed(msg: impl Into<String>) -> Self {
        DealwatchError::Feed(msg.into())
    }

    pub fn dedup(msg: impl Into<String>) -> Self {
        DealwatchError::Dedup(msg.into())
    }

    pub fn output(msg: impl Into<String>) -> Self {
        DealwatchError::Output(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        DealwatchError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        DealwatchError::Internal(msg.into())
    }
}

/// Result type alias for dealwatch operations
pub type DealwatchResult<T> = Result<T, DealwatchError>;
