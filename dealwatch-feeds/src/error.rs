//! Error types for the feeds module

use thiserror::Error;

/// Errors that can occur while fetching or parsing feeds
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Feed endpoint returned an error response
    #[error("Feed error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Content parsed as neither RSS nor Atom
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Feed source list could not be read
    #[error("Source list error: {0}")]
    SourceList(String),
}
