//! Core types for the Defense M&A Feed Monitor
//!
//! This crate defines the shared data structures used across dealwatch,
//! including feed entries, configuration, and the workspace-wide error type.

pub mod config;
pub mod entry;
pub mod error;

pub use config::{DedupConfig, FilterConfig, OutputConfig};
pub use entry::FeedEntry;
pub use error::{DealwatchError, DealwatchResult};
