//! Deduplication subsystem for the Defense M&A Feed Monitor
//!
//! This crate holds the only non-trivial machinery in dealwatch: a
//! bounded-history, dual-key duplicate detector. Titles are matched
//! fuzzily (edit-distance ratio against every retained title), links are
//! matched exactly, and both histories survive across runs through a
//! JSON record on disk.

pub mod error;
pub mod normalize;
pub mod similarity;
pub mod store;

pub use error::DedupError;
pub use normalize::{display_normalize, normalize};
pub use similarity::TitleSimilarity;
pub use store::{DedupRecord, DedupStore};
