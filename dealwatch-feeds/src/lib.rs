//! Feed ingestion for the Defense M&A Feed Monitor
//!
//! This crate fetches RSS/Atom feeds, strips HTML from summaries, builds
//! immutable [`dealwatch_core::FeedEntry`] values, and applies the
//! two-term-set keyword filter that decides which entries are worth
//! deduplicating at all.

pub mod client;
pub mod error;
pub mod filter;
pub mod sources;

pub use client::FeedClient;
pub use error::FeedError;
pub use filter::{matches_any, EntryFilter};
pub use sources::{default_sources, load_sources, FeedSource};
