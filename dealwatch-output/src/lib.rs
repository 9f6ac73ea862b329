//! Result writers for the Defense M&A Feed Monitor
//!
//! Simple format adapters: the accepted-entry list goes out as CSV,
//! Markdown, and HTML files in a date-stamped directory. No algorithmic
//! content lives here.

pub mod error;
pub mod writer;

pub use error::OutputError;
pub use writer::{OutputPaths, OutputWriter};
