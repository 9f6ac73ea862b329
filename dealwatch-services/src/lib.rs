//! Orchestration services for the Defense M&A Feed Monitor

pub mod pipeline;

pub use pipeline::{BatchPipeline, PipelineError, PipelineReport};
