//! Batch pipeline
//!
//! One run: fetch every feed, keyword-filter the entries, pass survivors
//! through the dedup store in order, persist the store once, and hand the
//! accepted list to the output writers. Dedup stays single-writer: all
//! `check_and_record` calls happen here, sequentially, after fetching.

use thiserror::Error;
use tracing::{debug, info};

use dealwatch_core::{DedupConfig, FeedEntry, FilterConfig, OutputConfig};
use dealwatch_dedup::{DedupError, DedupStore};
use dealwatch_feeds::{EntryFilter, FeedClient, FeedSource};
use dealwatch_output::{OutputError, OutputPaths, OutputWriter};

/// Errors that can abort a batch run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Dedup(#[from] DedupError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Counters and output locations for a completed run
#[derive(Debug)]
pub struct PipelineReport {
    /// Entries pulled from all feeds
    pub fetched: usize,
    /// Entries matching both keyword sets
    pub matched: usize,
    /// Entries accepted as new by the dedup store
    pub accepted: usize,
    /// Entries rejected as duplicates
    pub duplicates: usize,
    /// Files written for this run
    pub output: OutputPaths,
}

/// Filter+dedup result for one batch of entries
#[derive(Debug)]
pub struct ProcessedBatch {
    /// Entries accepted in order
    pub accepted: Vec<FeedEntry>,
    /// Size of the incoming batch
    pub fetched: usize,
    /// Entries that passed the keyword filter
    pub matched: usize,
}

/// End-to-end batch orchestrator
pub struct BatchPipeline {
    client: FeedClient,
    filter: EntryFilter,
    store: DedupStore,
    writer: OutputWriter,
}

impl BatchPipeline {
    /// Build a pipeline, loading the persisted dedup history
    ///
    /// Fails fast when the dedup record is corrupt, before any feed is
    /// fetched or any output written.
    pub fn new(
        sources: Vec<FeedSource>,
        filter_config: FilterConfig,
        dedup_config: &DedupConfig,
        output_config: &OutputConfig,
    ) -> Result<Self, PipelineError> {
        Ok(Self {
            client: FeedClient::new(sources),
            filter: EntryFilter::new(filter_config),
            store: DedupStore::load(dedup_config)?,
            writer: OutputWriter::new(output_config),
        })
    }

    /// Run one full batch
    pub async fn run(&mut self) -> Result<PipelineReport, PipelineError> {
        let entries = self.client.fetch_all().await;
        let batch = self.process(entries);

        self.store.persist()?;
        let output = self.writer.write_all(&batch.accepted)?;

        let report = PipelineReport {
            fetched: batch.fetched,
            matched: batch.matched,
            accepted: batch.accepted.len(),
            duplicates: batch.matched - batch.accepted.len(),
            output,
        };
        info!(
            "Batch complete: {} fetched, {} matched, {} accepted, {} duplicates",
            report.fetched, report.matched, report.accepted, report.duplicates
        );
        Ok(report)
    }

    /// Keyword-filter a batch and dedup the survivors in order
    pub fn process(&mut self, entries: Vec<FeedEntry>) -> ProcessedBatch {
        let fetched = entries.len();
        let mut matched = 0;
        let mut accepted = Vec::new();

        for entry in entries {
            if !self.filter.accept(&entry) {
                continue;
            }
            matched += 1;

            if self.store.check_and_record(&entry) {
                accepted.push(entry);
            } else {
                debug!("Dropped duplicate entry: {}", entry.title);
            }
        }

        ProcessedBatch {
            accepted,
            fetched,
            matched,
        }
    }

    /// The dedup store backing this pipeline
    pub fn store(&self) -> &DedupStore {
        &self.store
    }
}
