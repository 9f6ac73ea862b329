//! Defense M&A Feed Monitor
//!
//! Single-shot batch runner: fetches the configured feeds, filters for
//! entries matching both the transaction and defense term sets, drops
//! duplicates against the persisted history, and writes CSV/Markdown/HTML
//! results into a date-stamped directory.

use std::path::PathBuf;

use dealwatch_core::{DedupConfig, FilterConfig, OutputConfig};
use dealwatch_feeds::{default_sources, load_sources};
use dealwatch_services::BatchPipeline;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,dealwatch_cli=debug")),
        )
        .init();

    info!("Starting Defense M&A Feed Monitor");

    // Feed sources: an explicit feeds file wins, otherwise the curated list
    let sources = match std::env::var("DEALWATCH_FEEDS_FILE") {
        Ok(path) => {
            info!("Loading feed sources from: {}", path);
            load_sources(&path)?
        }
        Err(_) => {
            info!("No DEALWATCH_FEEDS_FILE set, using curated default sources");
            default_sources()
        }
    };

    let dedup_config = DedupConfig {
        state_path: PathBuf::from(
            std::env::var("DEALWATCH_STATE_PATH")
                .unwrap_or_else(|_| "deduplication.json".to_string()),
        ),
        fuzzy_threshold: env_parsed("DEALWATCH_FUZZY_THRESHOLD", 97.0)?,
        capacity: env_parsed("DEALWATCH_HISTORY_CAPACITY", 3000)?,
    };
    let output_config = OutputConfig {
        root_dir: PathBuf::from(
            std::env::var("DEALWATCH_OUTPUT_DIR").unwrap_or_else(|_| ".".to_string()),
        ),
    };

    let mut pipeline = BatchPipeline::new(
        sources,
        FilterConfig::default(),
        &dedup_config,
        &output_config,
    )?;

    let report = pipeline.run().await?;

    info!(
        "Done: {} fetched, {} matched, {} accepted, {} duplicates -> {}",
        report.fetched,
        report.matched,
        report.accepted,
        report.duplicates,
        report.output.directory.display()
    );
    Ok(())
}

/// Parse an env var, falling back to a default when unset
fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e: T::Err| anyhow::anyhow!("Invalid {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}
