//! Feed client
//!
//! Fetches RSS/Atom feeds over HTTP and converts their items into
//! [`FeedEntry`] values with display-normalized, HTML-free text.

use reqwest::Client;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use dealwatch_core::FeedEntry;
use dealwatch_dedup::display_normalize;

use crate::error::FeedError;
use crate::sources::FeedSource;

/// HTTP client over a set of feed sources
pub struct FeedClient {
    client: Client,
    sources: Vec<FeedSource>,
}

impl FeedClient {
    /// Create a client for the given sources
    pub fn new(sources: Vec<FeedSource>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            sources,
        }
    }

    /// Fetch every configured feed, in order
    ///
    /// A feed that fails to fetch or parse is logged and skipped; one
    /// broken source never aborts the batch.
    pub async fn fetch_all(&self) -> Vec<FeedEntry> {
        let mut all_entries = Vec::new();

        for source in &self.sources {
            match self.fetch_source(source).await {
                Ok(entries) => {
                    debug!("Fetched {} entries from {}", entries.len(), source.name);
                    all_entries.extend(entries);
                }
                Err(e) => {
                    warn!("Failed to fetch feed {}: {}", source.name, e);
                }
            }
        }

        info!(
            "Fetched {} total entries from {} feeds",
            all_entries.len(),
            self.sources.len()
        );
        all_entries
    }

    /// Fetch a single feed
    async fn fetch_source(&self, source: &FeedSource) -> Result<Vec<FeedEntry>, FeedError> {
        let response = self
            .client
            .get(&source.url)
            .header("User-Agent", "Dealwatch/1.0")
            .send()
            .await
            .map_err(|e| FeedError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FeedError::ApiError {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", source.url),
            });
        }

        let content = response
            .bytes()
            .await
            .map_err(|e| FeedError::RequestFailed(e.to_string()))?;

        // Try parsing as RSS first, then Atom
        if let Ok(channel) = rss::Channel::read_from(&content[..]) {
            return Ok(parse_rss_channel(&channel));
        }

        if let Ok(atom_feed) = atom_syndication::Feed::read_from(&content[..]) {
            return Ok(parse_atom_feed(&atom_feed));
        }

        Err(FeedError::ParseError(format!(
            "Failed to parse feed: {}",
            source.url
        )))
    }
}

/// Parse RSS items into entries
fn parse_rss_channel(channel: &rss::Channel) -> Vec<FeedEntry> {
    channel
        .items()
        .iter()
        .filter_map(|item| {
            let title = display_normalize(item.title()?);
            let link = item.link()?.trim().to_string();
            let summary = display_normalize(&strip_html(item.description().unwrap_or_default()));
            let published = item.pub_date().unwrap_or_default().to_string();

            Some(FeedEntry {
                id: entry_id(&link),
                title,
                link,
                summary,
                published,
            })
        })
        .collect()
}

/// Parse Atom entries into entries
fn parse_atom_feed(atom_feed: &atom_syndication::Feed) -> Vec<FeedEntry> {
    atom_feed
        .entries()
        .iter()
        .filter_map(|entry| {
            let link = entry.links().first().map(|l| l.href().trim().to_string())?;
            if link.is_empty() {
                return None;
            }

            let title = display_normalize(entry.title());

            let summary_html = entry.summary().map(|s| s.as_str()).unwrap_or_default();
            let content_html = entry.content().and_then(|c| c.value()).unwrap_or_default();
            let summary = if !summary_html.is_empty() {
                display_normalize(&strip_html(summary_html))
            } else {
                display_normalize(&strip_html(content_html))
            };

            let published = entry
                .published()
                .map(|d| d.to_rfc2822())
                .unwrap_or_else(|| entry.updated().to_rfc2822());

            Some(FeedEntry {
                id: entry_id(&link),
                title,
                link,
                summary,
                published,
            })
        })
        .collect()
}

/// Stable entry id: truncated SHA-256 of the link
fn entry_id(link: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(link.as_bytes());
    hex::encode(&hasher.finalize()[..8])
}

/// Strip HTML tags from text
fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    // Clean up whitespace and HTML entities
    result
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
