//! Feed source definitions
//!
//! Sources come either from a feeds file (one URL per line, the original
//! deployment format) or from the curated default list of defense and
//! aerospace trade outlets.

use std::path::Path;

use crate::error::FeedError;

/// A single RSS/Atom feed to poll
#[derive(Debug, Clone)]
pub struct FeedSource {
    /// Name of the source
    pub name: String,
    /// Feed URL
    pub url: String,
}

impl FeedSource {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    /// Build a source from a bare URL, deriving the name from the host
    pub fn from_url(feed_url: &str) -> Self {
        let name = url::Url::parse(feed_url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
            .map(|host| host.strip_prefix("www.").unwrap_or(host.as_str()).to_string())
            .unwrap_or_else(|| feed_url.to_string());
        Self {
            name,
            url: feed_url.to_string(),
        }
    }
}

/// Curated list of defense-industry news feeds
pub fn default_sources() -> Vec<FeedSource> {
    vec![
        FeedSource::new("Defense News", "https://www.defensenews.com/arc/outboundfeeds/rss/"),
        FeedSource::new("Breaking Defense", "https://breakingdefense.com/feed/"),
        FeedSource::new("Defense One", "https://www.defenseone.com/rss/all/"),
        FeedSource::new("Shephard Media", "https://www.shephardmedia.com/news/feed/"),
        FeedSource::new("Aviation Week", "https://aviationweek.com/rss.xml"),
        FeedSource::new("Janes", "https://www.janes.com/feeds/news"),
        FeedSource::new("Reuters Business", "https://www.reutersagency.com/feed/?best-sectors=business-finance&post_type=best"),
        FeedSource::new("AP News", "https://feedx.net/rss/ap.xml"),
    ]
}

/// Load feed sources from a file with one URL per line
///
/// Blank lines and lines starting with `#` are skipped. An empty result
/// is an error: a misread feeds file should not silently turn a run into
/// a no-op.
pub fn load_sources(path: impl AsRef<Path>) -> Result<Vec<FeedSource>, FeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| FeedError::SourceList(format!("Failed to read {}: {}", path.display(), e)))?;

    let sources: Vec<FeedSource> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(FeedSource::from_url)
        .collect();

    if sources.is_empty() {
        return Err(FeedError::SourceList(format!(
            "No feed URLs found in {}",
            path.display()
        )));
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sources_nonempty() {
        let sources = default_sources();
        assert!(!sources.is_empty());
        assert!(sources.iter().any(|s| s.name == "Defense News"));
    }

    #[test]
    fn test_from_url_derives_host_name() {
        let source = FeedSource::from_url("https://www.defensenews.com/arc/outboundfeeds/rss/");
        assert_eq!(source.name, "defensenews.com");
    }

    #[test]
    fn test_load_sources_skips_comments_and_blanks() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("feeds.txt");
        std::fs::write(
            &path,
            "# defense feeds\n\nhttps://breakingdefense.com/feed/\n  https://www.defenseone.com/rss/all/  \n",
        )
        .unwrap();

        let sources = load_sources(&path).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].name, "breakingdefense.com");
    }

    #[test]
    fn test_load_sources_empty_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("feeds.txt");
        std::fs::write(&path, "# nothing here\n").unwrap();
        assert!(load_sources(&path).is_err());
    }
}
