//! Feed entry data structures

use serde::{Deserialize, Serialize};

/// A single article pulled from an RSS or Atom feed
///
/// Entries are immutable once constructed: the feed layer builds them
/// (with the summary already stripped of HTML) and the filter, dedup,
/// and output layers only read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Unique identifier (hash of link)
    pub id: String,
    /// Article title
    pub title: String,
    /// Article URL
    pub link: String,
    /// Brief summary/excerpt, HTML already stripped
    pub summary: String,
    /// Publication timestamp as supplied by the feed, opaque
    #[serde(default)]
    pub published: String,
}

impl FeedEntry {
    /// Title and summary joined for keyword matching
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_text() {
        let entry = FeedEntry {
            id: "abc".to_string(),
            title: "Acme buys Widget Co".to_string(),
            link: "https://example.com/1".to_string(),
            summary: "A deal was announced.".to_string(),
            published: String::new(),
        };
        assert_eq!(entry.combined_text(), "Acme buys Widget Co A deal was announced.");
    }
}
