//! Keyword filtering
//!
//! An entry survives only when its combined title+summary text contains
//! at least one transaction term AND at least one domain term. The term
//! sets are configuration data; nothing here knows what they contain.

use dealwatch_core::{FeedEntry, FilterConfig};
use tracing::debug;

/// Case-insensitive substring test against a term set
///
/// Returns true on the first matching term; an empty term set never
/// matches anything.
pub fn matches_any(text: &str, terms: &[String]) -> bool {
    if terms.is_empty() {
        return false;
    }
    let text_lower = text.to_lowercase();
    terms
        .iter()
        .any(|term| text_lower.contains(&term.to_lowercase()))
}

/// Two-term-set entry filter
#[derive(Debug, Clone)]
pub struct EntryFilter {
    config: FilterConfig,
}

impl EntryFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Whether an entry matches both term sets
    pub fn accept(&self, entry: &FeedEntry) -> bool {
        let combined = entry.combined_text();
        let accepted = matches_any(&combined, &self.config.transaction_terms)
            && matches_any(&combined, &self.config.domain_terms);
        if !accepted {
            debug!("Filtered out: {}", entry.title);
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, summary: &str) -> FeedEntry {
        FeedEntry {
            id: "id".to_string(),
            title: title.to_string(),
            link: "https://a.example/1".to_string(),
            summary: summary.to_string(),
            published: String::new(),
        }
    }

    #[test]
    fn test_matches_any_case_insensitive() {
        let terms = vec!["merger".to_string(), "joint venture".to_string()];
        assert!(matches_any("Announcing a MERGER today", &terms));
        assert!(matches_any("new Joint Venture formed", &terms));
        assert!(!matches_any("quarterly earnings report", &terms));
    }

    #[test]
    fn test_empty_term_set_never_matches() {
        assert!(!matches_any("anything at all", &[]));
    }

    #[test]
    fn test_accept_requires_both_sets() {
        let filter = EntryFilter::new(FilterConfig::default());

        // Transaction term only
        assert!(!filter.accept(&entry("Retailer announces merger", "grocery chains combine")));
        // Domain term only
        assert!(!filter.accept(&entry("Military exercise concludes", "armed forces drill ends")));
        // Both
        assert!(filter.accept(&entry(
            "Acme Corp Acquires Defense Contractor",
            "Acme completed a merger with a military supplier."
        )));
        // Neither
        assert!(!filter.accept(&entry("Weather report for Tuesday", "Sunny with clouds.")));
    }

    #[test]
    fn test_terms_may_span_title_and_summary() {
        let filter = EntryFilter::new(FilterConfig::default());
        // Transaction term in the title, domain term only in the summary
        assert!(filter.accept(&entry(
            "Conglomerate takes stake in supplier",
            "The aerospace group confirmed the deal."
        )));
    }
}
