//! Durable dual-key deduplication store
//!
//! Holds two bounded FIFO histories, normalized titles and normalized
//! links, loaded from a JSON record at startup and written back once at
//! the end of a run. New entries are rejected when their title fuzzily
//! matches any retained title or their link exactly matches any retained
//! link; accepted entries are appended immediately, so later entries in
//! the same batch are checked against earlier ones.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use dealwatch_core::{DedupConfig, FeedEntry};

use crate::error::DedupError;
use crate::normalize::normalize;
use crate::similarity::TitleSimilarity;

/// Persisted snapshot of both history sequences
///
/// This file is the sole durable state of the system and the only
/// cross-run communication channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DedupRecord {
    /// Normalized titles, oldest first
    #[serde(default)]
    pub titles: Vec<String>,
    /// Normalized links, oldest first
    #[serde(default)]
    pub links: Vec<String>,
}

/// Bounded-history duplicate detector
///
/// Single-writer by construction: the store is owned by the pipeline and
/// all `check_and_record` calls happen in entry order, which keeps
/// acceptance deterministic.
pub struct DedupStore {
    titles: VecDeque<String>,
    links: VecDeque<String>,
    capacity: usize,
    similarity: TitleSimilarity,
    state_path: PathBuf,
}

impl DedupStore {
    /// Load the store from the configured record path
    ///
    /// An absent record is not an error: the run starts with empty
    /// histories. A record that exists but does not parse is fatal and
    /// surfaced as [`DedupError::Corrupt`].
    pub fn load(config: &DedupConfig) -> Result<Self, DedupError> {
        let record = match fs::read_to_string(&config.state_path) {
            Ok(raw) => serde_json::from_str::<DedupRecord>(&raw).map_err(|e| {
                DedupError::Corrupt {
                    path: config.state_path.clone(),
                    source: e,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "No dedup record at {}, starting with empty history",
                    config.state_path.display()
                );
                DedupRecord::default()
            }
            Err(e) => {
                return Err(DedupError::Io {
                    path: config.state_path.clone(),
                    source: e,
                })
            }
        };

        info!(
            "Loaded dedup history: {} titles, {} links (capacity {})",
            record.titles.len(),
            record.links.len(),
            config.capacity
        );

        Ok(Self {
            titles: bounded_from(record.titles, config.capacity),
            links: bounded_from(record.links, config.capacity),
            capacity: config.capacity,
            similarity: TitleSimilarity::new(config.fuzzy_threshold),
            state_path: config.state_path.clone(),
        })
    }

    /// Check an entry against both histories and record it if new
    ///
    /// Returns true when the entry was accepted. Rejected entries leave
    /// the histories untouched.
    pub fn check_and_record(&mut self, entry: &FeedEntry) -> bool {
        let title = normalize(&entry.title);
        let link = normalize(&entry.link);

        // Linear scan, first match wins
        let duplicate_title = self
            .titles
            .iter()
            .any(|seen| self.similarity.is_match(&title, seen));
        let duplicate_link = self.links.iter().any(|seen| *seen == link);

        if duplicate_title || duplicate_link {
            debug!(
                "Rejected duplicate (title match: {}, link match: {}): {}",
                duplicate_title, duplicate_link, entry.title
            );
            return false;
        }

        push_evicting(&mut self.titles, title, self.capacity);
        push_evicting(&mut self.links, link, self.capacity);
        true
    }

    /// Write the current histories back to disk, replacing any prior record
    ///
    /// The record is written to a temp file in the same directory and
    /// renamed into place so a crash mid-write cannot corrupt it.
    pub fn persist(&self) -> Result<(), DedupError> {
        if let Some(parent) = self.state_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }

        let record = self.record();
        let body = serde_json::to_string_pretty(&record).map_err(|e| DedupError::Corrupt {
            path: self.state_path.clone(),
            source: e,
        })?;

        let tmp_path = self.state_path.with_extension("json.tmp");
        fs::write(&tmp_path, body).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp_path, &self.state_path).map_err(|e| self.io_err(e))?;

        info!(
            "Persisted dedup record to {} ({} titles, {} links)",
            self.state_path.display(),
            record.titles.len(),
            record.links.len()
        );
        Ok(())
    }

    /// Snapshot of the current histories, oldest first
    pub fn record(&self) -> DedupRecord {
        DedupRecord {
            titles: self.titles.iter().cloned().collect(),
            links: self.links.iter().cloned().collect(),
        }
    }

    /// Number of retained title entries
    pub fn title_count(&self) -> usize {
        self.titles.len()
    }

    /// Number of retained link entries
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    fn io_err(&self, source: std::io::Error) -> DedupError {
        DedupError::Io {
            path: self.state_path.clone(),
            source,
        }
    }
}

/// Build a bounded deque from a persisted sequence, keeping the newest
/// elements when the sequence exceeds the capacity (e.g. the bound was
/// lowered between runs).
fn bounded_from(mut values: Vec<String>, capacity: usize) -> VecDeque<String> {
    if values.len() > capacity {
        values.drain(..values.len() - capacity);
    }
    VecDeque::from(values)
}

/// Append to a bounded deque, evicting the oldest element when full
fn push_evicting(history: &mut VecDeque<String>, value: String, capacity: usize) {
    if capacity == 0 {
        return;
    }
    if history.len() == capacity {
        history.pop_front();
    }
    history.push_back(value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(title: &str, link: &str) -> FeedEntry {
        FeedEntry {
            id: link.to_string(),
            title: title.to_string(),
            link: link.to_string(),
            summary: String::new(),
            published: String::new(),
        }
    }

    fn config(dir: &std::path::Path) -> DedupConfig {
        DedupConfig {
            state_path: dir.join("deduplication.json"),
            ..DedupConfig::default()
        }
    }

    #[test]
    fn test_absent_record_starts_empty() {
        let tmp = tempdir().unwrap();
        let store = DedupStore::load(&config(tmp.path())).unwrap();
        assert_eq!(store.title_count(), 0);
        assert_eq!(store.link_count(), 0);
    }

    #[test]
    fn test_corrupt_record_is_fatal() {
        let tmp = tempdir().unwrap();
        let config = config(tmp.path());
        fs::write(&config.state_path, "{ not json").unwrap();

        match DedupStore::load(&config) {
            Err(DedupError::Corrupt { .. }) => {}
            other => panic!("expected Corrupt error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_accepts_distinct_entries() {
        let tmp = tempdir().unwrap();
        let mut store = DedupStore::load(&config(tmp.path())).unwrap();

        assert!(store.check_and_record(&entry(
            "Acme Corp Acquires Defense Contractor",
            "https://a.example/1"
        )));
        assert!(store.check_and_record(&entry(
            "Borealis Absorbs Aerospace Security Firm",
            "https://a.example/2"
        )));
        assert_eq!(store.title_count(), 2);
        assert_eq!(store.link_count(), 2);
    }

    #[test]
    fn test_exact_link_rejected_regardless_of_title() {
        let tmp = tempdir().unwrap();
        let mut store = DedupStore::load(&config(tmp.path())).unwrap();

        assert!(store.check_and_record(&entry("First headline", "https://a.example/1")));
        assert!(!store.check_and_record(&entry(
            "Completely different headline about other things",
            "https://a.example/1"
        )));
        assert_eq!(store.title_count(), 1);
    }

    #[test]
    fn test_near_duplicate_title_rejected_despite_new_link() {
        let tmp = tempdir().unwrap();
        let mut store = DedupStore::load(&config(tmp.path())).unwrap();

        assert!(store.check_and_record(&entry(
            "Acme Corp Acquires Defense Contractor",
            "https://a.example/1"
        )));
        // Trailing whitespace, case, and accents all normalize away
        assert!(!store.check_and_record(&entry(
            "  ACME Corp Acquirés Defense Contractor ",
            "https://a.example/1-dup"
        )));
        assert_eq!(store.title_count(), 1);
        assert_eq!(store.link_count(), 1);
    }

    #[test]
    fn test_in_batch_dedup() {
        let tmp = tempdir().unwrap();
        let mut store = DedupStore::load(&config(tmp.path())).unwrap();

        let first = entry("Raytheon merges with military supplier", "https://a.example/1");
        let second = entry("Raytheon merges with military supplier!", "https://a.example/2");

        assert!(store.check_and_record(&first));
        assert!(!store.check_and_record(&second));
    }

    #[test]
    fn test_bound_invariant_with_eviction() {
        let tmp = tempdir().unwrap();
        let config = DedupConfig {
            capacity: 3,
            ..config(tmp.path())
        };
        let mut store = DedupStore::load(&config).unwrap();

        for i in 0..10 {
            // Long distinct titles so the fuzzy scan never collapses them
            let title = format!("Headline number {} about a wholly unrelated {} deal", i, i * 17);
            assert!(store.check_and_record(&entry(&title, &format!("https://a.example/{}", i))));
            assert!(store.title_count() <= 3);
            assert!(store.link_count() <= 3);
        }

        // Oldest entries were evicted, so the first link is acceptable again
        let record = store.record();
        assert_eq!(record.links.len(), 3);
        assert!(!record.links.contains(&"https://a.example/0".to_string()));
    }

    #[test]
    fn test_persist_and_reload_round_trip() {
        let tmp = tempdir().unwrap();
        let config = config(tmp.path());

        let mut store = DedupStore::load(&config).unwrap();
        assert!(store.check_and_record(&entry(
            "Acme Corp Acquires Defense Contractor",
            "https://a.example/1"
        )));
        store.persist().unwrap();

        let mut reloaded = DedupStore::load(&config).unwrap();
        assert_eq!(reloaded.title_count(), 1);
        // Same entry rejected across runs
        assert!(!reloaded.check_and_record(&entry(
            "Acme Corp Acquires Defense Contractor",
            "https://a.example/other"
        )));
    }

    #[test]
    fn test_oversize_record_truncated_to_newest() {
        let tmp = tempdir().unwrap();
        let config = DedupConfig {
            capacity: 2,
            ..config(tmp.path())
        };
        let record = DedupRecord {
            titles: vec!["old".into(), "mid".into(), "new".into()],
            links: vec!["l-old".into(), "l-mid".into(), "l-new".into()],
        };
        fs::write(&config.state_path, serde_json::to_string(&record).unwrap()).unwrap();

        let store = DedupStore::load(&config).unwrap();
        let loaded = store.record();
        assert_eq!(loaded.titles, vec!["mid".to_string(), "new".to_string()]);
        assert_eq!(loaded.links, vec!["l-mid".to_string(), "l-new".to_string()]);
    }

    #[test]
    fn test_determinism_across_identical_runs() {
        let batch: Vec<FeedEntry> = vec![
            entry("Acme Corp Acquires Defense Contractor", "https://a.example/1"),
            entry("Acme Corp Acquires Defense Contractor ", "https://a.example/2"),
            entry("Borealis announces aerospace joint venture", "https://a.example/3"),
        ];

        let run = || {
            let tmp = tempdir().unwrap();
            let mut store = DedupStore::load(&config(tmp.path())).unwrap();
            let results: Vec<bool> = batch.iter().map(|e| store.check_and_record(e)).collect();
            (results, store.record().titles)
        };

        let (results_a, titles_a) = run();
        let (results_b, titles_b) = run();
        assert_eq!(results_a, vec![true, false, true]);
        assert_eq!(results_a, results_b);
        assert_eq!(titles_a, titles_b);
    }
}
