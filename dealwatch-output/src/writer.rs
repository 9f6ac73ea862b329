//! Date-stamped result writers
//!
//! Emits the accepted-entry list as `results_<DDMonYYYY>.{csv,md,html}`
//! inside a `Date_<DDMonYYYY>/` directory under the configured root.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::info;

use dealwatch_core::{FeedEntry, OutputConfig};

use crate::error::OutputError;

/// Paths of the files produced by a single run
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub directory: PathBuf,
    pub csv: PathBuf,
    pub markdown: PathBuf,
    pub html: PathBuf,
}

/// Writer for the three output formats
pub struct OutputWriter {
    root_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            root_dir: config.root_dir.clone(),
        }
    }

    /// Write all three formats for today's date
    pub fn write_all(&self, entries: &[FeedEntry]) -> Result<OutputPaths, OutputError> {
        self.write_for_date(entries, Local::now().date_naive())
    }

    /// Write all three formats for an explicit date
    pub fn write_for_date(
        &self,
        entries: &[FeedEntry],
        date: NaiveDate,
    ) -> Result<OutputPaths, OutputError> {
        let stamp = date.format("%d%b%Y").to_string();
        let directory = self.root_dir.join(format!("Date_{}", stamp));
        fs::create_dir_all(&directory).map_err(|e| OutputError::Io {
            path: directory.clone(),
            source: e,
        })?;

        let base = format!("results_{}", stamp);
        let paths = OutputPaths {
            csv: directory.join(format!("{}.csv", base)),
            markdown: directory.join(format!("{}.md", base)),
            html: directory.join(format!("{}.html", base)),
            directory,
        };

        write_file(&paths.csv, render_csv(entries))?;
        write_file(&paths.markdown, render_markdown(entries))?;
        write_file(&paths.html, render_html(entries))?;

        info!(
            "Wrote {} entries to {} (csv, md, html)",
            entries.len(),
            paths.directory.display()
        );
        Ok(paths)
    }
}

fn write_file(path: &Path, contents: String) -> Result<(), OutputError> {
    fs::write(path, contents).map_err(|e| OutputError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// CSV with a header row and RFC 4180 quoting
fn render_csv(entries: &[FeedEntry]) -> String {
    let mut out = String::from("title,link,summary,published\n");
    for entry in entries {
        out.push_str(&format!(
            "{},{},{},{}\n",
            csv_field(&entry.title),
            csv_field(&entry.link),
            csv_field(&entry.summary),
            csv_field(&entry.published),
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Markdown link list, one entry per line
fn render_markdown(entries: &[FeedEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("- [{}]({})\n", entry.title, entry.link));
    }
    out
}

/// Minimal HTML page: linked title plus summary per entry
fn render_html(entries: &[FeedEntry]) -> String {
    let mut out = String::from("<html><body>\n");
    for entry in entries {
        out.push_str(&format!(
            "<p><a href='{}'>{}</a><br>{}</p>\n",
            html_escape(&entry.link),
            html_escape(&entry.title),
            html_escape(&entry.summary),
        ));
    }
    out.push_str("</body></html>\n");
    out
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
