//! Text normalization for duplicate comparison
//!
//! Both variants NFKD-decompose the input and then drop every non-ASCII
//! code point, which strips combining accent marks along with any
//! non-Latin script. That loss is a documented limitation carried over
//! from the original tool, not something to repair here.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string into its comparison form: accent-stripped,
/// trimmed, lowercased, whitespace collapsed to single spaces.
///
/// Idempotent; empty input yields empty output.
pub fn normalize(text: &str) -> String {
    ascii_fold(text).to_lowercase()
}

/// Normalize a string for human-facing output: same folding as
/// [`normalize`] but case is preserved.
///
/// Never use this variant for comparison keys; duplicate detection
/// depends on the lowercasing [`normalize`] applies.
pub fn display_normalize(text: &str) -> String {
    ascii_fold(text)
}

/// Decompose, drop non-ASCII, trim, and collapse whitespace runs.
fn ascii_fold(text: &str) -> String {
    let stripped: String = text.nfkd().filter(char::is_ascii).collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
