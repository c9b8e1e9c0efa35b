//! Filename date extraction
//!
//! Backup names usually embed their creation date between a fixed prefix
//! and suffix (`db_2025-07-15.sql.gz`). Extraction strips the affixes and
//! tries a fixed list of formats; there is no free-form date guessing.

use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

/// Date-time formats tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d_%H-%M-%S",
    "%Y-%m-%dT%H-%M-%S",
    "%Y%m%d-%H%M%S",
    "%Y%m%dT%H%M%S",
    "%Y%m%d_%H%M%S",
];

/// Date-only formats tried after the date-time ones (midnight is assumed)
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d", "%Y_%m_%d", "%Y.%m.%d"];

/// Strip `prefix` and `suffix` from the file name of `path`
///
/// The suffix is matched against the full file name first. If it does not
/// match, the last extension is dropped and the suffix is tried again, so
/// `--suffix _full` works for both `x_full` and `x_full.tar`.
pub fn strip_affixes(path: &Path, prefix: &str, suffix: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut core = match name.strip_suffix(suffix) {
        Some(stripped) if !suffix.is_empty() => stripped.to_string(),
        _ => {
            let stem = path
                .file_stem()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match stem.strip_suffix(suffix) {
                Some(stripped) if !suffix.is_empty() => stripped.to_string(),
                _ => stem,
            }
        }
    };

    if !prefix.is_empty() {
        if let Some(stripped) = core.strip_prefix(prefix) {
            core = stripped.to_string();
        }
    }

    core
}

/// Parse a bare timestamp using the supported formats
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(ts);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    // Month-only names land on the first of the month
    NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Extract the timestamp embedded in the name of `path`
pub fn timestamp_from_name(path: &Path, prefix: &str, suffix: &str) -> Option<NaiveDateTime> {
    parse_timestamp(&strip_affixes(path, prefix, suffix))
}
