//! Dated items fed to the retention engine

use chrono::NaiveDateTime;

/// An identifier paired with the point in time it represents
///
/// The identifier is opaque to the engine: a `PathBuf` for real backups, a
/// `String` for simulated ones. Identifiers must be unique within a single
/// partition call; timestamps may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<I> {
    /// Opaque identifier (file path, name, ...)
    pub id: I,
    /// Local wall-clock time of the backup
    pub timestamp: NaiveDateTime,
}

impl<I> Item<I> {
    /// Create a new item
    pub fn new(id: I, timestamp: NaiveDateTime) -> Self {
        Self { id, timestamp }
    }
}
