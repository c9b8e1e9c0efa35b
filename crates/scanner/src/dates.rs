//! Timestamps for discovered files

use crate::{Error, Result};
use chrono::{DateTime, Local, NaiveDateTime};
use slotkeep_core::stamp::timestamp_from_name;
use slotkeep_core::{DateSource, Item};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Files split into dated items and the ones that could not be dated
#[derive(Debug, Default)]
pub struct DatedFiles {
    pub items: Vec<Item<PathBuf>>,
    pub undated: Vec<Error>,
}

/// Timestamp of `path` according to `source`
pub fn file_timestamp(path: &Path, source: &DateSource) -> Result<NaiveDateTime> {
    match source {
        DateSource::Modified => {
            let modified = fs::metadata(path)
                .and_then(|meta| meta.modified())
                .map_err(|source| Error::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(DateTime::<Local>::from(modified).naive_local())
        }
        DateSource::Filename { prefix, suffix } => timestamp_from_name(path, prefix, suffix)
            .ok_or_else(|| Error::NoDate(path.to_path_buf())),
    }
}

/// Date every file, setting aside the ones without a usable timestamp
///
/// Undated files are neither kept nor deleted by the caller.
pub fn date_items(files: &[PathBuf], source: &DateSource) -> DatedFiles {
    let mut dated = DatedFiles::default();
    for path in files {
        match file_timestamp(path, source) {
            Ok(ts) => dated.items.push(Item::new(path.clone(), ts)),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                dated.undated.push(e);
            }
        }
    }
    dated
}
