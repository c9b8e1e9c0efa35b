//! Backup discovery for slotkeep
//!
//! This crate supplies the retention engine with dated items:
//! - Input grouping (directories vs. individual files)
//! - Timestamps from modification time or from the file name

pub mod dates;
pub mod inputs;

pub use dates::{date_items, DatedFiles};
pub use inputs::{collect_inputs, Group};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering backups
#[derive(Debug, Error)]
pub enum Error {
    /// Some paths are directories and some are files
    #[error("cannot mix files and directories")]
    MixedInputs,

    /// A path given on the command line does not exist
    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    /// No timestamp could be derived for a file
    #[error("could not determine a date for {}", .0.display())]
    NoDate(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

/// Result type for scanner operations
pub type Result<T> = std::result::Result<T, Error>;
