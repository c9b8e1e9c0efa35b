//! Filesystem deletion sink

use retention::DeletionSink;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Removes backup files from disk
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDeletionSink;

impl DeletionSink<PathBuf> for FsDeletionSink {
    type Error = io::Error;

    fn delete(&mut self, path: &PathBuf) -> io::Result<()> {
        fs::remove_file(path)
    }
}
