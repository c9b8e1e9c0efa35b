//! Input grouping
//!
//! Retention runs once per group. Every directory argument is its own group
//! holding the regular files directly inside it; a list of file arguments
//! forms a single group. Directories and files cannot be mixed.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Files that are partitioned together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Directory the files were listed from (None for explicit file lists)
    pub dir: Option<PathBuf>,
    /// Regular files, sorted by path
    pub files: Vec<PathBuf>,
}

/// Resolve command-line paths into retention groups
///
/// An empty path list means the current directory.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<Group>> {
    let paths: Vec<PathBuf> = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };

    if let Some(missing) = paths.iter().find(|p| !p.exists()) {
        return Err(Error::NotFound(missing.clone()));
    }

    if paths.iter().all(|p| p.is_dir()) {
        paths
            .into_iter()
            .map(|dir| {
                let files = list_files(&dir)?;
                debug!("Found {} files in {}", files.len(), dir.display());
                Ok(Group {
                    dir: Some(dir),
                    files,
                })
            })
            .collect()
    } else if paths.iter().all(|p| p.is_file()) {
        let mut files = paths;
        files.sort();
        files.dedup();
        Ok(vec![Group { dir: None, files }])
    } else {
        Err(Error::MixedInputs)
    }
}

/// Regular files directly inside `dir` (symlinks to files included)
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
