//! Backup directory fixtures

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory populated with dated backup files
pub struct BackupDir {
    temp_dir: TempDir,
}

impl BackupDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create `<prefix>YYYY-MM-DD<suffix>` for each of `days` consecutive days
    pub fn named_series(
        &self,
        prefix: &str,
        suffix: &str,
        first: NaiveDate,
        days: u32,
    ) -> Result<Vec<PathBuf>> {
        (0..days)
            .map(|i| {
                let date = first + Duration::days(i64::from(i));
                let path = self
                    .path()
                    .join(format!("{}{}{}", prefix, date.format("%Y-%m-%d"), suffix));
                fs::write(&path, date.to_string())?;
                Ok(path)
            })
            .collect()
    }

    /// Create a file whose modification time is noon local time on `date`
    pub fn file_modified_on(&self, name: &str, date: NaiveDate) -> Result<PathBuf> {
        let path = self.path().join(name);
        fs::write(&path, name)?;
        let noon = date
            .and_hms_opt(12, 0, 0)
            .and_then(|dt| dt.and_local_timezone(Local).single())
            .ok_or_else(|| anyhow::anyhow!("ambiguous local time for {}", date))?;
        filetime::set_file_mtime(&path, FileTime::from_unix_time(noon.timestamp(), 0))?;
        Ok(path)
    }

    /// Names of the regular files currently present, sorted
    pub fn file_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.path())? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
