//! Configuration file loading
//!
//! The config file is optional. When `--config` is not given the user
//! config directory is consulted (`~/.config/slotkeep/config.toml` on
//! Linux) and a missing file means built-in defaults.

use anyhow::{Context, Result};
use slotkeep_core::RetentionConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the config file
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("slotkeep").join("config.toml"))
}

/// Load configuration from `explicit`, or from the default location
///
/// An explicitly named file must exist; the default one may be absent.
pub fn load(explicit: Option<&Path>) -> Result<RetentionConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_file_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(RetentionConfig::default()),
        },
    };

    load_from(&path)
}

/// Load and validate a specific config file
pub fn load_from(path: &Path) -> Result<RetentionConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = RetentionConfig::from_toml_str(&text)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
