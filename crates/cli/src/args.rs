//! Command-line arguments

use clap::Parser;
use slotkeep_core::{DateSource, IntervalSpec, RetentionConfig};
use std::path::PathBuf;

/// slotkeep - Time-slot-based backup retention
///
/// Keeps the newest backup of each of the most recent days, ISO weeks,
/// months and years, and deletes the rest. Nothing is removed without
/// --force; the files that would be deleted are printed instead.
#[derive(Parser, Debug)]
#[command(name = "slotkeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directories or files (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Number of daily backups to keep (default: 7)
    #[arg(short = 'd', long, value_name = "N")]
    pub keep_daily: Option<usize>,

    /// Number of weekly backups to keep (default: 4)
    #[arg(short = 'w', long, value_name = "N")]
    pub keep_weekly: Option<usize>,

    /// Number of monthly backups to keep (default: 6)
    #[arg(short = 'm', long, value_name = "N")]
    pub keep_monthly: Option<usize>,

    /// Number of yearly backups to keep (default: 1)
    #[arg(short = 'y', long, value_name = "N")]
    pub keep_yearly: Option<usize>,

    /// Extract date from filename instead of file mtime
    #[arg(long)]
    pub date_from_filename: bool,

    /// Prefix to remove from filename before parsing date
    #[arg(long, value_name = "PREFIX")]
    pub filename_prefix: Option<String>,

    /// Suffix to remove from filename before parsing date
    #[arg(long, value_name = "SUFFIX")]
    pub filename_suffix: Option<String>,

    /// Actually delete the files
    #[arg(short, long)]
    pub force: bool,

    /// Print kept files and why
    #[arg(short, long)]
    pub verbose: bool,

    /// Simulate running retention for N days with the current settings
    #[arg(long, value_name = "DAYS")]
    pub simulate: Option<u32>,

    /// How often to run retention: 'daily', 'weekly', 'monthly', or number of days
    #[arg(long, value_name = "INTERVAL")]
    pub simulate_retention_interval: Option<IntervalSpec>,

    /// Configuration file (default: <config dir>/slotkeep/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Layer explicitly given flags over a loaded configuration
    pub fn apply(&self, mut config: RetentionConfig) -> RetentionConfig {
        if let Some(n) = self.keep_daily {
            config.keep.daily = n;
        }
        if let Some(n) = self.keep_weekly {
            config.keep.weekly = n;
        }
        if let Some(n) = self.keep_monthly {
            config.keep.monthly = n;
        }
        if let Some(n) = self.keep_yearly {
            config.keep.yearly = n;
        }
        if self.verbose {
            config.verbose = true;
        }

        let (mut prefix, mut suffix, from_name) = match &config.dates {
            DateSource::Filename { prefix, suffix } => (prefix.clone(), suffix.clone(), true),
            DateSource::Modified => (String::new(), String::new(), false),
        };
        if let Some(p) = &self.filename_prefix {
            prefix = p.clone();
        }
        if let Some(s) = &self.filename_suffix {
            suffix = s.clone();
        }
        if from_name || self.date_from_filename {
            config.dates = DateSource::Filename { prefix, suffix };
        }

        if let Some(days) = self.simulate {
            config.simulate.days = days;
        }
        if let Some(interval) = self.simulate_retention_interval {
            config.simulate.interval = interval;
        }

        config
    }
}
