//! Retention dry-run over a synthetic timeline
//!
//! The simulator creates one backup per simulated day and, every
//! `interval` days, runs the exact same [`partition`] used for real files
//! against everything accumulated so far. Deleted backups are dropped from
//! the accumulated list, so later passes see the post-deletion state just as
//! a real backup directory would. Nothing touches the filesystem.

use crate::bucket::KeepReason;
use crate::retention::partition;
use crate::{Error, Result};
use chrono::{Days, NaiveDate};
use slotkeep_core::stamp::timestamp_from_name;
use slotkeep_core::{DateSource, Item, RetentionConfig};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

/// Prefix of synthetic backup names
pub const BACKUP_PREFIX: &str = "backup_";

/// Suffix of synthetic backup names
pub const BACKUP_SUFFIX: &str = ".tar.gz";

/// Name of the synthetic backup created on `date`
pub fn backup_name(date: NaiveDate) -> String {
    format!("{}{}{}", BACKUP_PREFIX, date.format("%Y-%m-%d"), BACKUP_SUFFIX)
}

/// Simulator phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    /// Creating backups, waiting for the next interval boundary
    Accumulating,
    /// At an interval boundary; the day's backup went through a retention pass
    Retaining,
    /// All days generated
    Finished,
}

/// One retention pass inside the simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPass {
    /// Keep reasons per surviving backup
    pub kept: BTreeMap<String, Vec<KeepReason>>,
    /// Backups deleted by this pass, sorted by name
    pub deleted: Vec<String>,
}

/// What happened on one simulated day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedDay {
    pub date: NaiveDate,
    /// `Retaining` on interval boundaries, `Accumulating` otherwise
    pub phase: SimState,
    /// Backup created that day
    pub created: String,
    /// Present on interval boundaries
    pub retention: Option<RetentionPass>,
}

/// Full simulation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub start: NaiveDate,
    pub interval_days: u32,
    pub days: Vec<SimulatedDay>,
    /// Backups left after the last day
    pub remaining: Vec<String>,
}

/// Drives the retention engine over synthetic days
#[derive(Debug, Clone)]
pub struct Simulator {
    config: RetentionConfig,
    start: NaiveDate,
    interval_days: u32,
    day: u32,
    backups: Vec<String>,
    state: SimState,
}

impl Simulator {
    /// Create a simulator starting at `start`
    ///
    /// Duration and interval come from `config.simulate`; retention counts
    /// from `config.keep`.
    pub fn new(config: &RetentionConfig, start: NaiveDate) -> Result<Self> {
        config.validate()?;
        let state = if config.simulate.days == 0 {
            SimState::Finished
        } else {
            SimState::Accumulating
        };

        Ok(Self {
            interval_days: config.simulate.interval.days(),
            config: config.clone(),
            start,
            day: 0,
            backups: Vec::new(),
            state,
        })
    }

    /// Phase of the most recently simulated day, or `Finished`
    pub fn state(&self) -> SimState {
        self.state
    }

    /// Days between retention passes
    pub fn interval_days(&self) -> u32 {
        self.interval_days
    }

    /// Backups currently present, oldest first
    pub fn backups(&self) -> &[String] {
        &self.backups
    }

    /// Simulate the next day, or return None once all days are done
    pub fn step(&mut self) -> Result<Option<SimulatedDay>> {
        if self.state == SimState::Finished {
            return Ok(None);
        }

        let date = self
            .start
            .checked_add_days(Days::new(u64::from(self.day)))
            .ok_or(Error::DateOutOfRange(self.day))?;
        let created = backup_name(date);
        self.backups.push(created.clone());

        let (phase, retention) = if (self.day + 1) % self.interval_days == 0 {
            (SimState::Retaining, Some(self.retain()?))
        } else {
            (SimState::Accumulating, None)
        };

        self.day += 1;
        self.state = if self.day >= self.config.simulate.days {
            SimState::Finished
        } else {
            phase
        };

        Ok(Some(SimulatedDay {
            date,
            phase,
            created,
            retention,
        }))
    }

    /// Run every remaining day, collecting the whole log in memory
    ///
    /// Callers printing as they go should loop over [`Simulator::step`].
    pub fn run(mut self) -> Result<SimulationReport> {
        let mut days = Vec::new();
        while let Some(day) = self.step()? {
            days.push(day);
        }

        Ok(SimulationReport {
            start: self.start,
            interval_days: self.interval_days,
            days,
            remaining: self.backups,
        })
    }

    fn retain(&mut self) -> Result<RetentionPass> {
        let pass = self.config.simulation_pass(BACKUP_PREFIX, BACKUP_SUFFIX);
        let items = self
            .backups
            .iter()
            .map(|name| dated_item(name, &pass.dates))
            .collect::<Result<Vec<_>>>()?;

        let plan = partition(&items, &pass.limits());
        let kept = if pass.verbose {
            plan.reasons()
        } else {
            BTreeMap::new()
        };

        let deleted: BTreeSet<String> = plan.delete;
        self.backups.retain(|name| !deleted.contains(name));
        debug!(
            "Simulated retention on day {}: {} kept, {} deleted",
            self.day + 1,
            self.backups.len(),
            deleted.len()
        );

        Ok(RetentionPass {
            kept,
            deleted: deleted.into_iter().collect(),
        })
    }
}

fn dated_item(name: &str, dates: &DateSource) -> Result<Item<String>> {
    let timestamp = match dates {
        DateSource::Filename { prefix, suffix } => {
            timestamp_from_name(Path::new(name), prefix, suffix)
        }
        DateSource::Modified => None,
    };

    timestamp
        .map(|ts| Item::new(name.to_string(), ts))
        .ok_or_else(|| Error::UndatedBackup(name.to_string()))
}
