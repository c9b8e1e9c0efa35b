//! Retention configuration
//!
//! A single [`RetentionConfig`] value drives both real runs and simulated
//! ones. It is loaded from TOML, overridden by command-line flags, and then
//! passed by reference; nothing mutates it during a run. The simulator
//! derives its per-pass config with [`RetentionConfig::simulation_pass`].
//!
//! ```toml
//! verbose = false
//!
//! [keep]
//! daily = 7
//! weekly = 4
//! monthly = 6
//! yearly = 1
//!
//! [dates]
//! source = "filename"
//! prefix = "db_"
//! suffix = ".sql.gz"
//!
//! [simulate]
//! days = 0
//! interval = "weekly"   # or a number of days
//! ```

use crate::{Error, Granularity, Result, RetentionLimits};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-tier retention counts as configured (0 disables a tier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeepCounts {
    pub daily: usize,
    pub weekly: usize,
    pub monthly: usize,
    pub yearly: usize,
}

impl Default for KeepCounts {
    fn default() -> Self {
        Self {
            daily: 7,
            weekly: 4,
            monthly: 6,
            yearly: 1,
        }
    }
}

impl KeepCounts {
    /// Count configured for `granularity`
    pub fn get(&self, granularity: Granularity) -> usize {
        match granularity {
            Granularity::Daily => self.daily,
            Granularity::Weekly => self.weekly,
            Granularity::Monthly => self.monthly,
            Granularity::Yearly => self.yearly,
        }
    }
}

/// Where an item's timestamp comes from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum DateSource {
    /// File modification time
    #[default]
    Modified,
    /// Date embedded in the file name between `prefix` and `suffix`
    Filename {
        #[serde(default)]
        prefix: String,
        #[serde(default)]
        suffix: String,
    },
}

/// How often the simulator runs retention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub enum IntervalSpec {
    /// Every day
    #[default]
    Daily,
    /// Every 7 days
    Weekly,
    /// Every 30 days
    Monthly,
    /// Every `n` days (n > 0)
    Days(u32),
}

impl IntervalSpec {
    /// Length of the interval in days
    pub fn days(&self) -> u32 {
        match self {
            IntervalSpec::Daily => 1,
            IntervalSpec::Weekly => 7,
            IntervalSpec::Monthly => 30,
            IntervalSpec::Days(n) => *n,
        }
    }
}

impl FromStr for IntervalSpec {
    type Err = Error;

    /// Numbers are literal day counts; unrecognized names fall back to daily
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return match u32::try_from(n) {
                Ok(days) if days > 0 => Ok(IntervalSpec::Days(days)),
                _ => Err(Error::InvalidInterval(s.to_string())),
            };
        }

        Ok(match s.to_ascii_lowercase().as_str() {
            "weekly" => IntervalSpec::Weekly,
            "monthly" => IntervalSpec::Monthly,
            _ => IntervalSpec::Daily,
        })
    }
}

impl fmt::Display for IntervalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalSpec::Daily => f.write_str("daily"),
            IntervalSpec::Weekly => f.write_str("weekly"),
            IntervalSpec::Monthly => f.write_str("monthly"),
            IntervalSpec::Days(n) => write!(f, "{}", n),
        }
    }
}

/// On-disk form of [`IntervalSpec`]: a bare integer or a name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInterval {
    Days(i64),
    Name(String),
}

impl TryFrom<RawInterval> for IntervalSpec {
    type Error = Error;

    fn try_from(raw: RawInterval) -> Result<Self> {
        match raw {
            RawInterval::Days(n) => n.to_string().parse(),
            RawInterval::Name(name) => name.parse(),
        }
    }
}

impl From<IntervalSpec> for RawInterval {
    fn from(spec: IntervalSpec) -> Self {
        match spec {
            IntervalSpec::Days(n) => RawInterval::Days(i64::from(n)),
            named => RawInterval::Name(named.to_string()),
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulateConfig {
    /// Number of days to simulate (0 = run for real)
    pub days: u32,
    /// Retention cadence
    pub interval: IntervalSpec,
}

/// Complete retention configuration shared by real and simulated runs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Print keep reasons before deletions
    pub verbose: bool,
    /// Retention counts per tier
    pub keep: KeepCounts,
    /// Timestamp source for real files
    pub dates: DateSource,
    /// Simulation settings
    pub simulate: SimulateConfig,
}

impl RetentionConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: RetentionConfig =
            toml::from_str(text).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Check invariants that the types alone cannot express
    pub fn validate(&self) -> Result<()> {
        if self.simulate.interval.days() == 0 {
            return Err(Error::InvalidInterval(self.simulate.interval.to_string()));
        }
        Ok(())
    }

    /// Enforced limits (tiers with a zero count are dropped)
    pub fn limits(&self) -> RetentionLimits {
        Granularity::ALL
            .into_iter()
            .fold(RetentionLimits::none(), |limits, g| {
                limits.with(g, self.keep.get(g))
            })
    }

    /// True when the simulator should run instead of real partitioning
    pub fn is_simulation(&self) -> bool {
        self.simulate.days > 0
    }

    /// Config for one simulated retention pass
    ///
    /// Keeps the caller's retention counts; dates come from the synthetic
    /// file names and keep reasons are always reported.
    pub fn simulation_pass(&self, prefix: &str, suffix: &str) -> Self {
        Self {
            verbose: true,
            dates: DateSource::Filename {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            },
            ..self.clone()
        }
    }
}
