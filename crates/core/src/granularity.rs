//! Retention granularities and calendar bucket keys
//!
//! Every granularity maps a timestamp to a bucket key: a string that is
//! identical for all timestamps in the same calendar slot.
//!
//! | granularity | key format | example      |
//! |-------------|------------|--------------|
//! | daily       | YYYY-MM-DD | `2025-07-15` |
//! | weekly      | GGGG-Www   | `2025-W29`   |
//! | monthly     | YYYY-MM    | `2025-07`    |
//! | yearly      | YYYY       | `2025`       |
//!
//! Weekly keys follow ISO 8601 week dates: weeks start on Monday and week 1
//! is the week containing the year's first Thursday. `GGGG` is the ISO
//! week-year, which differs from the calendar year for a few days around
//! January 1st (2024-12-30 is `2025-W01`, 2021-01-01 is `2020-W53`).

use crate::Error;
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A retention tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per calendar day
    Daily,
    /// One bucket per ISO week
    Weekly,
    /// One bucket per calendar month
    Monthly,
    /// One bucket per calendar year
    Yearly,
}

impl Granularity {
    /// All granularities, finest first
    pub const ALL: [Granularity; 4] = [
        Granularity::Daily,
        Granularity::Weekly,
        Granularity::Monthly,
        Granularity::Yearly,
    ];

    /// Lowercase name used in config files and keep reasons
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Yearly => "yearly",
        }
    }

    /// Compute the bucket key of `ts` under this granularity
    pub fn bucket_key(&self, ts: &NaiveDateTime) -> String {
        let date = ts.date();
        match self {
            Granularity::Daily => {
                format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
            }
            Granularity::Weekly => {
                let week = date.iso_week();
                format!("{:04}-W{:02}", week.year(), week.week())
            }
            Granularity::Monthly => format!("{:04}-{:02}", date.year(), date.month()),
            Granularity::Yearly => format!("{:04}", date.year()),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Granularity::Daily),
            "weekly" => Ok(Granularity::Weekly),
            "monthly" => Ok(Granularity::Monthly),
            "yearly" => Ok(Granularity::Yearly),
            _ => Err(Error::UnknownGranularity(s.to_string())),
        }
    }
}
