//! Error types shared across slotkeep crates

use thiserror::Error;

/// Errors raised while building limits or configuration
#[derive(Debug, Error)]
pub enum Error {
    /// Interval spec is a literal number of days that can never fire
    #[error("invalid retention interval '{0}': must be a positive number of days or daily/weekly/monthly")]
    InvalidInterval(String),

    /// Granularity name not one of daily/weekly/monthly/yearly
    #[error("unknown granularity '{0}'")]
    UnknownGranularity(String),

    /// Configuration file could not be parsed or failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
