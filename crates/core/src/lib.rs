//! Data model for slotkeep
//!
//! This crate provides:
//! - Dated items (identifier + timestamp)
//! - Retention granularities and their calendar bucket keys
//! - Retention limits (per-granularity capacities)
//! - Shared retention/simulation configuration
//! - Filename date extraction

pub mod config;
pub mod error;
pub mod granularity;
pub mod item;
pub mod limits;
pub mod stamp;

// Re-exports
pub use config::{DateSource, IntervalSpec, KeepCounts, RetentionConfig, SimulateConfig};
pub use error::Error;
pub use granularity::Granularity;
pub use item::Item;
pub use limits::RetentionLimits;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
