//! Backup retention engine
//!
//! This crate provides:
//! - Calendar bucketing of dated items per granularity
//! - Keep/delete partitioning and keep reasons
//! - Pruning through a pluggable deletion sink
//! - A simulator that replays retention over synthetic days

pub mod bucket;
pub mod retention;
pub mod simulate;

// Re-exports
pub use bucket::{compute_bucket_map, derive_keep_set, explain_keep_set, BucketMap, KeepReason};
pub use retention::{partition, DeletionSink, Partition, PruneOutcome, PruneReport, Pruner};
pub use simulate::{RetentionPass, SimState, SimulatedDay, SimulationReport, Simulator};

use thiserror::Error;

/// Errors raised by the simulator
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] slotkeep_core::Error),

    /// A synthetic backup name did not yield a date
    #[error("simulated backup '{0}' has no date in its name")]
    UndatedBackup(String),

    /// The simulated calendar ran past chrono's supported range
    #[error("simulated date out of range after {0} days")]
    DateOutOfRange(u32),
}

/// Result type for retention operations
pub type Result<T> = std::result::Result<T, Error>;
