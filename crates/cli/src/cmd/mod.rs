//! CLI command implementations

pub mod prune;
pub mod simulate;
