//! Common utilities for integration tests

pub mod cli;
pub mod fixtures;

// Re-export commonly used items
pub use fixtures::BackupDir;
