//! slotkeep command-line interface
//!
//! Exposed as a library so integration tests can drive the commands
//! without spawning the binary.

pub mod args;
pub mod cmd;
pub mod sink;
pub mod system_config;
pub mod util;
