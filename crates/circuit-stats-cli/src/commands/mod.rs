//! CLI command implementations for circuit-stats.
//!
//! Each module corresponds to a subcommand (`circuit-stats <command>`).

pub mod event;
pub mod list;
pub mod name;
pub mod signature;
