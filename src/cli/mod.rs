//! CLI command handlers for flowseq.
//!
//! This module provides headless, scriptable access to sequence generation,
//! CAP completion and configuration for automation and testing.

pub mod cap_types;
pub mod common;
pub mod complete;
pub mod config;
pub mod generate;

// Re-export types used by main.rs and tests
pub use cap_types::CapTypesArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use complete::CompleteArgs;
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
