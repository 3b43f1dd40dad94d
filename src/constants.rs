//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Flowseq";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "flowseq";

/// Directory name under the platform config directory.
pub const APP_DATA_DIR_NAME: &str = "Flowseq";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "FLOWSEQ_CONFIG_DIR";
