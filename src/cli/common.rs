//! Shared CLI plumbing: errors, exit codes and file I/O helpers.

use crate::cap::CapError;
use crate::generator::GenerationError;
use crate::models::Beat;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input, or generation failed
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to the OS.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid arguments or input data
    #[error("{0}")]
    Validation(String),
    /// I/O failure
    #[error("{0}")]
    Io(String),
}

impl CliError {
    /// Validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// I/O failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::ValidationError,
            Self::Io(_) => ExitCode::IoError,
        }
    }
}

impl From<GenerationError> for CliError {
    fn from(error: GenerationError) -> Self {
        Self::validation(format!("Generation failed: {error}"))
    }
}

impl From<CapError> for CliError {
    fn from(error: CapError) -> Self {
        Self::validation(format!("CAP failed: {error}"))
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a `FromStr` argument, turning the parse error into a validation
/// error.
pub fn parse_arg<T>(value: &str) -> CliResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    value.parse().map_err(CliError::validation)
}

/// Serializes `value` as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}

/// Writes `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::io(format!(
                "Failed to create directory {}: {e}",
                parent.display()
            ))
        })?;
    }
    std::fs::write(path, content)
        .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))
}

/// Reads a JSON array of beats, start-position beat first.
pub fn read_beats(path: &Path) -> CliResult<Vec<Beat>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&content).map_err(|e| {
        CliError::validation(format!(
            "Invalid beat list in {}: {e}",
            path.display()
        ))
    })
}
