//! Errors raised while generating sequences.

use crate::cap::CapError;
use thiserror::Error;

/// Generation failure. CAP errors pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The options cannot produce a sequence.
    #[error("Invalid generation options: {0}")]
    InvalidOptions(String),

    /// The candidate pipeline produced nothing for a beat.
    #[error("No candidate beats available for beat {beat_number}")]
    NoCandidates {
        /// Beat that could not be filled
        beat_number: usize,
    },

    /// CAP selection or execution failed.
    #[error(transparent)]
    Cap(#[from] CapError),
}

/// Result alias for generation.
pub type GenerationResult<T> = Result<T, GenerationError>;
