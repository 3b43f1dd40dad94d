//! Errors raised by the CAP engine.

use crate::models::{CapType, GridPosition, HandColor, Location};
use thiserror::Error;

/// A CAP either completes validly or fails with one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapError {
    /// Fewer than two beats (start position plus at least one beat).
    #[error("Sequence too short for CAP: expected at least 2 beats, got {len}")]
    InputTooShort {
        /// Observed length, start position included
        len: usize,
    },

    /// The partial sequence does not start and end where the CAP needs.
    #[error(
        "Invalid position pair for {cap_type}: sequence runs {start} -> {end}, expected it to end at {expected}"
    )]
    InvalidPositionPair {
        /// CAP being executed
        cap_type: CapType,
        /// Observed start position
        start: GridPosition,
        /// Observed end position
        end: GridPosition,
        /// End position the CAP requires for this start
        expected: GridPosition,
    },

    /// A source beat lacks motion data for one hand.
    #[error("Beat {beat_number} is missing {hand} motion data")]
    MissingMotionData {
        /// Beat number of the malformed beat
        beat_number: usize,
        /// Hand without motion
        hand: HandColor,
    },

    /// No executor is wired for the requested CAP type.
    #[error("Unsupported CAP type '{requested}'. Supported types: {}", supported.join(", "))]
    UnsupportedCapType {
        /// Requested name
        requested: String,
        /// Canonical names of the wired types
        supported: Vec<String>,
    },

    /// A hand location pair has no grid position (grid modes mixed).
    #[error("No grid position for blue at {blue} and red at {red}")]
    UnmappedLocations {
        /// Blue hand location
        blue: Location,
        /// Red hand location
        red: Location,
    },
}

/// Result alias for CAP operations.
pub type CapResult<T> = Result<T, CapError>;
