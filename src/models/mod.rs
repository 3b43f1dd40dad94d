//! Data models for beats, motions, sequences and CAP types.
//!
//! This module contains all the core data structures used throughout the crate.
//! Models are independent of generation logic and of the CLI.

pub mod beat;
pub mod cap_type;
pub mod grid;
pub mod motion;
pub mod options;
pub mod sequence;

// Re-export all model types
pub use beat::Beat;
pub use cap_type::{CapComponent, CapType, ComponentSet, SliceSize};
pub use grid::{GridMode, GridPosition, Location, PositionGroup};
pub use motion::{HandColor, MotionData, MotionType, Orientation, RotationDirection, Turns};
pub use options::{GenerationMode, GenerationOptions, PropContinuity, PropType};
pub use sequence::Sequence;
