//! Generation options.

use crate::models::cap_type::{CapType, SliceSize};
use crate::models::grid::GridMode;
use crate::models::motion::Turns;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prop the sequence is written for. Carried through generation untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    /// Staff
    #[default]
    Staff,
    /// Club
    Club,
    /// Fan
    Fan,
    /// Triad
    Triad,
    /// Minihoop
    Minihoop,
    /// Buugeng
    Buugeng,
    /// Bare hands
    Hand,
}

impl PropType {
    /// Every prop type.
    pub const ALL: [PropType; 7] = [
        PropType::Staff,
        PropType::Club,
        PropType::Fan,
        PropType::Triad,
        PropType::Minihoop,
        PropType::Buugeng,
        PropType::Hand,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PropType::Staff => "staff",
            PropType::Club => "club",
            PropType::Fan => "fan",
            PropType::Triad => "triad",
            PropType::Minihoop => "minihoop",
            PropType::Buugeng => "buugeng",
            PropType::Hand => "hand",
        }
    }
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PropType::ALL
            .into_iter()
            .find(|prop| prop.as_str() == wanted)
            .ok_or_else(|| format!("Unknown prop type '{s}'"))
    }
}

/// Generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Beat-by-beat random walk
    #[default]
    Freeform,
    /// Partial sequence completed by a CAP
    Circular,
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "freeform" => Ok(GenerationMode::Freeform),
            "circular" => Ok(GenerationMode::Circular),
            other => Err(format!(
                "Unknown generation mode '{other}'. Must be 'freeform' or 'circular'"
            )),
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::Freeform => f.write_str("freeform"),
            GenerationMode::Circular => f.write_str("circular"),
        }
    }
}

/// Whether each hand keeps one spin direction throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropContinuity {
    /// Each hand keeps a single rotation direction
    #[default]
    Continuous,
    /// Rotation direction chosen freely per beat
    Random,
}

impl FromStr for PropContinuity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => Ok(PropContinuity::Continuous),
            "random" => Ok(PropContinuity::Random),
            other => Err(format!(
                "Unknown prop continuity '{other}'. Must be 'continuous' or 'random'"
            )),
        }
    }
}

impl fmt::Display for PropContinuity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropContinuity::Continuous => f.write_str("continuous"),
            PropContinuity::Random => f.write_str("random"),
        }
    }
}

/// Options accepted by the sequence generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Total number of beats wanted
    pub length: usize,
    /// Grid mode to generate in
    pub grid_mode: GridMode,
    /// Prop the sequence is written for
    pub prop_type: PropType,
    /// Difficulty level: 1 no turns, 2 whole turns, 3 half turns
    pub level: u8,
    /// Freeform or circular
    pub mode: GenerationMode,
    /// Rotation-direction continuity
    pub prop_continuity: PropContinuity,
    /// Upper bound for allocated turns
    pub turn_intensity: Turns,
    /// Slice size for circular mode (defaults to halved)
    #[serde(default)]
    pub slice_size: Option<SliceSize>,
    /// CAP type for circular mode (defaults to strict rotated)
    #[serde(default)]
    pub cap_type: Option<CapType>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            grid_mode: GridMode::Diamond,
            prop_type: PropType::Staff,
            level: 1,
            mode: GenerationMode::Freeform,
            prop_continuity: PropContinuity::Continuous,
            turn_intensity: Turns::whole(1),
            slice_size: None,
            cap_type: None,
        }
    }
}

impl GenerationOptions {
    /// Options for circular generation with the given CAP type.
    #[must_use]
    pub fn circular(length: usize, cap_type: CapType) -> Self {
        Self {
            length,
            mode: GenerationMode::Circular,
            cap_type: Some(cap_type),
            ..Self::default()
        }
    }

    /// Options for freeform generation.
    #[must_use]
    pub fn freeform(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Sets the grid mode.
    #[must_use]
    pub const fn with_grid_mode(mut self, grid_mode: GridMode) -> Self {
        self.grid_mode = grid_mode;
        self
    }

    /// Sets the level and turn intensity.
    #[must_use]
    pub const fn with_difficulty(mut self, level: u8, turn_intensity: Turns) -> Self {
        self.level = level;
        self.turn_intensity = turn_intensity;
        self
    }

    /// Sets the slice size.
    #[must_use]
    pub const fn with_slice_size(mut self, slice_size: SliceSize) -> Self {
        self.slice_size = Some(slice_size);
        self
    }

    /// Sets the prop continuity.
    #[must_use]
    pub const fn with_continuity(mut self, continuity: PropContinuity) -> Self {
        self.prop_continuity = continuity;
        self
    }
}
