//! Per-hand motion data.

use crate::models::grid::Location;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which hand a motion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandColor {
    /// Blue (left) hand
    Blue,
    /// Red (right) hand
    Red,
}

impl HandColor {
    /// Both hands in notation order.
    pub const BOTH: [HandColor; 2] = [HandColor::Blue, HandColor::Red];

    /// The other hand.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            HandColor::Blue => HandColor::Red,
            HandColor::Red => HandColor::Blue,
        }
    }
}

impl fmt::Display for HandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandColor::Blue => f.write_str("blue"),
            HandColor::Red => f.write_str("red"),
        }
    }
}

/// Kind of movement a hand performs during a beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    /// Prospin shift to an adjacent point
    Pro,
    /// Antispin shift to an adjacent point
    Anti,
    /// Hand stays in place
    Static,
    /// Hand crosses to the opposite point
    Dash,
}

impl MotionType {
    /// Pro and anti are the two shift motions.
    #[must_use]
    pub const fn is_shift(self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti)
    }

    /// PRO↔ANTI; static and dash are their own complement.
    #[must_use]
    pub const fn complement(self) -> Self {
        match self {
            MotionType::Pro => MotionType::Anti,
            MotionType::Anti => MotionType::Pro,
            other => other,
        }
    }
}

/// Spin direction of the prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RotationDirection {
    /// Clockwise
    #[serde(rename = "cw")]
    Clockwise,
    /// Counter-clockwise
    #[serde(rename = "ccw")]
    CounterClockwise,
    /// No rotation (static or dash without turns)
    #[default]
    #[serde(rename = "no_rot")]
    NoRotation,
}

impl RotationDirection {
    /// Clockwise↔counter-clockwise; no rotation stays.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
            RotationDirection::NoRotation => RotationDirection::NoRotation,
        }
    }

    /// True for clockwise and counter-clockwise.
    #[must_use]
    pub const fn is_rotating(self) -> bool {
        !matches!(self, RotationDirection::NoRotation)
    }
}

/// Prop orientation relative to the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Pointing inward
    #[default]
    In,
    /// Pointing clockwise
    Clock,
    /// Pointing outward
    Out,
    /// Pointing counter-clockwise
    Counter,
}

impl Orientation {
    /// Orientation cycle in clockwise order.
    pub const CYCLE: [Orientation; 4] = [
        Orientation::In,
        Orientation::Clock,
        Orientation::Out,
        Orientation::Counter,
    ];

    /// Index into [`Orientation::CYCLE`].
    #[must_use]
    pub const fn cycle_index(self) -> usize {
        match self {
            Orientation::In => 0,
            Orientation::Clock => 1,
            Orientation::Out => 2,
            Orientation::Counter => 3,
        }
    }
}

/// Turn count with half-turn resolution.
///
/// Stored as a number of half turns so it stays `Eq`; serialized as a
/// decimal number (`0`, `0.5`, `1`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Turns(u8);

impl Turns {
    /// Zero turns.
    pub const ZERO: Turns = Turns(0);
    /// Largest turn count the notation supports.
    pub const MAX: Turns = Turns(6);

    /// Builds a turn count from half turns.
    #[must_use]
    pub const fn from_half_turns(half_turns: u8) -> Self {
        Self(half_turns)
    }

    /// Builds a turn count from whole turns.
    #[must_use]
    pub const fn whole(turns: u8) -> Self {
        Self(turns * 2)
    }

    /// Number of half turns.
    #[must_use]
    pub const fn half_turns(self) -> u8 {
        self.0
    }

    /// True when the count is a whole number of turns.
    #[must_use]
    pub const fn is_whole(self) -> bool {
        self.0 % 2 == 0
    }

    /// True when there are no turns.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<Turns> for f64 {
    fn from(turns: Turns) -> Self {
        f64::from(turns.0) / 2.0
    }
}

impl TryFrom<f64> for Turns {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let doubled = value * 2.0;
        if !(0.0..=f64::from(Turns::MAX.0)).contains(&doubled) || doubled.fract() != 0.0 {
            return Err(format!(
                "Invalid turns {value}: must be a multiple of 0.5 between 0 and 3"
            ));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let half_turns = doubled as u8;
        Ok(Turns(half_turns))
    }
}

impl FromStr for Turns {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid turns '{s}': expected a number such as 1 or 1.5"))?;
        Turns::try_from(value)
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

/// One hand's motion within a beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionData {
    /// Kind of motion
    pub motion_type: MotionType,
    /// Prop spin direction
    pub rotation_direction: RotationDirection,
    /// Where the hand starts
    pub start_location: Location,
    /// Where the hand ends
    pub end_location: Location,
    /// Prop orientation at the start
    #[serde(default)]
    pub start_orientation: Orientation,
    /// Prop orientation at the end
    #[serde(default)]
    pub end_orientation: Orientation,
    /// Prop turns during the motion
    #[serde(default)]
    pub turns: Turns,
}

impl MotionData {
    /// Creates a motion with zero turns and inward orientations.
    #[must_use]
    pub const fn new(
        motion_type: MotionType,
        rotation_direction: RotationDirection,
        start_location: Location,
        end_location: Location,
    ) -> Self {
        Self {
            motion_type,
            rotation_direction,
            start_location,
            end_location,
            start_orientation: Orientation::In,
            end_orientation: Orientation::In,
            turns: Turns::ZERO,
        }
    }

    /// A static motion holding `location`.
    #[must_use]
    pub const fn stationary(location: Location) -> Self {
        Self::new(
            MotionType::Static,
            RotationDirection::NoRotation,
            location,
            location,
        )
    }

    /// Sets the turn count.
    #[must_use]
    pub const fn with_turns(mut self, turns: Turns) -> Self {
        self.turns = turns;
        self
    }

    /// Sets the start orientation.
    #[must_use]
    pub const fn with_start_orientation(mut self, orientation: Orientation) -> Self {
        self.start_orientation = orientation;
        self
    }

    /// Sets the end orientation.
    #[must_use]
    pub const fn with_end_orientation(mut self, orientation: Orientation) -> Self {
        self.end_orientation = orientation;
        self
    }
}
