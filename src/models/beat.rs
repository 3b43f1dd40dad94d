//! Beat data structure.

use crate::models::grid::GridPosition;
use crate::models::motion::{HandColor, MotionData};
use serde::{Deserialize, Serialize};

/// One step of a sequence.
///
/// Beat number 0 is reserved for the start-position pseudo-beat; real beats
/// are numbered from 1. Beats are never edited in place: a transformed beat
/// is a new value built from its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beat {
    /// 1-indexed beat number (0 for the start position)
    pub beat_number: usize,
    /// Notation letter, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    /// Grid position at the start of the beat
    pub start_position: GridPosition,
    /// Grid position at the end of the beat
    pub end_position: GridPosition,
    /// Blue hand motion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue_motion: Option<MotionData>,
    /// Red hand motion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red_motion: Option<MotionData>,
    /// Blue hand reversed its spin relative to the previous rotating beat
    #[serde(default)]
    pub blue_reversal: bool,
    /// Red hand reversed its spin relative to the previous rotating beat
    #[serde(default)]
    pub red_reversal: bool,
    /// Placeholder beat with no content
    #[serde(default)]
    pub is_blank: bool,
}

impl Beat {
    /// Creates a beat from two hand motions.
    #[must_use]
    pub fn new(
        beat_number: usize,
        start_position: GridPosition,
        end_position: GridPosition,
        blue_motion: MotionData,
        red_motion: MotionData,
    ) -> Self {
        Self {
            beat_number,
            letter: None,
            start_position,
            end_position,
            blue_motion: Some(blue_motion),
            red_motion: Some(red_motion),
            blue_reversal: false,
            red_reversal: false,
            is_blank: false,
        }
    }

    /// Creates the start-position pseudo-beat (beat 0) with both hands static.
    #[must_use]
    pub fn starting_position(position: GridPosition) -> Self {
        let (blue, red) = position.hand_locations();
        Self::new(
            0,
            position,
            position,
            MotionData::stationary(blue),
            MotionData::stationary(red),
        )
    }

    /// Sets the letter.
    pub fn with_letter(mut self, letter: impl Into<String>) -> Self {
        self.letter = Some(letter.into());
        self
    }

    /// Sets the beat number.
    #[must_use]
    pub fn with_beat_number(mut self, beat_number: usize) -> Self {
        self.beat_number = beat_number;
        self
    }

    /// Replaces one hand's motion.
    #[must_use]
    pub fn with_motion(mut self, hand: HandColor, motion: MotionData) -> Self {
        match hand {
            HandColor::Blue => self.blue_motion = Some(motion),
            HandColor::Red => self.red_motion = Some(motion),
        }
        self
    }

    /// Sets one hand's reversal flag.
    #[must_use]
    pub fn with_reversal(mut self, hand: HandColor, reversal: bool) -> Self {
        match hand {
            HandColor::Blue => self.blue_reversal = reversal,
            HandColor::Red => self.red_reversal = reversal,
        }
        self
    }

    /// Motion of one hand.
    #[must_use]
    pub const fn motion(&self, hand: HandColor) -> Option<&MotionData> {
        match hand {
            HandColor::Blue => self.blue_motion.as_ref(),
            HandColor::Red => self.red_motion.as_ref(),
        }
    }

    /// Reversal flag of one hand.
    #[must_use]
    pub const fn reversal(&self, hand: HandColor) -> bool {
        match hand {
            HandColor::Blue => self.blue_reversal,
            HandColor::Red => self.red_reversal,
        }
    }

    /// True for the beat-0 start-position pseudo-beat.
    #[must_use]
    pub const fn is_start_position(&self) -> bool {
        self.beat_number == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::Location;
    use crate::models::motion::{MotionType, RotationDirection};

    #[test]
    fn test_start_position_beat() {
        let beat = Beat::starting_position(GridPosition::Alpha1);
        assert!(beat.is_start_position());
        assert_eq!(beat.start_position, beat.end_position);
        let blue = beat.motion(HandColor::Blue).unwrap();
        assert_eq!(blue.motion_type, MotionType::Static);
        assert_eq!(blue.start_location, Location::S);
        assert_eq!(beat.motion(HandColor::Red).unwrap().end_location, Location::N);
    }

    #[test]
    fn test_with_motion_replaces_one_hand() {
        let shift = MotionData::new(
            MotionType::Pro,
            RotationDirection::Clockwise,
            Location::S,
            Location::W,
        );
        let beat =
            Beat::starting_position(GridPosition::Alpha1).with_motion(HandColor::Blue, shift);
        assert_eq!(beat.blue_motion, Some(shift));
        assert_eq!(
            beat.red_motion.map(|m| m.motion_type),
            Some(MotionType::Static)
        );
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"beat_number":1,"start_position":"alpha1","end_position":"alpha3"}"#;
        let beat: Beat = serde_json::from_str(json).unwrap();
        assert_eq!(beat.letter, None);
        assert!(beat.blue_motion.is_none());
        assert!(!beat.blue_reversal);
    }
}
