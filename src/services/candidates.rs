//! Candidate beat generation and filtering.
//!
//! Each hand has six one-beat options from its current location: pro or anti
//! in either rotation direction, static, or dash. Pro travels the way the
//! prop spins; anti travels against it. A candidate beat is any pairing of a
//! blue and a red option.

use crate::models::{
    Beat, GridPosition, HandColor, Location, MotionData, MotionType, PropContinuity,
    RotationDirection,
};
use crate::services::letters::classify_letter;
use crate::services::positions::{derive_position, opposite_location, step_location};
use rand::Rng;

/// Rotation direction each hand is held to, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandDirections {
    /// Blue hand direction
    pub blue: Option<RotationDirection>,
    /// Red hand direction
    pub red: Option<RotationDirection>,
}

impl HandDirections {
    /// No constraint on either hand.
    #[must_use]
    pub const fn free() -> Self {
        Self {
            blue: None,
            red: None,
        }
    }

    /// Fixed directions for both hands.
    #[must_use]
    pub const fn fixed(blue: RotationDirection, red: RotationDirection) -> Self {
        Self {
            blue: Some(blue),
            red: Some(red),
        }
    }

    /// Directions for a continuity mode: continuous picks one random
    /// direction per hand, random constrains nothing.
    pub fn for_continuity(continuity: PropContinuity, rng: &mut impl Rng) -> Self {
        match continuity {
            PropContinuity::Continuous => Self::fixed(random_direction(rng), random_direction(rng)),
            PropContinuity::Random => Self::free(),
        }
    }

    /// Direction held for `hand`.
    #[must_use]
    pub const fn for_hand(&self, hand: HandColor) -> Option<RotationDirection> {
        match hand {
            HandColor::Blue => self.blue,
            HandColor::Red => self.red,
        }
    }

    /// True when every rotating hand of `beat` follows its held direction.
    #[must_use]
    pub fn allows(&self, beat: &Beat) -> bool {
        HandColor::BOTH.into_iter().all(|hand| {
            match (self.for_hand(hand), beat.motion(hand)) {
                (Some(held), Some(motion)) => {
                    !motion.rotation_direction.is_rotating() || motion.rotation_direction == held
                }
                _ => true,
            }
        })
    }
}

fn random_direction(rng: &mut impl Rng) -> RotationDirection {
    if rng.random_bool(0.5) {
        RotationDirection::Clockwise
    } else {
        RotationDirection::CounterClockwise
    }
}

fn hand_options(location: Location) -> Vec<MotionData> {
    let mut options = Vec::with_capacity(6);
    for direction in [
        RotationDirection::Clockwise,
        RotationDirection::CounterClockwise,
    ] {
        if let Some(end) = step_location(location, direction) {
            options.push(MotionData::new(MotionType::Pro, direction, location, end));
        }
        if let Some(end) = step_location(location, direction.flipped()) {
            options.push(MotionData::new(MotionType::Anti, direction, location, end));
        }
    }
    options.push(MotionData::stationary(location));
    if let Some(end) = opposite_location(location) {
        options.push(MotionData::new(
            MotionType::Dash,
            RotationDirection::NoRotation,
            location,
            end,
        ));
    }
    options
}

/// Every beat reachable from where `previous` ends, numbered `beat_number`
/// and lettered by [`classify_letter`].
#[must_use]
pub fn candidate_beats(previous: &Beat, beat_number: usize) -> Vec<Beat> {
    let start = previous.end_position;
    let (blue_location, red_location) = start.hand_locations();
    let red_options = hand_options(red_location);

    hand_options(blue_location)
        .into_iter()
        .flat_map(|blue| red_options.iter().map(move |red| (blue, *red)))
        .filter_map(|(blue, red)| {
            let end = derive_position(blue.end_location, red.end_location)?;
            let beat = Beat::new(beat_number, start, end, blue, red);
            Some(match classify_letter(&beat) {
                Some(letter) => beat.with_letter(letter),
                None => beat,
            })
        })
        .collect()
}

/// Keeps candidates whose rotating hands follow `directions`.
#[must_use]
pub fn filter_by_continuity(candidates: Vec<Beat>, directions: &HandDirections) -> Vec<Beat> {
    candidates
        .into_iter()
        .filter(|beat| directions.allows(beat))
        .collect()
}

/// Keeps candidates ending at `target`.
#[must_use]
pub fn filter_by_end_position(candidates: Vec<Beat>, target: GridPosition) -> Vec<Beat> {
    candidates
        .into_iter()
        .filter(|beat| beat.end_position == target)
        .collect()
}
