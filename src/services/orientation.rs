//! Prop orientation continuity.
//!
//! A beat's start orientations are the previous beat's end orientations.
//! End orientations advance the cycle in → clock → out → counter by one step
//! per half turn, plus two steps for anti and dash motions, in the motion's
//! rotation direction (clockwise when the motion does not rotate).

use crate::models::{Beat, HandColor, MotionData, MotionType, Orientation, RotationDirection};

/// End orientation of a motion given its start orientation.
#[must_use]
pub fn calculate_end_orientation(motion: &MotionData) -> Orientation {
    let flip = matches!(motion.motion_type, MotionType::Anti | MotionType::Dash);
    let steps = usize::from(motion.turns.half_turns()) + if flip { 2 } else { 0 };
    let len = Orientation::CYCLE.len();
    let offset = match motion.rotation_direction {
        RotationDirection::CounterClockwise => (len - steps % len) % len,
        RotationDirection::Clockwise | RotationDirection::NoRotation => steps % len,
    };
    Orientation::CYCLE[(motion.start_orientation.cycle_index() + offset) % len]
}

/// Copies the previous beat's end orientations onto `beat`'s start.
///
/// Hands without motion in either beat are left alone.
#[must_use]
pub fn update_start_orientations(beat: &Beat, previous: &Beat) -> Beat {
    HandColor::BOTH
        .into_iter()
        .fold(beat.clone(), |updated, hand| {
            match (updated.motion(hand).copied(), previous.motion(hand)) {
                (Some(motion), Some(before)) => updated.with_motion(
                    hand,
                    motion.with_start_orientation(before.end_orientation),
                ),
                _ => updated,
            }
        })
}

/// Recomputes `beat`'s end orientations from its start orientations.
#[must_use]
pub fn update_end_orientations(beat: &Beat) -> Beat {
    HandColor::BOTH
        .into_iter()
        .fold(beat.clone(), |updated, hand| match updated.motion(hand).copied() {
            Some(motion) => updated.with_motion(
                hand,
                motion.with_end_orientation(calculate_end_orientation(&motion)),
            ),
            None => updated,
        })
}

/// Start then end update against `previous`.
#[must_use]
pub fn update_orientations(beat: &Beat, previous: &Beat) -> Beat {
    update_end_orientations(&update_start_orientations(beat, previous))
}
