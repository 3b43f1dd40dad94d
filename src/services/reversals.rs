//! Reversal detection.

use crate::models::{Beat, HandColor, RotationDirection};

/// Marks each hand whose rotation direction differs from the last rotating
/// direction that hand used.
///
/// Non-rotating motions neither set nor reset the tracking, so a
/// `cw, no_rot, ccw` run marks the third beat. Existing flags are replaced.
#[must_use]
pub fn process_reversals(beats: &[Beat]) -> Vec<Beat> {
    let mut last_blue: Option<RotationDirection> = None;
    let mut last_red: Option<RotationDirection> = None;

    beats
        .iter()
        .map(|beat| {
            let mut marked = beat.clone();
            for hand in HandColor::BOTH {
                let last = match hand {
                    HandColor::Blue => &mut last_blue,
                    HandColor::Red => &mut last_red,
                };
                let direction = beat
                    .motion(hand)
                    .map_or(RotationDirection::NoRotation, |m| m.rotation_direction);
                let reversed = direction.is_rotating()
                    && last.is_some_and(|previous| previous != direction);
                if direction.is_rotating() {
                    *last = Some(direction);
                }
                marked = marked.with_reversal(hand, reversed);
            }
            marked
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GridPosition, Location, MotionData, MotionType};

    fn beat(number: usize, blue: RotationDirection, red: RotationDirection) -> Beat {
        let motion = |direction: RotationDirection| {
            let motion_type = if direction.is_rotating() {
                MotionType::Pro
            } else {
                MotionType::Static
            };
            MotionData::new(motion_type, direction, Location::N, Location::N)
        };
        Beat::new(
            number,
            GridPosition::Beta1,
            GridPosition::Beta1,
            motion(blue),
            motion(red),
        )
    }

    #[test]
    fn test_reversal_skips_non_rotating_beats() {
        use RotationDirection::{Clockwise as Cw, CounterClockwise as Ccw, NoRotation as No};
        let beats = vec![
            beat(1, Cw, Ccw),
            beat(2, No, Ccw),
            beat(3, Ccw, Ccw),
            beat(4, Ccw, Cw),
        ];
        let marked = process_reversals(&beats);
        let flags: Vec<(bool, bool)> = marked
            .iter()
            .map(|b| (b.blue_reversal, b.red_reversal))
            .collect();
        assert_eq!(
            flags,
            vec![(false, false), (false, false), (true, false), (false, true)]
        );
    }

    #[test]
    fn test_stale_flags_are_cleared() {
        let beats = vec![beat(1, RotationDirection::Clockwise, RotationDirection::Clockwise)
            .with_reversal(HandColor::Blue, true)];
        let marked = process_reversals(&beats);
        assert!(!marked[0].blue_reversal);
    }
}
