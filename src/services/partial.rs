//! Beat-by-beat sequence construction.

use crate::generator::{GenerationError, GenerationResult};
use crate::models::{Beat, GridPosition};
use crate::services::candidates::{
    candidate_beats, filter_by_continuity, filter_by_end_position, HandDirections,
};
use crate::services::orientation::update_orientations;
use crate::services::turns::TurnPlan;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Builds `length` beats after `start_beat`, the last ending at
/// `target_end`.
///
/// Returns the start beat followed by the new beats. Every beat but the last
/// follows `directions`; the last prefers candidates that do, and falls back
/// to any candidate reaching the target.
///
/// # Errors
///
/// Returns [`GenerationError::NoCandidates`] when no candidate exists for a
/// beat.
pub fn build_partial_sequence(
    start_beat: &Beat,
    length: usize,
    target_end: GridPosition,
    directions: &HandDirections,
    turns: &TurnPlan,
    rng: &mut impl Rng,
) -> GenerationResult<Vec<Beat>> {
    let beats = build_beats(start_beat, length, Some(target_end), directions, turns, rng)?;
    tracing::debug!(
        "Built partial sequence of {} beats from {} to {}",
        length,
        start_beat.end_position,
        target_end
    );
    Ok(beats)
}

/// Builds `length` beats after `start_beat` with no end constraint.
///
/// # Errors
///
/// Returns [`GenerationError::NoCandidates`] when no candidate exists for a
/// beat.
pub fn build_freeform_sequence(
    start_beat: &Beat,
    length: usize,
    directions: &HandDirections,
    turns: &TurnPlan,
    rng: &mut impl Rng,
) -> GenerationResult<Vec<Beat>> {
    build_beats(start_beat, length, None, directions, turns, rng)
}

fn build_beats(
    start_beat: &Beat,
    length: usize,
    target_end: Option<GridPosition>,
    directions: &HandDirections,
    turns: &TurnPlan,
    rng: &mut impl Rng,
) -> GenerationResult<Vec<Beat>> {
    let mut beats = Vec::with_capacity(length + 1);
    beats.push(start_beat.clone());

    for beat_number in 1..=length {
        let previous = &beats[beat_number - 1];
        let candidates = candidate_beats(previous, beat_number);
        let target = target_end.filter(|_| beat_number == length);
        let pool = match target {
            Some(target) => {
                let continuous = filter_by_end_position(
                    filter_by_continuity(candidates.clone(), directions),
                    target,
                );
                if continuous.is_empty() {
                    filter_by_end_position(candidates, target)
                } else {
                    continuous
                }
            }
            None => filter_by_continuity(candidates, directions),
        };

        let chosen = pool
            .choose(rng)
            .ok_or(GenerationError::NoCandidates { beat_number })?;
        let beat = update_orientations(&turns.apply(chosen, beat_number - 1), previous);
        beats.push(beat);
    }

    Ok(beats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HandColor, RotationDirection};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_partial_reaches_target() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = Beat::starting_position(GridPosition::Alpha1);
        let directions =
            HandDirections::fixed(RotationDirection::Clockwise, RotationDirection::Clockwise);
        for target in [GridPosition::Alpha5, GridPosition::Gamma3, GridPosition::Beta7] {
            let beats = build_partial_sequence(
                &start,
                4,
                target,
                &directions,
                &TurnPlan::zero(4),
                &mut rng,
            )
            .unwrap();
            assert_eq!(beats.len(), 5);
            assert_eq!(beats[4].end_position, target);
            for pair in beats.windows(2) {
                assert_eq!(pair[0].end_position, pair[1].start_position);
            }
            for beat in &beats[1..] {
                assert!(directions.allows(beat));
            }
        }
    }

    #[test]
    fn test_single_beat_partial() {
        let mut rng = StdRng::seed_from_u64(2);
        let start = Beat::starting_position(GridPosition::Gamma12);
        let beats = build_partial_sequence(
            &start,
            1,
            GridPosition::Gamma16,
            &HandDirections::free(),
            &TurnPlan::zero(1),
            &mut rng,
        )
        .unwrap();
        assert_eq!(beats.len(), 2);
        assert_eq!(beats[1].end_position, GridPosition::Gamma16);
    }

    #[test]
    fn test_orientations_chain() {
        let mut rng = StdRng::seed_from_u64(9);
        let start = Beat::starting_position(GridPosition::Beta5);
        let beats = build_freeform_sequence(
            &start,
            8,
            &HandDirections::free(),
            &TurnPlan::zero(8),
            &mut rng,
        )
        .unwrap();
        for pair in beats.windows(2) {
            for hand in HandColor::BOTH {
                assert_eq!(
                    pair[1].motion(hand).unwrap().start_orientation,
                    pair[0].motion(hand).unwrap().end_orientation
                );
            }
        }
    }
}
