//! Start position selection.

use crate::models::{Beat, GridMode, GridPosition};
use rand::seq::IndexedRandom;
use rand::Rng;

const DIAMOND_STARTS: [GridPosition; 3] = [
    GridPosition::Alpha1,
    GridPosition::Beta5,
    GridPosition::Gamma11,
];

const BOX_STARTS: [GridPosition; 3] = [
    GridPosition::Alpha2,
    GridPosition::Beta4,
    GridPosition::Gamma12,
];

/// Canonical start positions for a grid mode.
#[must_use]
pub const fn canonical_start_positions(grid_mode: GridMode) -> &'static [GridPosition; 3] {
    match grid_mode {
        GridMode::Diamond => &DIAMOND_STARTS,
        GridMode::Box => &BOX_STARTS,
    }
}

/// Random canonical start-position beat: both hands static, no turns,
/// orientations `in`.
pub fn select_start_position(grid_mode: GridMode, rng: &mut impl Rng) -> Beat {
    let starts = canonical_start_positions(grid_mode);
    let position = starts.choose(rng).copied().unwrap_or(starts[0]);
    Beat::starting_position(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MotionType, Orientation};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_start_positions_belong_to_grid_mode() {
        for mode in GridMode::ALL {
            for position in canonical_start_positions(mode) {
                assert_eq!(position.grid_mode(), mode);
            }
        }
    }

    #[test]
    fn test_selected_start_is_static_and_inward() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let beat = select_start_position(GridMode::Box, &mut rng);
            assert!(beat.is_start_position());
            assert!(BOX_STARTS.contains(&beat.end_position));
            for motion in [beat.blue_motion.unwrap(), beat.red_motion.unwrap()] {
                assert_eq!(motion.motion_type, MotionType::Static);
                assert!(motion.turns.is_zero());
                assert_eq!(motion.end_orientation, Orientation::In);
            }
        }
    }
}
