//! Turn allocation by difficulty level.

use crate::models::{Beat, HandColor, Turns};
use rand::Rng;

/// Turns assigned to each hand of each beat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnPlan {
    blue: Vec<Turns>,
    red: Vec<Turns>,
}

impl TurnPlan {
    /// A plan with no turns for `length` beats.
    #[must_use]
    pub fn zero(length: usize) -> Self {
        Self {
            blue: vec![Turns::ZERO; length],
            red: vec![Turns::ZERO; length],
        }
    }

    /// Turns for `hand` on the beat at `index` (0-based). Beats past the
    /// plan get zero turns.
    #[must_use]
    pub fn turns_for(&self, index: usize, hand: HandColor) -> Turns {
        let turns = match hand {
            HandColor::Blue => &self.blue,
            HandColor::Red => &self.red,
        };
        turns.get(index).copied().unwrap_or(Turns::ZERO)
    }

    /// Applies the planned turns for beat `index` to the pro and anti
    /// motions of `beat`. Static and dash motions keep zero turns.
    #[must_use]
    pub fn apply(&self, beat: &Beat, index: usize) -> Beat {
        HandColor::BOTH
            .into_iter()
            .fold(beat.clone(), |updated, hand| match updated.motion(hand).copied() {
                Some(motion) if motion.motion_type.is_shift() => {
                    updated.with_motion(hand, motion.with_turns(self.turns_for(index, hand)))
                }
                _ => updated,
            })
    }

    /// Number of beats covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blue.len()
    }

    /// True when the plan covers no beats.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blue.is_empty()
    }
}

/// Allocates turns for `length` beats.
///
/// - level 1: no turns
/// - level 2: whole turns from 0 up to `intensity`
/// - level 3: half-turn steps from 0 up to `intensity`
///
/// Levels above 3 are treated as 3.
pub fn allocate_turns(length: usize, level: u8, intensity: Turns, rng: &mut impl Rng) -> TurnPlan {
    let max_half_turns = intensity.half_turns().min(Turns::MAX.half_turns());
    let mut plan = TurnPlan::default();
    for _ in 0..length {
        plan.blue.push(draw(level, max_half_turns, rng));
        plan.red.push(draw(level, max_half_turns, rng));
    }
    plan
}

fn draw(level: u8, max_half_turns: u8, rng: &mut impl Rng) -> Turns {
    match level {
        0 | 1 => Turns::ZERO,
        2 => Turns::whole(random_up_to(rng, max_half_turns / 2)),
        _ => Turns::from_half_turns(random_up_to(rng, max_half_turns)),
    }
}

fn random_up_to(rng: &mut impl Rng, max: u8) -> u8 {
    rng.random_range(0..=max)
}
