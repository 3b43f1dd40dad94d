//! Transformation rule records, one per CAP type.
//!
//! Every CAP is the same algorithm parameterized by a [`CapRule`]. Adding a
//! combination means adding a row to [`CAP_RULES`].

use crate::cap::tables;
use crate::models::{CapComponent, CapType, ComponentSet, GridPosition, Location, SliceSize};

/// How the letter of a generated beat relates to its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterRule {
    /// Letter carried over
    Same,
    /// Complementary letter
    Complementary,
}

/// Transformation applied to produce each generated beat from its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapRule {
    /// CAP type this rule implements
    pub cap_type: CapType,
    /// Letter rule
    pub letter: LetterRule,
    /// Reflect locations across the north-south axis
    pub mirror: bool,
    /// Rotate locations about the grid center
    pub rotate: bool,
    /// Exchange the hands
    pub swap_hands: bool,
    /// PRO↔ANTI
    pub flip_motion_type: bool,
    /// Flip rotation direction. Mirror, rotate and complement each flip;
    /// pairs cancel.
    pub flip_rotation_direction: bool,
    /// Honors [`SliceSize::Quartered`]; every other rule is halved-only
    pub supports_quartered: bool,
}

const fn rule(cap_type: CapType) -> CapRule {
    CapRule {
        cap_type,
        letter: LetterRule::Same,
        mirror: false,
        rotate: false,
        swap_hands: false,
        flip_motion_type: false,
        flip_rotation_direction: false,
        supports_quartered: false,
    }
}

/// Statically wired rule table.
pub const CAP_RULES: [CapRule; 11] = [
    CapRule {
        rotate: true,
        flip_rotation_direction: true,
        supports_quartered: true,
        ..rule(CapType::StrictRotated)
    },
    CapRule {
        mirror: true,
        flip_rotation_direction: true,
        ..rule(CapType::StrictMirrored)
    },
    CapRule {
        swap_hands: true,
        ..rule(CapType::StrictSwapped)
    },
    CapRule {
        letter: LetterRule::Complementary,
        flip_motion_type: true,
        flip_rotation_direction: true,
        ..rule(CapType::StrictComplementary)
    },
    CapRule {
        mirror: true,
        swap_hands: true,
        flip_rotation_direction: true,
        ..rule(CapType::MirroredSwapped)
    },
    CapRule {
        letter: LetterRule::Complementary,
        swap_hands: true,
        flip_motion_type: true,
        flip_rotation_direction: true,
        ..rule(CapType::SwappedComplementary)
    },
    CapRule {
        letter: LetterRule::Complementary,
        rotate: true,
        flip_motion_type: true,
        flip_rotation_direction: false,
        ..rule(CapType::RotatedComplementary)
    },
    CapRule {
        letter: LetterRule::Complementary,
        mirror: true,
        flip_motion_type: true,
        flip_rotation_direction: false,
        ..rule(CapType::MirroredComplementary)
    },
    CapRule {
        rotate: true,
        swap_hands: true,
        flip_rotation_direction: true,
        ..rule(CapType::RotatedSwapped)
    },
    CapRule {
        mirror: true,
        rotate: true,
        flip_rotation_direction: false,
        ..rule(CapType::MirroredRotated)
    },
    CapRule {
        letter: LetterRule::Complementary,
        mirror: true,
        rotate: true,
        flip_motion_type: true,
        flip_rotation_direction: true,
        ..rule(CapType::MirroredComplementaryRotated)
    },
];

/// Rule for a CAP type, if one is wired.
#[must_use]
pub fn rule_for(cap_type: CapType) -> Option<&'static CapRule> {
    CAP_RULES.iter().find(|rule| rule.cap_type == cap_type)
}

impl CapRule {
    /// Components this rule is made of.
    #[must_use]
    pub fn components(&self) -> ComponentSet {
        [
            (self.rotate, CapComponent::Rotated),
            (self.mirror, CapComponent::Mirrored),
            (self.swap_hands, CapComponent::Swapped),
            (self.letter == LetterRule::Complementary, CapComponent::Complementary),
        ]
        .into_iter()
        .filter(|(present, _)| *present)
        .fold(ComponentSet::empty(), |set, (_, component)| set.with(component))
    }

    /// Slice size actually applied: halved-only rules ignore the request.
    #[must_use]
    pub const fn effective_slice_size(&self, requested: SliceSize) -> SliceSize {
        if self.supports_quartered {
            requested
        } else {
            SliceSize::Halved
        }
    }

    /// Clockwise quarter turns applied per slice.
    #[must_use]
    pub const fn rotation_steps(&self, slice_size: SliceSize) -> usize {
        if !self.rotate {
            return 0;
        }
        match self.effective_slice_size(slice_size) {
            SliceSize::Halved => 2,
            SliceSize::Quartered => 1,
        }
    }

    /// Spatial transform of one hand location (mirror, then rotate).
    #[must_use]
    pub fn transform_location(
        &self,
        location: Location,
        slice_size: SliceSize,
    ) -> Option<Location> {
        let mirrored = if self.mirror {
            tables::mirror_location(location)?
        } else {
            location
        };
        tables::rotate_location(mirrored, self.rotation_steps(slice_size))
    }

    /// Table-driven position transform (mirror, then rotate, then swap).
    ///
    /// Used for sequence-level validation and end-position planning. Beats
    /// under a swapping rule re-derive their positions from hand locations.
    #[must_use]
    pub fn transform_position(
        &self,
        position: GridPosition,
        slice_size: SliceSize,
    ) -> Option<GridPosition> {
        let mirrored = if self.mirror {
            tables::mirror_position(position)?
        } else {
            position
        };
        let rotated = tables::rotate_position(mirrored, self.rotation_steps(slice_size))?;
        if self.swap_hands {
            tables::swap_position(rotated)
        } else {
            Some(rotated)
        }
    }
}
