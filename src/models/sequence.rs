//! Finished sequence structure.

use crate::models::beat::Beat;
use crate::models::cap_type::CapType;
use crate::models::grid::GridMode;
use crate::models::options::PropType;
use serde::{Deserialize, Serialize};

/// A generated or completed sequence.
///
/// `beats` holds beats 1..=N; the start-position pseudo-beat is kept
/// separately in `starting_position_beat`.
///
/// # Invariants
///
/// - `beats[i].end_position == beats[i + 1].start_position`
/// - the first beat starts where `starting_position_beat` ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    /// Beats in order, numbered from 1
    pub beats: Vec<Beat>,
    /// The start-position pseudo-beat
    pub starting_position_beat: Beat,
    /// Grid mode the sequence is expressed in
    pub grid_mode: GridMode,
    /// Prop the sequence is written for
    pub prop_type: PropType,
    /// Difficulty level (1-3)
    pub level: u8,
    /// CAP type used to close the sequence, if circular
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap_type: Option<CapType>,
    /// True when produced by a CAP
    #[serde(default)]
    pub is_circular: bool,
}

impl Sequence {
    /// Number of beats, excluding the start position.
    #[must_use]
    pub fn len(&self) -> usize {
        self.beats.len()
    }

    /// True when the sequence has no beats.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Concatenated beat letters; beats without a letter are skipped.
    #[must_use]
    pub fn word(&self) -> String {
        self.beats
            .iter()
            .filter_map(|beat| beat.letter.as_deref())
            .collect()
    }

    /// True when every beat starts where the previous one ended.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        std::iter::once(&self.starting_position_beat)
            .chain(self.beats.iter())
            .zip(self.beats.iter())
            .all(|(previous, beat)| previous.end_position == beat.start_position)
    }

    /// True when the last beat ends at the starting position.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.beats
            .last()
            .is_some_and(|last| last.end_position == self.starting_position_beat.end_position)
    }
}
