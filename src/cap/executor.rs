//! Generic CAP executor.
//!
//! One algorithm for every CAP type; the per-type behavior comes from the
//! [`CapRule`] the executor is built with.

use crate::cap::error::{CapError, CapResult};
use crate::cap::rules::{CapRule, LetterRule};
use crate::cap::validation::{determine_end_position, is_valid_pair};
use crate::models::{Beat, CapType, GridPosition, HandColor, Location, MotionData, SliceSize};
use crate::services::{letters, orientation, positions};

/// Completes partial sequences for one CAP type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapExecutor {
    rule: &'static CapRule,
}

impl CapExecutor {
    pub(crate) const fn new(rule: &'static CapRule) -> Self {
        Self { rule }
    }

    /// CAP type this executor implements.
    #[must_use]
    pub const fn cap_type(&self) -> CapType {
        self.rule.cap_type
    }

    /// Transformation rule driving this executor.
    #[must_use]
    pub const fn rule(&self) -> &'static CapRule {
        self.rule
    }

    /// Completes a partial sequence.
    ///
    /// `sequence[0]` is the start-position beat; the rest is the source half
    /// of length `N`. The result holds the start beat, the source beats
    /// renumbered `1..=N`, then the generated beats. Generated beat `i` is
    /// built from beat `i - N` of the result, so a quartered rotation chains
    /// through the previously generated slices.
    ///
    /// # Errors
    ///
    /// * [`CapError::InputTooShort`] - fewer than two beats
    /// * [`CapError::InvalidPositionPair`] - the sequence does not end where
    ///   this CAP type requires
    /// * [`CapError::MissingMotionData`] - a source beat lacks a hand motion
    /// * [`CapError::UnmappedLocations`] - transformed hand locations name no
    ///   grid position
    pub fn execute_cap(&self, sequence: &[Beat], slice_size: SliceSize) -> CapResult<Vec<Beat>> {
        let (start_beat, source) = match sequence {
            [start_beat, source @ ..] if !source.is_empty() => (start_beat, source),
            _ => {
                return Err(CapError::InputTooShort {
                    len: sequence.len(),
                })
            }
        };
        self.validate(start_beat, source, slice_size)?;

        let slice_size = self.rule.effective_slice_size(slice_size);
        let source_len = source.len();
        let entries_to_add = source_len * (slice_size.slices() - 1);
        let final_length = source_len + entries_to_add;

        tracing::debug!(
            "Executing {} on {} source beats ({}), final length {}",
            self.rule.cap_type,
            source_len,
            slice_size,
            final_length
        );

        let mut output = Vec::with_capacity(final_length + 1);
        output.push(start_beat.clone());
        output.extend(
            source
                .iter()
                .enumerate()
                .map(|(index, beat)| beat.clone().with_beat_number(index + 1)),
        );

        for beat_number in source_len + 1..=final_length {
            let generated = self.transform_beat(
                &output[beat_number - source_len],
                &output[beat_number - 1],
                beat_number,
                slice_size,
            )?;
            output.push(generated);
        }

        Ok(output)
    }

    fn validate(&self, start_beat: &Beat, source: &[Beat], slice_size: SliceSize) -> CapResult<()> {
        let cap_type = self.rule.cap_type;
        let start = start_beat.start_position;
        let end = source
            .last()
            .map_or(start_beat.end_position, |beat| beat.end_position);
        if is_valid_pair(cap_type, slice_size, start, end) {
            return Ok(());
        }
        let expected = determine_end_position(cap_type, start, slice_size)?;
        Err(CapError::InvalidPositionPair {
            cap_type,
            start,
            end,
            expected,
        })
    }

    fn transform_beat(
        &self,
        source: &Beat,
        previous: &Beat,
        beat_number: usize,
        slice_size: SliceSize,
    ) -> CapResult<Beat> {
        let blue = self.transform_motion(source, HandColor::Blue, slice_size)?;
        let red = self.transform_motion(source, HandColor::Red, slice_size)?;
        let (blue, red) = if self.rule.swap_hands {
            (red, blue)
        } else {
            (blue, red)
        };

        let (start_position, end_position) = if self.rule.swap_hands {
            (
                derive(blue.start_location, red.start_location)?,
                derive(blue.end_location, red.end_location)?,
            )
        } else {
            (
                self.transform_position(source.start_position, slice_size)?,
                self.transform_position(source.end_position, slice_size)?,
            )
        };

        let letter = match self.rule.letter {
            LetterRule::Same => source.letter.clone(),
            LetterRule::Complementary => {
                source.letter.as_deref().map(letters::complementary_letter)
            }
        };

        let beat = Beat {
            beat_number,
            letter,
            start_position,
            end_position,
            blue_motion: Some(blue),
            red_motion: Some(red),
            blue_reversal: false,
            red_reversal: false,
            is_blank: source.is_blank,
        };
        let beat = orientation::update_start_orientations(&beat, previous);
        Ok(orientation::update_end_orientations(&beat))
    }

    fn transform_motion(
        &self,
        source: &Beat,
        hand: HandColor,
        slice_size: SliceSize,
    ) -> CapResult<MotionData> {
        let motion = source.motion(hand).ok_or(CapError::MissingMotionData {
            beat_number: source.beat_number,
            hand,
        })?;
        let start_location = self.transform_location(
            motion.start_location,
            source.start_position.hand_locations(),
            slice_size,
        )?;
        let end_location = self.transform_location(
            motion.end_location,
            source.end_position.hand_locations(),
            slice_size,
        )?;
        let motion_type = if self.rule.flip_motion_type {
            motion.motion_type.complement()
        } else {
            motion.motion_type
        };
        let rotation_direction = if self.rule.flip_rotation_direction {
            motion.rotation_direction.flipped()
        } else {
            motion.rotation_direction
        };
        Ok(
            MotionData::new(motion_type, rotation_direction, start_location, end_location)
                .with_turns(motion.turns),
        )
    }

    /// The blue/red pair the location was taken from is reported on failure.
    fn transform_location(
        &self,
        location: Location,
        (blue, red): (Location, Location),
        slice_size: SliceSize,
    ) -> CapResult<Location> {
        self.rule
            .transform_location(location, slice_size)
            .ok_or(CapError::UnmappedLocations { blue, red })
    }

    fn transform_position(
        &self,
        position: GridPosition,
        slice_size: SliceSize,
    ) -> CapResult<GridPosition> {
        let (blue, red) = position.hand_locations();
        self.rule
            .transform_position(position, slice_size)
            .ok_or(CapError::UnmappedLocations { blue, red })
    }
}

fn derive(blue: Location, red: Location) -> CapResult<GridPosition> {
    positions::derive_position(blue, red).ok_or(CapError::UnmappedLocations { blue, red })
}
