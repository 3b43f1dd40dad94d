//! Sequence generation.
//!
//! Freeform mode walks the candidate pipeline beat by beat. Circular mode
//! builds a partial sequence that ends where the chosen CAP needs it to,
//! then lets the CAP executor complete it.

pub mod error;

pub use error::{GenerationError, GenerationResult};

use crate::cap::{determine_end_position, CapExecutorSelector};
use crate::models::{Beat, GenerationMode, GenerationOptions, Sequence, Turns};
use crate::services::{
    allocate_turns, build_partial_sequence, partial::build_freeform_sequence, process_reversals,
    select_start_position, HandDirections,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Highest supported difficulty level.
pub const MAX_LEVEL: u8 = 3;

/// Largest turn intensity accepted in options.
pub const MAX_TURN_INTENSITY: Turns = Turns::MAX;

/// Generates sequences from [`GenerationOptions`].
///
/// Randomness comes from the injected generator; use [`Self::seeded`] for
/// reproducible output.
#[derive(Debug)]
pub struct SequenceGenerator<R: Rng> {
    rng: R,
}

impl SequenceGenerator<StdRng> {
    /// Deterministic generator for a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from operating system entropy.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> SequenceGenerator<R> {
    /// Wraps a random number generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a sequence.
    ///
    /// # Errors
    ///
    /// * [`GenerationError::InvalidOptions`] - options fail validation
    /// * [`GenerationError::NoCandidates`] - the candidate pipeline ran dry
    /// * [`GenerationError::Cap`] - CAP selection or execution failed
    pub fn generate_sequence(&mut self, options: &GenerationOptions) -> GenerationResult<Sequence> {
        validate_options(options)?;
        tracing::debug!(
            "Generating {} sequence: length {}, {} grid, level {}",
            options.mode,
            options.length,
            options.grid_mode,
            options.level
        );
        match options.mode {
            GenerationMode::Freeform => self.generate_freeform(options),
            GenerationMode::Circular => self.generate_circular(options),
        }
    }

    fn generate_freeform(&mut self, options: &GenerationOptions) -> GenerationResult<Sequence> {
        let start = select_start_position(options.grid_mode, &mut self.rng);
        let directions = HandDirections::for_continuity(options.prop_continuity, &mut self.rng);
        let turns = allocate_turns(
            options.length,
            options.level,
            options.turn_intensity,
            &mut self.rng,
        );
        let beats =
            build_freeform_sequence(&start, options.length, &directions, &turns, &mut self.rng)?;
        Ok(assemble(beats, start, options, false))
    }

    fn generate_circular(&mut self, options: &GenerationOptions) -> GenerationResult<Sequence> {
        let cap_type = options.cap_type.unwrap_or_default();
        let executor = CapExecutorSelector::get_executor(cap_type)?;
        let requested = options.slice_size.unwrap_or_default();
        let slice_size = executor.rule().effective_slice_size(requested);
        if slice_size != requested {
            tracing::debug!(
                "{} only supports {} slices, ignoring {}",
                cap_type,
                slice_size,
                requested
            );
        }

        let directions = HandDirections::for_continuity(options.prop_continuity, &mut self.rng);
        let start = select_start_position(options.grid_mode, &mut self.rng);
        let target_end = determine_end_position(cap_type, start.end_position, slice_size)?;
        let partial_length = (options.length / slice_size.slices()).max(1);
        tracing::debug!(
            "Circular {}: partial of {} beats from {} to {}",
            cap_type,
            partial_length,
            start.end_position,
            target_end
        );

        let turns = allocate_turns(
            partial_length,
            options.level,
            options.turn_intensity,
            &mut self.rng,
        );
        let partial = build_partial_sequence(
            &start,
            partial_length,
            target_end,
            &directions,
            &turns,
            &mut self.rng,
        )?;
        let completed = executor.execute_cap(&partial, slice_size)?;

        let mut sequence = assemble(completed, start, options, true);
        sequence.cap_type = Some(cap_type);
        Ok(sequence)
    }
}

/// Checks options before any generation work.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidOptions`] describing the first problem.
pub fn validate_options(options: &GenerationOptions) -> GenerationResult<()> {
    if options.length == 0 {
        return Err(GenerationError::InvalidOptions(
            "length must be at least 1".to_string(),
        ));
    }
    if !(1..=MAX_LEVEL).contains(&options.level) {
        return Err(GenerationError::InvalidOptions(format!(
            "level must be between 1 and {MAX_LEVEL}, got {}",
            options.level
        )));
    }
    if options.turn_intensity > MAX_TURN_INTENSITY {
        return Err(GenerationError::InvalidOptions(format!(
            "turn intensity must be at most {MAX_TURN_INTENSITY}, got {}",
            options.turn_intensity
        )));
    }
    Ok(())
}

/// Drops the start beat from `beats`, marks reversals and wraps the result.
fn assemble(
    beats: Vec<Beat>,
    start: Beat,
    options: &GenerationOptions,
    is_circular: bool,
) -> Sequence {
    let body = beats.get(1..).unwrap_or_default();
    Sequence {
        beats: process_reversals(body),
        starting_position_beat: start,
        grid_mode: options.grid_mode,
        prop_type: options.prop_type,
        level: options.level,
        cap_type: None,
        is_circular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CapType, SliceSize};

    #[test]
    fn test_invalid_options_rejected() {
        let mut generator = SequenceGenerator::seeded(1);
        for options in [
            GenerationOptions::freeform(0),
            GenerationOptions::freeform(8).with_difficulty(4, Turns::ZERO),
            GenerationOptions::freeform(8).with_difficulty(0, Turns::ZERO),
            GenerationOptions::freeform(8).with_difficulty(3, Turns::from_half_turns(7)),
        ] {
            let err = generator.generate_sequence(&options).unwrap_err();
            assert!(matches!(err, GenerationError::InvalidOptions(_)), "{err}");
        }
    }

    #[test]
    fn test_circular_halved_doubles_partial() {
        let mut generator = SequenceGenerator::seeded(5);
        let options = GenerationOptions::circular(8, CapType::StrictMirrored);
        let sequence = generator.generate_sequence(&options).unwrap();
        assert_eq!(sequence.len(), 8);
        assert!(sequence.is_circular);
        assert_eq!(sequence.cap_type, Some(CapType::StrictMirrored));
        assert!(sequence.is_continuous());
        assert!(sequence.is_closed());
    }

    #[test]
    fn test_circular_rounds_down_odd_lengths() {
        let mut generator = SequenceGenerator::seeded(6);
        let options = GenerationOptions::circular(7, CapType::RotatedSwapped);
        let sequence = generator.generate_sequence(&options).unwrap();
        assert_eq!(sequence.len(), 6);
    }

    #[test]
    fn test_short_circular_uses_one_beat_partial() {
        let mut generator = SequenceGenerator::seeded(8);
        let options = GenerationOptions::circular(1, CapType::StrictSwapped);
        let sequence = generator.generate_sequence(&options).unwrap();
        assert_eq!(sequence.len(), 2);
        assert!(sequence.is_closed());
    }

    #[test]
    fn test_quartered_rotation() {
        let mut generator = SequenceGenerator::seeded(12);
        let options = GenerationOptions::circular(16, CapType::StrictRotated)
            .with_slice_size(SliceSize::Quartered);
        let sequence = generator.generate_sequence(&options).unwrap();
        assert_eq!(sequence.len(), 16);
        assert!(sequence.is_closed());
    }

    #[test]
    fn test_freeform_length_and_numbering() {
        let mut generator = SequenceGenerator::seeded(3);
        let sequence = generator
            .generate_sequence(&GenerationOptions::freeform(10))
            .unwrap();
        assert_eq!(sequence.len(), 10);
        assert!(!sequence.is_circular);
        assert!(sequence.cap_type.is_none());
        assert!(sequence.is_continuous());
        for (index, beat) in sequence.beats.iter().enumerate() {
            assert_eq!(beat.beat_number, index + 1);
        }
    }
}
