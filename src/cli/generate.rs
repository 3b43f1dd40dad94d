//! Generate command for sequences.

use crate::cli::common::{parse_arg, to_json, write_file, CliResult};
use crate::config::Config;
use crate::generator::SequenceGenerator;
use crate::models::{GenerationMode, GenerationOptions, Sequence};
use clap::Args;
use std::path::PathBuf;

/// Generate a freeform or circular sequence
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Number of beats (default from config)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Grid mode: diamond or box
    #[arg(long, value_name = "MODE")]
    pub grid: Option<String>,

    /// Difficulty level: 1 (no turns), 2 (whole turns), 3 (half turns)
    #[arg(long, value_name = "LEVEL")]
    pub level: Option<u8>,

    /// Generation mode: freeform or circular
    #[arg(short, long, value_name = "MODE", default_value = "freeform")]
    pub mode: String,

    /// Prop continuity: continuous or random
    #[arg(long, value_name = "CONTINUITY")]
    pub continuity: Option<String>,

    /// Maximum turns per motion, in steps of 0.5
    #[arg(long, value_name = "TURNS")]
    pub intensity: Option<String>,

    /// CAP type for circular mode (e.g. STRICT_MIRRORED or strict-mirrored)
    #[arg(long, value_name = "NAME")]
    pub cap_type: Option<String>,

    /// Slice size for circular mode: halved or quartered
    #[arg(long, value_name = "SIZE")]
    pub slice: Option<String>,

    /// Prop type (staff, club, fan, ...)
    #[arg(long, value_name = "PROP")]
    pub prop: Option<String>,

    /// Seed for reproducible output
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Write the sequence as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the sequence as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let options = self.options()?;

        let sequence = match self.seed {
            Some(seed) => SequenceGenerator::seeded(seed).generate_sequence(&options)?,
            None => SequenceGenerator::from_os_rng().generate_sequence(&options)?,
        };

        if let Some(path) = &self.output {
            write_file(path, &to_json(&sequence)?)?;
            println!("✓ Wrote {} beats to {}", sequence.len(), path.display());
        } else if self.json {
            println!("{}", to_json(&sequence)?);
        } else {
            print_sequence(&sequence);
        }

        Ok(())
    }

    /// Generation options: config defaults overridden by arguments.
    fn options(&self) -> CliResult<GenerationOptions> {
        let mode: GenerationMode = parse_arg(&self.mode)?;
        let config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load configuration, using defaults: {e:#}");
            Config::default()
        });
        let mut options = config.generation.to_options(mode);

        if let Some(length) = self.length {
            options.length = length;
        }
        if let Some(grid) = &self.grid {
            options.grid_mode = parse_arg(grid)?;
        }
        if let Some(level) = self.level {
            options.level = level;
        }
        if let Some(continuity) = &self.continuity {
            options.prop_continuity = parse_arg(continuity)?;
        }
        if let Some(intensity) = &self.intensity {
            options.turn_intensity = parse_arg(intensity)?;
        }
        if let Some(prop) = &self.prop {
            options.prop_type = parse_arg(prop)?;
        }
        if let Some(cap_type) = &self.cap_type {
            options.cap_type = Some(parse_arg(cap_type)?);
        }
        if let Some(slice) = &self.slice {
            options.slice_size = Some(parse_arg(slice)?);
        }

        Ok(options)
    }
}

fn print_sequence(sequence: &Sequence) {
    let kind = match sequence.cap_type {
        Some(cap_type) => format!("circular ({cap_type})"),
        None => "freeform".to_string(),
    };
    println!(
        "✓ Generated {} sequence of {} beats on the {} grid",
        kind,
        sequence.len(),
        sequence.grid_mode
    );
    println!("  Word: {}", sequence.word());
    println!("  Start: {}", sequence.starting_position_beat.end_position);
    for beat in &sequence.beats {
        println!(
            "  {:>3}  {:<3} {} -> {}",
            beat.beat_number,
            beat.letter.as_deref().unwrap_or("-"),
            beat.start_position,
            beat.end_position
        );
    }
}
