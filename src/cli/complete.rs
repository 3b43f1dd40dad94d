//! Complete command: closes a partial sequence with a CAP.

use crate::cap::CapExecutorSelector;
use crate::cli::common::{parse_arg, read_beats, to_json, write_file, CliError, CliResult};
use crate::models::{Beat, SliceSize};
use crate::services::process_reversals;
use clap::Args;
use std::path::PathBuf;

/// Complete a partial sequence into a circular one
#[derive(Debug, Clone, Args)]
pub struct CompleteArgs {
    /// JSON file holding the partial sequence (array of beats, start position first)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// CAP type to apply (e.g. STRICT_ROTATED or strict-rotated)
    #[arg(long, value_name = "NAME")]
    pub cap_type: String,

    /// Slice size: halved or quartered
    #[arg(long, value_name = "SIZE", default_value = "halved")]
    pub slice: String,

    /// Write the completed beats as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the completed beats as JSON
    #[arg(long)]
    pub json: bool,
}

impl CompleteArgs {
    /// Execute the complete command
    pub fn execute(&self) -> CliResult<()> {
        let slice_size: SliceSize = parse_arg(&self.slice)?;
        let executor = CapExecutorSelector::resolve(&self.cap_type)?;
        let partial = read_beats(&self.input)?;

        let completed = executor.execute_cap(&partial, slice_size)?;
        let completed = mark_reversals(completed)?;

        if let Some(path) = &self.output {
            write_file(path, &to_json(&completed)?)?;
            println!(
                "✓ Completed {} beats into {} with {}",
                partial.len() - 1,
                completed.len() - 1,
                executor.cap_type()
            );
            println!("  Output: {}", path.display());
        } else if self.json {
            println!("{}", to_json(&completed)?);
        } else {
            println!(
                "✓ Completed {} beats into {} with {}",
                partial.len() - 1,
                completed.len() - 1,
                executor.cap_type()
            );
            for beat in &completed[1..] {
                println!(
                    "  {:>3}  {:<3} {} -> {}",
                    beat.beat_number,
                    beat.letter.as_deref().unwrap_or("-"),
                    beat.start_position,
                    beat.end_position
                );
            }
        }

        Ok(())
    }
}

/// Runs reversal detection over everything after the start beat.
fn mark_reversals(beats: Vec<Beat>) -> CliResult<Vec<Beat>> {
    let mut beats = beats.into_iter();
    let start = beats
        .next()
        .ok_or_else(|| CliError::validation("Completed sequence is empty"))?;
    let rest: Vec<Beat> = beats.collect();
    Ok(std::iter::once(start)
        .chain(process_reversals(&rest))
        .collect())
}
