//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use flowseq::models::{
    Beat, GridPosition, Location, MotionData, MotionType, RotationDirection, Turns,
};
use flowseq::services::derive_position;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the flowseq binary.
pub fn flowseq_bin() -> &'static str {
    env!("CARGO_BIN_EXE_flowseq")
}

/// Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(flowseq_bin());
    cmd.env("FLOWSEQ_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// A hand motion with zero turns.
pub fn motion(
    motion_type: MotionType,
    rotation_direction: RotationDirection,
    start: Location,
    end: Location,
) -> MotionData {
    MotionData::new(motion_type, rotation_direction, start, end)
}

/// A beat whose positions are derived from the hand locations.
pub fn beat(beat_number: usize, blue: MotionData, red: MotionData) -> Beat {
    let start = derive_position(blue.start_location, red.start_location)
        .expect("fixture start locations must name a position");
    let end = derive_position(blue.end_location, red.end_location)
        .expect("fixture end locations must name a position");
    Beat::new(beat_number, start, end, blue, red)
}

/// Both hands pro clockwise, one diamond step each.
pub fn clockwise_step(beat_number: usize, blue_from: Location, red_from: Location) -> Beat {
    beat(
        beat_number,
        motion(
            MotionType::Pro,
            RotationDirection::Clockwise,
            blue_from,
            next_clockwise(blue_from),
        ),
        motion(
            MotionType::Pro,
            RotationDirection::Clockwise,
            red_from,
            next_clockwise(red_from),
        ),
    )
    .with_letter("A")
}

fn next_clockwise(location: Location) -> Location {
    match location {
        Location::N => Location::E,
        Location::E => Location::S,
        Location::S => Location::W,
        Location::W => Location::N,
        Location::Ne => Location::Se,
        Location::Se => Location::Sw,
        Location::Sw => Location::Nw,
        Location::Nw => Location::Ne,
    }
}

/// Start beat followed by `steps` clockwise beats from alpha1.
///
/// alpha1 -> alpha3 -> alpha5 -> alpha7 -> alpha1 -> ...
pub fn alpha_clockwise_partial(steps: usize) -> Vec<Beat> {
    let mut beats = vec![Beat::starting_position(GridPosition::Alpha1)];
    let (mut blue, mut red) = GridPosition::Alpha1.hand_locations();
    for beat_number in 1..=steps {
        beats.push(clockwise_step(beat_number, blue, red));
        blue = next_clockwise(blue);
        red = next_clockwise(red);
    }
    beats
}

/// Two beats from alpha1 ending at alpha5 with different hand motions:
/// blue pro clockwise, red anti counter-clockwise.
pub fn swapped_partial() -> Vec<Beat> {
    vec![
        Beat::starting_position(GridPosition::Alpha1),
        beat(
            1,
            motion(MotionType::Pro, RotationDirection::Clockwise, Location::S, Location::W),
            motion(
                MotionType::Anti,
                RotationDirection::CounterClockwise,
                Location::N,
                Location::E,
            ),
        )
        .with_letter("B"),
        beat(
            2,
            motion(MotionType::Pro, RotationDirection::Clockwise, Location::W, Location::N),
            motion(
                MotionType::Anti,
                RotationDirection::CounterClockwise,
                Location::E,
                Location::S,
            ),
        )
        .with_letter("B"),
    ]
}

/// Start beat followed by `steps` clockwise beats from `start` where the
/// hands differ: blue pro clockwise with one turn, red anti counter-clockwise.
pub fn mixed_partial(start: GridPosition, steps: usize) -> Vec<Beat> {
    let mut beats = vec![Beat::starting_position(start)];
    let (mut blue, mut red) = start.hand_locations();
    for beat_number in 1..=steps {
        let blue_motion = motion(
            MotionType::Pro,
            RotationDirection::Clockwise,
            blue,
            next_clockwise(blue),
        )
        .with_turns(Turns::whole(1));
        let red_motion = motion(
            MotionType::Anti,
            RotationDirection::CounterClockwise,
            red,
            next_clockwise(red),
        );
        beats.push(beat(beat_number, blue_motion, red_motion).with_letter("D"));
        blue = next_clockwise(blue);
        red = next_clockwise(red);
    }
    beats
}

/// Writes beats as a JSON array into `dir/name`.
pub fn write_beats(dir: &Path, name: &str, beats: &[Beat]) -> PathBuf {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(beats).expect("beats serialize");
    fs::write(&path, json).expect("write beats fixture");
    path
}

/// Reads a JSON beat array.
pub fn read_beats(path: &Path) -> Vec<Beat> {
    let content = fs::read_to_string(path).expect("read beats");
    serde_json::from_str(&content).expect("parse beats")
}

/// Temporary directory for a test.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}
