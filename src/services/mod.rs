//! Collaborator services used by the generator and the CAP engine.
//!
//! Each module covers one concern: positions, orientations, letters,
//! reversals, turns, start positions, candidate beats and partial sequence
//! construction.

pub mod candidates;
pub mod letters;
pub mod orientation;
pub mod partial;
pub mod positions;
pub mod reversals;
pub mod start_position;
pub mod turns;

// Re-export commonly used types and functions
pub use candidates::HandDirections;
pub use letters::{classify_letter, complementary_letter};
pub use orientation::{update_end_orientations, update_start_orientations};
pub use partial::build_partial_sequence;
pub use positions::derive_position;
pub use reversals::process_reversals;
pub use start_position::select_start_position;
pub use turns::{allocate_turns, TurnPlan};
