//! Circular Arrangement Pattern (CAP) completion engine.
//!
//! A CAP takes a partial sequence and generates the remainder so the whole
//! sequence closes into a symmetric loop. Every CAP type is a row in the
//! [`rules::CAP_RULES`] table driving the single [`CapExecutor`].

pub mod error;
pub mod executor;
pub mod rules;
pub mod selector;
pub mod tables;
pub mod type_service;
pub mod validation;

pub use error::{CapError, CapResult};
pub use executor::CapExecutor;
pub use rules::{CapRule, LetterRule};
pub use selector::CapExecutorSelector;
pub use type_service::CapTypeService;
pub use validation::{determine_end_position, is_valid_pair, validation_set};
