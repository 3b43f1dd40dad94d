//! flowseq library
//!
//! This library provides the data model, the Circular Arrangement Pattern
//! (CAP) completion engine, the collaborator services and the sequence
//! generator behind the `flowseq` command-line tool.

// Module declarations
pub mod cap;
pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod models;
pub mod services;
