//! Scansion CLI library
//!
//! This library provides the command-line interface for finding texts
//! that scan to a syllable pattern.

pub mod commands;
pub mod config;
pub mod counter_source;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
