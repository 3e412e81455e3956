//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the chanlock binary.

mod check;
mod commands;
mod parse;

pub use check::{CheckOptions, run_check};
pub use commands::{Cli, Commands, OutputFormat};
pub use parse::run_parse;
