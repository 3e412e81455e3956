//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// chanlock - restricted-channel post guard
#[derive(Parser, Debug)]
#[command(name = "chanlock")]
#[command(about = "Inspect and exercise the restricted-channel post guard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show how a restricted channel list is normalized
    Parse {
        /// Comma-separated channel names, as entered in the plugin settings
        names: String,
    },

    /// Run a single post through the guard against an in-memory host
    Check {
        /// Name of the channel being posted to
        #[arg(long)]
        channel: String,

        /// Username of the poster
        #[arg(long)]
        user: String,

        /// Poster's channel role string; omit to simulate a non-member
        #[arg(long)]
        roles: Option<String>,

        /// Message body
        #[arg(long, default_value = "")]
        message: String,

        /// Settings file; defaults to the layered chanlock.toml lookup
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
