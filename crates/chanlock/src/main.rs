//! chanlock CLI binary.
//!
//! This binary lets operators:
//! - Preview how a restricted channel list is normalized
//! - Dry-run a post through the guard with the current settings

use chanlock::observability::{ObservabilityConfig, init_observability_with_config};
use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{CheckOptions, Cli, Commands, run_check, run_parse};

    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let mut observability = ObservabilityConfig::new().with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    init_observability_with_config(observability)?;

    match cli.command {
        Commands::Parse { names } => run_parse(&names),

        Commands::Check {
            channel,
            user,
            roles,
            message,
            config,
            format,
        } => {
            run_check(CheckOptions {
                channel,
                user,
                roles,
                message,
                config,
                format,
            })
            .await?;
        }
    }

    Ok(())
}
