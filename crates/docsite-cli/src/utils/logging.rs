//! Logging initialization and configuration.
//!
//! This module handles setting up the tracing subscriber and color control
//! based on CLI flags and environment variables.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, Commands};
use crate::output::OutputFormat;

/// Pick the log level for the parsed command line.
///
/// Machine-readable output (JSON on stdout) drops to errors only unless
/// `--verbose` was given.
pub fn log_level(cli: &Cli) -> Level {
    if cli.verbose {
        return Level::DEBUG;
    }
    if cli.quiet || emits_json(cli) {
        return Level::ERROR;
    }
    Level::WARN
}

fn emits_json(cli: &Cli) -> bool {
    match &cli.command {
        Commands::Generate(args) => args.format == OutputFormat::Json,
        Commands::Render(args) => args.format == OutputFormat::Json,
        Commands::Schema => true,
        Commands::Config => false,
    }
}

/// Initialize the logging subsystem based on CLI flags.
///
/// Logs always go to stderr so stdout stays clean for the generated site.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = log_level(cli);

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    if cli.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    // Color control: disable when requested, NO_COLOR is set, or for machine output
    let env_no_color = std::env::var("NO_COLOR").ok().is_some();
    if cli.no_color || env_no_color || emits_json(cli) {
        color_control::set_override(false);
    }
    Ok(())
}
