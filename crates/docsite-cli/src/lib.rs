//! docsite CLI - Turn a document into a single-page website preview
//!
//! The binary in `main.rs` is a thin wrapper over [`run`]; everything else
//! lives here so integration tests and the binary share one code path.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use docsite_core::Config;
use tracing::debug;

mod cli;
mod commands;
pub mod error;
mod output;
mod utils;

use cli::{Cli, Commands};
use error::{CliError, exit_code_from_error, user_facing_message};
use utils::initialize_logging;

/// Execute the docsite CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns an error if logging, configuration, or the command fails. The
/// error carries a [`CliError`] category where one is known.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = Config::load(cli.config.as_deref()).map_err(CliError::from_core)?;
    debug!(
        model = %config.service.model,
        base_url = %config.service.base_url,
        has_key = config.service.api_key.is_some(),
        "Resolved configuration"
    );

    execute_command(cli, config).await
}

async fn execute_command(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => commands::generate_site(args, config).await,
        Commands::Render(args) => commands::render_manifest(&args, config.render.year),
        Commands::Schema => commands::print_schema(),
        Commands::Config => commands::show_config(&config),
    }
}

/// Print `err` for a person and return the process exit code.
pub fn report_error(err: &anyhow::Error) -> u8 {
    let code = exit_code_from_error(err);
    debug!(code, error = ?err, "Command failed");
    eprintln!("{} {}", "error:".red().bold(), user_facing_message(err));
    code
}
