//! Show the resolved configuration.

use anyhow::Result;
use docsite_core::Config;

use crate::error::CliError;
use crate::output::write_output;

/// Execute `docsite config`.
pub fn execute(config: &Config) -> Result<()> {
    let toml = config.to_redacted_toml().map_err(CliError::from_core)?;
    write_output(None, &toml)
}
