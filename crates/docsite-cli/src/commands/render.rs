//! Render a saved manifest offline.

use anyhow::{Result, anyhow};
use docsite_core::Manifest;
use docsite_core::render::current_year;
use tracing::debug;

use crate::cli::RenderArgs;
use crate::error::{CliError, ErrorCategory};
use crate::output::{format_site, write_output};
use crate::utils::read_source;

/// Execute `docsite render`.
pub fn execute(args: &RenderArgs, year_override: Option<i32>) -> Result<()> {
    let text = read_source(&args.manifest)?;
    let manifest = Manifest::from_json(&text).map_err(|err| {
        CliError::new(
            ErrorCategory::Parse,
            anyhow!("Invalid manifest {}: {err}", args.manifest),
        )
    })?;
    debug!(
        name = %manifest.name,
        sections = manifest.sections.len(),
        "Loaded manifest"
    );

    let year = args.year.or(year_override).unwrap_or_else(current_year);
    let site = format_site(&manifest, year, args.format)?;
    write_output(args.output.as_deref(), &site)
}
