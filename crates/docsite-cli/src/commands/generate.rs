//! Generate a site from a document.

use anyhow::{Result, anyhow};
use docsite_core::render::current_year;
use docsite_core::{Config, GeminiClient, ManifestRequester, Studio};
use tracing::info;

use crate::cli::GenerateArgs;
use crate::error::{CliError, ErrorCategory};
use crate::output::{format_site, write_output};
use crate::utils::read_source;

/// Execute `docsite generate`.
///
/// Reads the document, makes exactly one service request, then writes the
/// rendered site (and optionally the manifest) out.
pub async fn execute(args: GenerateArgs, mut config: Config) -> Result<()> {
    let mut studio = Studio::new();
    studio.set_input(read_source(&args.input)?);

    // Blank input is rejected before a client (and its credential) is needed.
    let ticket = studio
        .begin()
        .map_err(CliError::from_core)?
        .ok_or_else(|| {
            CliError::new(
                ErrorCategory::Internal,
                anyhow!("Request already in progress"),
            )
        })?;

    if let Some(model) = args.model {
        config.service.model = model;
    }
    let client = GeminiClient::new(&config.service).map_err(CliError::from_core)?;
    let requester = ManifestRequester::new(client);

    let result = requester.request_manifest(ticket.text()).await;
    let manifest = studio
        .finish(ticket, result)
        .map_err(CliError::from_core)?;

    if let Some(path) = &args.manifest_out {
        let mut json = manifest.to_json_pretty().map_err(CliError::from_core)?;
        json.push('\n');
        write_output(Some(path), &json)?;
        info!(path = %path.display(), "Saved manifest");
    }

    let year = args
        .year
        .or(config.render.year)
        .unwrap_or_else(current_year);
    let site = format_site(&manifest, year, args.format)?;
    write_output(args.output.as_deref(), &site)
}
