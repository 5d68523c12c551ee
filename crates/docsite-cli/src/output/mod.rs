//! # Output Formatting
//!
//! Every command that produces a site writes it in one of three formats:
//!
//! - **Html**: standalone page from [`docsite_core::to_html`]
//! - **Json**: the manifest in its wire shape, suitable for `docsite render`
//! - **Text**: a colored outline of blocks and navigation for the terminal
//!
//! Output goes to stdout unless a file is given.

mod text;

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use docsite_core::{Manifest, Page, to_html};

pub use text::outline;

/// Output format options supported by the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Standalone HTML page (default)
    Html,
    /// Manifest JSON
    Json,
    /// Block and navigation outline
    Text,
}

/// Produce the output document for `manifest` in `format`.
pub fn format_site(manifest: &Manifest, year: i32, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Html => to_html(&Page::build(manifest, year))?,
        OutputFormat::Json => {
            let mut json = manifest.to_json_pretty()?;
            json.push('\n');
            json
        },
        OutputFormat::Text => outline(&Page::build(manifest, year)),
    })
}

/// Write `contents` to `path`, or to stdout when `path` is `None`.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote output");
        },
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r##"{
        "name": "Acme Robotics",
        "tagline": "Drones for Industry",
        "theme": {"primary": "#111", "secondary": "#222", "accent": "#f50", "fontStyle": "tech"},
        "sections": [{"type": "hero", "title": "Acme Robotics", "ctaText": "Get a Quote"}]
    }"##;

    #[test]
    fn test_json_output_round_trips() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();

        let json = format_site(&manifest, 2026, OutputFormat::Json).unwrap();

        assert_eq!(Manifest::from_json(&json).unwrap(), manifest);
        assert!(json.contains("\"ctaText\": \"Get a Quote\""));
    }

    #[test]
    fn test_html_output_is_a_document() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();

        let html = format_site(&manifest, 2026, OutputFormat::Html).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.html");

        write_output(Some(&path), "<html></html>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }
}
