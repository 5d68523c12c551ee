//! Reading documents and manifests from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::error::CliError;

/// Argument value meaning "read from stdin".
pub const STDIN_MARKER: &str = "-";

/// Read the whole of `source`, where `-` means stdin.
///
/// A missing file is a not-found error; other read failures keep their
/// I/O context.
pub fn read_source(source: &str) -> Result<String> {
    if source == STDIN_MARKER {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }

    let path = Path::new(source);
    if !path.exists() {
        return Err(CliError::not_found(anyhow!("File not found: {}", path.display())).into());
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
