//! Print the response schema.

use anyhow::Result;
use docsite_core::response_schema;

use crate::output::write_output;

/// Execute `docsite schema`.
pub fn execute() -> Result<()> {
    let mut json = serde_json::to_string_pretty(&response_schema())?;
    json.push('\n');
    write_output(None, &json)
}
