//! docsite CLI entry point.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match docsite_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(docsite_cli::report_error(&err)),
    }
}
