//! # CLI Structure and Argument Parsing
//!
//! This module defines the command-line interface for `docsite`. The CLI is
//! built using `clap` with derive macros for help generation and validation.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Generate a site from a document
//! docsite generate pitch.md -o site.html
//! cat pitch.md | docsite generate - --format json > manifest.json
//!
//! # Re-render a saved manifest offline
//! docsite render manifest.json -o site.html
//! docsite render manifest.json --format text
//!
//! # Inspect the wire contract and settings
//! docsite schema
//! docsite config
//! ```
//!
//! ## Output Formats
//!
//! - **html**: standalone site preview (default)
//! - **json**: the manifest in its wire shape
//! - **text**: an outline of the rendered blocks and navigation

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Main CLI structure for the `docsite` command
#[derive(Parser, Clone, Debug)]
#[command(name = "docsite")]
#[command(version)]
#[command(about = "docsite - Turn a document into a single-page website preview", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Emit log lines as JSON on stderr
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,

    /// Config file to use instead of the platform default
    #[arg(long, global = true, env = "DOCSITE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Generate a site manifest from a document and render it
    Generate(GenerateArgs),

    /// Render a saved manifest without contacting the service
    Render(RenderArgs),

    /// Print the structured-output schema sent with every request
    Schema,

    /// Print the resolved configuration (credential redacted)
    Config,
}

/// Arguments for `docsite generate`
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Document to read, or `-` for stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Also save the generated manifest as JSON
    #[arg(long, value_name = "FILE")]
    pub manifest_out: Option<PathBuf>,

    /// Model identifier (overrides config and `DOCSITE_MODEL`)
    #[arg(long)]
    pub model: Option<String>,

    /// Copyright year for the footer
    #[arg(long)]
    pub year: Option<i32>,
}

/// Arguments for `docsite render`
#[derive(Args, Clone, Debug)]
pub struct RenderArgs {
    /// Manifest JSON file, or `-` for stdin
    #[arg(value_name = "MANIFEST")]
    pub manifest: String,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Copyright year for the footer
    #[arg(long)]
    pub year: Option<i32>,
}
