//! # docsite-core
//!
//! Core functionality for docsite - turn a free-form document into a themed,
//! single-page website preview.
//!
//! The crate holds the contract between two halves:
//!
//! - **Generation**: a schema-bound request to a generative model that returns
//!   a structured site [`Manifest`]
//! - **Rendering**: a pure projection of that manifest into visual blocks and,
//!   from there, a standalone HTML document
//!
//! ## Architecture
//!
//! - **Types**: the manifest data model and its wire format
//! - **Schema**: the structured-output schema sent with every request
//! - **Generate**: prompt construction and the [`ManifestRequester`]
//! - **Gemini**: the HTTP client behind the [`ManifestService`] seam
//! - **Render**: the per-section dispatch table, navigation and [`Page`]
//! - **HTML**: the standalone document writer
//! - **State**: the single-owner [`Studio`] session cell
//! - **Configuration** and **Error Handling**: ambient support for the above
//!
//! ## Quick Start
//!
//! ```rust
//! use docsite_core::{Manifest, Page, to_html};
//!
//! let manifest = Manifest::from_json(r##"{
//!   "name": "Acme Robotics",
//!   "tagline": "Drones for Industry",
//!   "theme": {"primary": "#112233", "secondary": "#445566", "accent": "#FF5500", "fontStyle": "tech"},
//!   "sections": [{"type": "hero", "title": "Acme Robotics", "ctaText": "Get a Quote"}]
//! }"##)?;
//!
//! let page = Page::build(&manifest, 2026);
//! let html = to_html(&page)?;
//! assert!(html.contains("Get a Quote"));
//! # Ok::<(), docsite_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`]. Section rendering never
//! fails; sections it does not recognize are skipped.
//!
//! ```rust
//! use docsite_core::{Error, Manifest};
//!
//! match Manifest::from_json("not json") {
//!     Ok(_) => unreachable!(),
//!     Err(Error::Parse(msg)) => eprintln!("Parse error: {msg}"),
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```

/// Configuration loading and resolution
pub mod config;
/// Error types and result aliases
pub mod error;
/// Generation service client over the Gemini REST API
pub mod gemini;
/// Prompt construction and the manifest requester
pub mod generate;
/// Standalone HTML document writer
pub mod html;
/// Section renderer and page assembly
pub mod render;
/// Structured-output response schema
pub mod schema;
/// Single-owner session state
pub mod state;
/// Manifest data model
pub mod types;

// Re-export commonly used types
pub use config::{Config, RenderConfig, ServiceConfig};
pub use error::{Error, Result};
pub use gemini::GeminiClient;
pub use generate::{ManifestRequester, ManifestService, build_prompt};
pub use html::to_html;
pub use render::{Block, BlockBody, NavLink, Page, navigation, render};
pub use schema::response_schema;
pub use state::{PendingRequest, Studio};
pub use types::*;
