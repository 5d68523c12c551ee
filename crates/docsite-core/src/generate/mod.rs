//! Manifest generation: turning document text into a [`Manifest`].
//!
//! The pipeline is one prompt, one request, one parse:
//!
//! 1. [`build_prompt`] embeds the document verbatim in a fixed instruction
//! 2. a [`ManifestService`] sends it with [`response_schema`] and returns text
//! 3. [`Manifest::from_json`] validates that text
//!
//! There is no retry and no caching. Submitting the same text twice makes two
//! independent calls and may produce two different manifests.
//!
//! ## Example
//!
//! ```rust
//! use docsite_core::generate::{ManifestRequester, ManifestService};
//! use docsite_core::Result;
//!
//! struct Canned;
//!
//! #[async_trait::async_trait]
//! impl ManifestService for Canned {
//!     async fn generate(&self, _prompt: &str, _schema: &serde_json::Value) -> Result<String> {
//!         Ok(r##"{"name":"Acme","tagline":"Drones","theme":{"primary":"#111","secondary":"#222","accent":"#f50","fontStyle":"tech"},"sections":[]}"##.to_string())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let requester = ManifestRequester::new(Canned);
//! let manifest = requester.request_manifest("Acme builds drones.").await?;
//! assert_eq!(manifest.name, "Acme");
//! # Ok(())
//! # }
//! ```
//!
//! [`Manifest`]: crate::Manifest
//! [`Manifest::from_json`]: crate::Manifest::from_json
//! [`response_schema`]: crate::schema::response_schema

mod prompt;
mod requester;

pub use prompt::build_prompt;
pub use requester::{ManifestRequester, ManifestService};
