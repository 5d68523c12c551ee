//! Gemini integration for manifest generation.
//!
//! [`GeminiClient`] implements [`ManifestService`] over the Generative Language
//! REST API. It sends exactly one `generateContent` request per call with the
//! response schema attached and hands back the reply text untouched; parsing
//! is left to [`ManifestRequester`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docsite_core::gemini::GeminiClient;
//! use docsite_core::generate::ManifestRequester;
//! use docsite_core::Config;
//!
//! # async fn example() -> docsite_core::Result<()> {
//! let config = Config::load(None)?;
//! let client = GeminiClient::new(&config.service)?;
//! let requester = ManifestRequester::new(client);
//!
//! let manifest = requester
//!     .request_manifest("Acme Robotics builds industrial drones.")
//!     .await?;
//! println!("{} - {}", manifest.name, manifest.tagline);
//! # Ok(())
//! # }
//! ```
//!
//! [`ManifestService`]: crate::generate::ManifestService
//! [`ManifestRequester`]: crate::generate::ManifestRequester

mod client;

pub use client::GeminiClient;
