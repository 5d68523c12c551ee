//! Configuration management for docsite.
//!
//! Settings are resolved in layers, later layers winning:
//!
//! 1. **Defaults**: see [`Config::default`]
//! 2. **Config file**: an explicit path, or `config.toml` in the platform config
//!    directory (see [`Config::default_path`])
//! 3. **Environment variables**: `DOCSITE_API_KEY` (falling back to
//!    `GEMINI_API_KEY`), `DOCSITE_MODEL`, `DOCSITE_BASE_URL`
//!
//! Command-line flags are applied on top by the CLI.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [service]
//! base_url = "https://generativelanguage.googleapis.com"
//! model = "gemini-3-pro-preview"
//! thinking_budget = 15000
//! timeout_secs = 120
//!
//! [render]
//! year = 2025
//! ```
//!
//! ```rust
//! use docsite_core::Config;
//!
//! let config: Config = toml::from_str("[service]\nmodel = \"gemini-2.5-flash\"\n")?;
//! assert_eq!(config.service.model, "gemini-2.5-flash");
//! assert_eq!(config.service.timeout_secs, 120);
//! # Ok::<(), toml::de::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default generation service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
/// Default reasoning budget passed through to the model.
pub const DEFAULT_THINKING_BUDGET: u32 = 15_000;
/// Default transport timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation service settings
    pub service: ServiceConfig,
    /// Rendering settings
    pub render: RenderConfig,
}

/// Settings for the generation service client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the Generative Language API.
    pub base_url: String,

    /// Model identifier used in the request path.
    pub model: String,

    /// Reasoning budget forwarded to the model.
    ///
    /// Opaque to docsite. `None` or `0` omits the setting from the request;
    /// `0` is how a config file switches it off.
    pub thinking_budget: Option<u32>,

    /// Transport timeout for the single request, in seconds.
    pub timeout_secs: u64,

    /// Service credential. Usually supplied through the environment instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            thinking_budget: Some(DEFAULT_THINKING_BUDGET),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

/// Settings for page rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fixed copyright year for the footer. Uses the current year when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// yields defaults. Environment overrides are applied afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config {}: {e}", path.display()))
        })
    }

    /// Platform config file location, e.g. `~/.config/docsite/config.toml` on Linux.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "outfitter", "docsite")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Apply environment overrides through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("DOCSITE_API_KEY").or_else(|| get("GEMINI_API_KEY")) {
            self.service.api_key = Some(key);
        }
        if let Some(model) = get("DOCSITE_MODEL") {
            self.service.model = model;
        }
        if let Some(url) = get("DOCSITE_BASE_URL") {
            self.service.base_url = url;
        }
    }

    /// Render as TOML with the credential masked.
    pub fn to_redacted_toml(&self) -> Result<String> {
        let mut shown = self.clone();
        if shown.service.api_key.is_some() {
            shown.service.api_key = Some("********".to_string());
        }
        Ok(toml::to_string_pretty(&shown)?)
    }
}
