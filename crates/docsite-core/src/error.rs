//! Error types and handling for docsite-core operations.
//!
//! Every fallible operation in this crate returns [`Result<T, Error>`]. The
//! variants follow the generation pipeline:
//!
//! - **Input errors**: the document text was empty; no request is made
//! - **Transport errors**: the generation service could not be reached, refused
//!   the request, or answered without any text
//! - **Parse errors**: the service answered, but not with a valid manifest
//! - **Ambient errors**: configuration and I/O failures around the pipeline
//!
//! ## User-facing messages
//!
//! Callers that show errors to people should not branch on the variant. All
//! generation failures collapse into one instruction to check the input and
//! try again:
//!
//! ```rust
//! use docsite_core::Error;
//!
//! let err = Error::Parse("missing field `theme`".to_string());
//! assert_eq!(err.category(), "parse");
//! assert!(err.user_message().contains("try again"));
//! ```

use thiserror::Error;

/// Message shown when the document input is blank.
pub const EMPTY_INPUT_MESSAGE: &str = "Please paste the document content first.";

/// Message shown for every failed generation attempt.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate site. Please check your document content and try again.";

/// The main error type for docsite-core operations.
///
/// ## Display vs Debug
///
/// - `Display` carries the technical detail (useful in logs)
/// - [`Error::user_message`] is what an end user should see
#[derive(Error, Debug)]
pub enum Error {
    /// Document text was empty or whitespace only.
    ///
    /// Raised before any request is built, so the generation service is never
    /// contacted.
    #[error("Document text is empty")]
    EmptyInput,

    /// The HTTP exchange with the generation service failed.
    ///
    /// Covers DNS, connection, TLS and timeout failures. The underlying
    /// `reqwest::Error` is preserved.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The generation service answered with a non-success status.
    ///
    /// ## Common Causes
    ///
    /// - Missing or revoked API key (401/403)
    /// - Quota exhaustion (429)
    /// - Service-side failures (5xx)
    #[error("Generation service returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the service's error body.
        message: String,
    },

    /// The generation service answered successfully but without any text.
    #[error("No response from the generation service")]
    EmptyResponse,

    /// The reply could not be read as a manifest.
    ///
    /// ## Common Causes
    ///
    /// - Reply is not JSON
    /// - A required field (`name`, `tagline`, `theme`, `sections`, `type`) is missing
    /// - A theme color is not a hex color string
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl Error {
    /// Check if the error is transient.
    ///
    /// Nothing in this crate retries; the flag lets a caller decide how to
    /// word its prompt. Connection failures, timeouts, rate limiting, server
    /// errors and empty replies are considered transient.
    ///
    /// ```rust
    /// use docsite_core::Error;
    ///
    /// assert!(Error::Api { status: 503, message: "overloaded".into() }.is_recoverable());
    /// assert!(!Error::Api { status: 401, message: "bad key".into() }.is_recoverable());
    /// assert!(!Error::EmptyInput.is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::EmptyResponse => true,
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// - `"input"` - empty document text
    /// - `"network"` - transport failures
    /// - `"api"` - service refused the request or answered without text
    /// - `"parse"` - reply is not a valid manifest
    /// - `"config"` - configuration problems
    /// - `"io"` - file system operations
    /// - `"template"` - page template rendering
    /// - `"other"` - uncategorized
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::EmptyInput => "input",
            Self::Network(_) => "network",
            Self::Api { .. } | Self::EmptyResponse => "api",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Template(_) => "template",
            Self::Other(_) => "other",
        }
    }

    /// Whether this error came out of a generation attempt (transport or parse).
    #[must_use]
    pub const fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Api { .. } | Self::EmptyResponse | Self::Parse(_)
        )
    }

    /// The message to show an end user.
    ///
    /// Empty input gets its own prompt; every other failure collapses into
    /// [`GENERATION_FAILED_MESSAGE`].
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => EMPTY_INPUT_MESSAGE,
            _ => GENERATION_FAILED_MESSAGE,
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
