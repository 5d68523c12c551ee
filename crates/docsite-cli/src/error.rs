//! CLI error handling with semantic exit codes.
//!
//! Errors are categorized so scripts can react to the kind of failure without
//! parsing messages.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments or empty document |
//! | 3 | `NotFound` | Input or manifest file not found |
//! | 4 | `Parse` | Reply or manifest file is not a valid manifest |
//! | 5 | `Network` | Service unreachable or refused the request |
//! | 6 | `Config` | Configuration invalid or credential missing |
//!
//! # Usage
//!
//! ```bash
//! docsite generate pitch.md -o site.html
//! case $? in
//!     0) echo "Done" ;;
//!     5) echo "Service problem, try again later" ;;
//!     *) echo "Other error" ;;
//! esac
//! ```

use std::fmt;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments or empty document (exit code 2).
    Usage = 2,

    /// Requested file not found (exit code 3).
    NotFound = 3,

    /// Manifest could not be parsed or validated (exit code 4).
    Parse = 4,

    /// Transport failure talking to the generation service (exit code 5).
    ///
    /// Covers connection failures, timeouts, non-success statuses and empty
    /// replies.
    Network = 5,

    /// Configuration invalid or credential missing (exit code 6).
    Config = 6,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
            Self::Parse => "parse error",
            Self::Network => "network error",
            Self::Config => "configuration error",
        }
    }

    /// Map a core error onto a category.
    #[must_use]
    pub fn from_core(err: &docsite_core::Error) -> Self {
        use docsite_core::Error;

        match err {
            Error::EmptyInput => Self::Usage,
            Error::Network(_) | Error::Api { .. } | Error::EmptyResponse => Self::Network,
            Error::Parse(_) => Self::Parse,
            Error::Config(_) => Self::Config,
            Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound => Self::NotFound,
            Error::Io(_) | Error::Template(_) | Error::Other(_) => Self::Internal,
        }
    }

    /// Infer the error category from an error message.
    ///
    /// Fallback for errors that were not categorized where they were raised.
    #[must_use]
    pub fn infer_from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("network")
            || msg_lower.contains("connection")
            || msg_lower.contains("timed out")
        {
            return Self::Network;
        }

        if msg_lower.contains("not found") || msg_lower.contains("no such") {
            return Self::NotFound;
        }

        if msg_lower.contains("parse error") || msg_lower.contains("not valid") {
            return Self::Parse;
        }

        if msg_lower.contains("config") || msg_lower.contains("api key") {
            return Self::Config;
        }

        Self::Internal
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// Wraps an `anyhow::Error` with an `ErrorCategory` to enable proper
/// exit codes while preserving full error context and chains.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Wrap a core error, taking the category from its variant.
    pub fn from_core(err: docsite_core::Error) -> Self {
        Self::new(ErrorCategory::from_core(&err), err)
    }

    /// Create a not-found error.
    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// A `CliError` anywhere in the chain wins, then a core error, then the
/// message heuristic.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }

    if let Some(core) = core_error(err) {
        return ErrorCategory::from_core(core).exit_code();
    }

    ErrorCategory::infer_from_message(&err.to_string()).exit_code()
}

/// First core error in the chain, if any.
pub fn core_error(err: &anyhow::Error) -> Option<&docsite_core::Error> {
    err.chain()
        .find_map(|e| e.downcast_ref::<docsite_core::Error>())
}

/// Text to show the user for `err`.
///
/// Generation failures collapse into the single retry message; everything
/// else shows the error chain.
pub fn user_facing_message(err: &anyhow::Error) -> String {
    match core_error(err) {
        Some(core @ docsite_core::Error::EmptyInput) => core.user_message().to_string(),
        Some(core) if core.is_generation_failure() => core.user_message().to_string(),
        _ => format!("{err:#}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use docsite_core::Error;
    use docsite_core::error::{EMPTY_INPUT_MESSAGE, GENERATION_FAILED_MESSAGE};

    #[test]
    fn test_exit_codes() {
        assert_eq!(ErrorCategory::Internal.exit_code(), 1);
        assert_eq!(ErrorCategory::Usage.exit_code(), 2);
        assert_eq!(ErrorCategory::NotFound.exit_code(), 3);
        assert_eq!(ErrorCategory::Parse.exit_code(), 4);
        assert_eq!(ErrorCategory::Network.exit_code(), 5);
        assert_eq!(ErrorCategory::Config.exit_code(), 6);
    }

    #[test]
    fn test_core_error_categories() {
        assert_eq!(
            ErrorCategory::from_core(&Error::EmptyInput),
            ErrorCategory::Usage
        );
        assert_eq!(
            ErrorCategory::from_core(&Error::Api {
                status: 503,
                message: String::new()
            }),
            ErrorCategory::Network
        );
        assert_eq!(
            ErrorCategory::from_core(&Error::EmptyResponse),
            ErrorCategory::Network
        );
        assert_eq!(
            ErrorCategory::from_core(&Error::Parse(String::new())),
            ErrorCategory::Parse
        );
        assert_eq!(
            ErrorCategory::from_core(&Error::Config(String::new())),
            ErrorCategory::Config
        );
        assert_eq!(
            ErrorCategory::from_core(&Error::Io(std::io::Error::from(
                std::io::ErrorKind::NotFound
            ))),
            ErrorCategory::NotFound
        );
    }

    #[test]
    fn test_exit_code_prefers_cli_error() {
        let err = anyhow::Error::new(CliError::not_found(anyhow!("Input file not found")));
        assert_eq!(exit_code_from_error(&err), 3);
    }

    #[test]
    fn test_exit_code_finds_core_error_under_context() {
        let err = anyhow::Error::new(Error::Parse("bad".to_string())).context("rendering manifest");
        assert_eq!(exit_code_from_error(&err), 4);
    }

    #[test]
    fn test_exit_code_falls_back_to_message() {
        assert_eq!(exit_code_from_error(&anyhow!("connection reset")), 5);
        assert_eq!(exit_code_from_error(&anyhow!("something odd")), 1);
    }

    #[test]
    fn test_generation_failures_collapse() {
        let err = anyhow::Error::new(CliError::from_core(Error::Api {
            status: 500,
            message: "boom".to_string(),
        }));
        assert_eq!(user_facing_message(&err), GENERATION_FAILED_MESSAGE);

        let err = anyhow::Error::new(CliError::from_core(Error::EmptyInput));
        assert_eq!(user_facing_message(&err), EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn test_config_errors_keep_detail() {
        let err = anyhow::Error::new(CliError::from_core(Error::Config(
            "No API key configured".to_string(),
        )));
        assert!(user_facing_message(&err).contains("No API key configured"));
    }
}
