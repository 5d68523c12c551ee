//! # Utility Functions and Helpers
//!
//! - [`logging`]: tracing subscriber setup and color control
//! - [`input`]: reading documents and manifests from files or stdin

pub mod input;
pub mod logging;

pub use input::read_source;
pub use logging::initialize_logging;
