//! Command implementations for the docsite CLI
//!
//! Each command lives in its own submodule.

mod config;
mod generate;
mod render;
mod schema;

pub use config::execute as show_config;
pub use generate::execute as generate_site;
pub use render::execute as render_manifest;
pub use schema::execute as print_schema;
