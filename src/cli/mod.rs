//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server (migrations are applied on connect)

pub mod args;

pub use args::{Cli, Commands};
