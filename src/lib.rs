//! Relations API - REST backend over related entities
//!
//! CRUD for users, profiles, authors, books, students and courses, with
//! one-to-one (user/profile), one-to-many (author/books) and many-to-many
//! (students/courses) relations.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and request payloads
//! - **services**: Application use cases and business rules
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (migrations run on startup)
//! cargo run -- serve --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infra::Database;
