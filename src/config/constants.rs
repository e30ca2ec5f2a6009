//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Prefix shared by every entity route
pub const API_PREFIX: &str = "/api";

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (local SQLite file, created on first use)
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/relations.db?mode=rwc";

/// Default upper bound for pooled database connections
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Entity names (used in error messages)
// =============================================================================

pub const ENTITY_USER: &str = "User";
pub const ENTITY_PROFILE: &str = "Profile";
pub const ENTITY_AUTHOR: &str = "Author";
pub const ENTITY_BOOK: &str = "Book";
pub const ENTITY_STUDENT: &str = "Student";
pub const ENTITY_COURSE: &str = "Course";
