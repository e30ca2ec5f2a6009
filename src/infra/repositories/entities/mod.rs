//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod author;
pub mod book;
pub mod course;
pub mod profile;
pub mod student;
pub mod student_course;
pub mod user;
