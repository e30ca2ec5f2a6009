//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Repositories (one per table, plus the enrollment join table)
//! - Unit of Work as the single repository hub handed to services

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    AuthorRepository, BookRepository, CourseRepository, EnrollmentRepository, ProfileRepository,
    StudentRepository, UserRepository,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(test)]
pub use repositories::{
    MockAuthorRepository, MockBookRepository, MockCourseRepository, MockEnrollmentRepository,
    MockProfileRepository, MockStudentRepository, MockUserRepository,
};
