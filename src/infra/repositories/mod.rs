//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod author_repository;
mod book_repository;
mod course_repository;
mod enrollment_repository;
mod profile_repository;
mod student_repository;
mod user_repository;

pub use author_repository::{AuthorRepository, AuthorStore};
pub use book_repository::{BookRepository, BookStore};
pub use course_repository::{CourseRepository, CourseStore};
pub use enrollment_repository::{EnrollmentRepository, EnrollmentStore};
pub use profile_repository::{ProfileRepository, ProfileStore};
pub use student_repository::{StudentRepository, StudentStore};
pub use user_repository::{UserRepository, UserStore};

// Mocks for service unit tests
#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
