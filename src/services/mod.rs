//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services reach their repositories through the Unit of Work.

mod author_service;
mod book_service;
pub mod container;
mod course_service;
mod enrollment_service;
mod profile_service;
mod student_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use author_service::{AuthorManager, AuthorService};
pub use book_service::{BookManager, BookService};
pub use course_service::{CourseManager, CourseService};
pub use enrollment_service::{EnrollmentManager, EnrollmentService};
pub use profile_service::{ProfileManager, ProfileService};
pub use student_service::{StudentManager, StudentService};
pub use user_service::{UserManager, UserService};
