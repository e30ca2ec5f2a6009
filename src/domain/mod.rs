//! Domain layer - Core business entities
//!
//! Plain data types for the six entities, their creation payloads and
//! partial-update ("patch") payloads. No infrastructure dependencies.

pub mod author;
pub mod book;
pub mod course;
pub mod enrollment;
pub mod profile;
pub mod student;
pub mod user;

pub use author::{Author, CreateAuthor, UpdateAuthor};
pub use book::{Book, CreateBook, UpdateBook};
pub use course::{Course, CreateCourse, UpdateCourse};
pub use enrollment::{Enrollment, EnrollmentRequest};
pub use profile::{CreateProfile, Profile, UpdateProfile};
pub use student::{CreateStudent, Student, UpdateStudent};
pub use user::{CreateUser, UpdateUser, User};
