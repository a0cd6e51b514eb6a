//! Domain records, components, and ports.
//!
//! Purpose: hold every registry invariant in transport-agnostic code. Each
//! record collection has exactly one owning component; the enrollment
//! coordinator is the only code that writes two collections in one call.
//!
//! Public surface:
//! - Records: `Course`, `Student`, `Lesson` and their creation payloads.
//! - Identifiers: `CallerIdentity`, `CourseId`, `StudentId`, `LessonId`.
//! - Components: `CourseCatalog`, `StudentDirectory`, `LessonRegistry`,
//!   `RegistrationCoordinator`, and the `CourseRegistry` facade.
//! - Errors: `Error` and its `ErrorCode`; `validation::FieldError`.

pub mod course;
pub mod course_catalog;
pub mod course_registry;
pub mod error;
pub mod ids;
pub mod lesson;
pub mod lesson_registry;
pub mod ports;
pub mod registration_coordinator;
pub mod student;
pub mod student_directory;
pub mod trace_id;
pub mod validation;

pub use self::course::{Course, CreateCoursePayload};
pub use self::course_catalog::CourseCatalog;
pub use self::course_registry::{CourseRegistry, RegistryStores};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{CallerIdentity, CourseId, LessonId, StudentId};
pub use self::lesson::{CreateLessonPayload, Lesson};
pub use self::lesson_registry::LessonRegistry;
pub use self::registration_coordinator::RegistrationCoordinator;
pub use self::student::{CreateStudentPayload, Student};
pub use self::student_directory::StudentDirectory;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

#[cfg(test)]
pub(crate) mod test_support;
