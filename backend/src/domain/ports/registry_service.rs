//! Driving port exposing every registry operation to inbound adapters.
//!
//! The interface is synchronous: each call runs to completion against the
//! in-process stores. Identifiers arrive as raw strings because validating
//! them is part of each operation's contract.

use crate::domain::{
    CallerIdentity, Course, CreateCoursePayload, CreateLessonPayload, CreateStudentPayload, Error,
    Lesson, Student,
};

/// Use-case port for the course registry.
#[cfg_attr(test, mockall::automock)]
pub trait RegistryService: Send + Sync {
    /// Register (or re-register) the caller's course.
    fn register_course(
        &self,
        caller: CallerIdentity,
        payload: CreateCoursePayload,
    ) -> Result<Course, Error>;

    /// Every course in id order.
    fn list_courses(&self) -> Vec<Course>;

    /// Look up one course.
    fn get_course(&self, id: &str) -> Result<Course, Error>;

    /// Delete a course, returning the removed record.
    fn delete_course(&self, id: &str) -> Result<Course, Error>;

    /// Register a student with a unique user name.
    fn register_student(&self, payload: CreateStudentPayload) -> Result<Student, Error>;

    /// Every student in id order.
    fn list_students(&self) -> Vec<Student>;

    /// Look up one student.
    fn get_student(&self, id: &str) -> Result<Student, Error>;

    /// Delete a student, returning the removed record.
    fn delete_student(&self, id: &str) -> Result<Student, Error>;

    /// Add a lesson to an existing course.
    fn register_lesson(&self, payload: CreateLessonPayload) -> Result<Lesson, Error>;

    /// Every lesson in id order.
    fn list_lessons(&self) -> Vec<Lesson>;

    /// Lessons belonging to one existing course.
    fn list_course_lessons(&self, course_id: &str) -> Result<Vec<Lesson>, Error>;

    /// Look up one lesson by its well-formed id.
    fn get_lesson(&self, id: &str) -> Result<Lesson, Error>;

    /// Delete a lesson, returning the removed record.
    fn delete_lesson(&self, id: &str) -> Result<Lesson, Error>;

    /// Enroll a student in a course, returning the updated course.
    fn enroll_student(&self, course_id: &str, student_id: &str) -> Result<Course, Error>;
}
