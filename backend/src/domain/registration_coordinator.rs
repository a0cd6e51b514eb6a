//! Enrollment coordinator: the only operation that touches two collections.
//!
//! An enrollment is two dependent writes performed in a fixed order:
//!
//! 1. the course's `total_registered` is incremented;
//! 2. the course id is appended to the student's `course_ids`.
//!
//! The writes are not atomic and there is no compensating rollback. If the
//! second write fails after the first succeeded, the course count stays one
//! ahead of the enrolled students and the failure is returned to the caller.
//! Between the two writes a concurrent reader can observe the bumped count
//! without the matching enrollment.

use tracing::{info, warn};

use crate::domain::ports::EntityStore;
use crate::domain::{
    Course, CourseCatalog, CourseId, Error, Student, StudentDirectory, StudentId,
};

/// Links students to courses while keeping both sides in step.
pub struct RegistrationCoordinator<C, S> {
    catalog: CourseCatalog<C>,
    directory: StudentDirectory<S>,
}

impl<C, S> RegistrationCoordinator<C, S>
where
    C: EntityStore<CourseId, Course>,
    S: EntityStore<StudentId, Student>,
{
    /// Create a coordinator writing through the owning components.
    pub fn new(catalog: CourseCatalog<C>, directory: StudentDirectory<S>) -> Self {
        Self { catalog, directory }
    }

    /// Enroll `student_id` in `course_id`, returning the updated course.
    ///
    /// Enrolling twice fails with [`crate::domain::ErrorCode::AlreadyEnrolled`]
    /// and changes nothing.
    pub fn enroll(&self, course_id: &str, student_id: &str) -> Result<Course, Error> {
        let course_id = CourseId::new(course_id)?;
        let student_id = StudentId::new(student_id)?;

        let student = self
            .directory
            .get(&student_id)
            .ok_or_else(|| Error::not_found(format!("student {student_id} not found")))?;
        if student.is_enrolled_in(&course_id) {
            return Err(Error::already_enrolled(format!(
                "student {student_id} is already enrolled in course {course_id}"
            )));
        }
        if !self.catalog.contains(&course_id) {
            return Err(Error::not_found(format!("course {course_id} not found")));
        }

        let course = self.catalog.bump_registration(&course_id)?;
        if let Err(error) = self.directory.add_enrollment(&student_id, &course_id) {
            warn!(
                course_id = %course_id,
                student_id = %student_id,
                total_registered = course.total_registered,
                error = %error,
                "enrollment left incomplete: course count bumped without student record"
            );
            return Err(error);
        }

        info!(
            course_id = %course_id,
            student_id = %student_id,
            total_registered = course.total_registered,
            "student enrolled"
        );
        Ok(course)
    }
}

#[cfg(test)]
#[path = "registration_coordinator_tests.rs"]
mod tests;
