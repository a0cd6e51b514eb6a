//! Student directory: sole owner of the student collection.

use std::sync::Arc;

use mockable::Clock;
use tracing::info;

use crate::domain::ports::EntityStore;
use crate::domain::{CourseId, CreateStudentPayload, Error, Student, StudentId};

/// Registers, reads, deletes, and enrolls students.
pub struct StudentDirectory<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> Clone for StudentDirectory<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S> StudentDirectory<S>
where
    S: EntityStore<StudentId, Student>,
{
    /// Create a directory over the given student store.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Register a student whose user name is not yet taken.
    ///
    /// Uniqueness is checked by scanning the collection; there is no
    /// secondary index on user names.
    pub fn register(&self, payload: CreateStudentPayload) -> Result<Student, Error> {
        payload.validate()?;
        let taken = self
            .store
            .values()
            .iter()
            .any(|student| student.user_name == payload.user_name);
        if taken {
            return Err(Error::duplicate(format!(
                "user name {} is already registered",
                payload.user_name
            )));
        }

        let student = Student::new(StudentId::random(), payload, self.clock.utc());
        self.store.insert(student.id.clone(), student.clone());
        info!(student_id = %student.id, "student registered");
        Ok(student)
    }

    /// Look up a student.
    pub fn get(&self, id: &StudentId) -> Option<Student> {
        self.store.get(id)
    }

    /// Every student in id order.
    pub fn list(&self) -> Vec<Student> {
        self.store.values()
    }

    /// Delete a student. Course registration counts are left untouched.
    pub fn delete(&self, id: &StudentId) -> Result<Student, Error> {
        let removed = self.store.remove(id).ok_or_else(|| {
            Error::not_found(format!("couldn't delete student {id}: student not found"))
        })?;
        info!(student_id = %id, "student deleted");
        Ok(removed)
    }

    /// Append `course_id` to the student's enrollment list.
    pub fn add_enrollment(&self, id: &StudentId, course_id: &CourseId) -> Result<Student, Error> {
        let student = self
            .store
            .get(id)
            .ok_or_else(|| Error::not_found(format!("student {id} not found")))?;
        if student.is_enrolled_in(course_id) {
            return Err(Error::already_enrolled(format!(
                "student {id} is already enrolled in course {course_id}"
            )));
        }
        let updated = student.with_enrollment(course_id.clone(), self.clock.utc());
        self.store.insert(id.clone(), updated.clone());
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "student_directory_tests.rs"]
mod tests;
