//! Course catalog: sole owner of the course collection.

use std::sync::Arc;

use mockable::Clock;
use tracing::info;

use crate::domain::ports::EntityStore;
use crate::domain::{CallerIdentity, Course, CourseId, CreateCoursePayload, Error};

/// Registers, reads, deletes, and bumps the registration count of courses.
pub struct CourseCatalog<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> Clone for CourseCatalog<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S> CourseCatalog<S>
where
    S: EntityStore<CourseId, Course>,
{
    /// Create a catalog over the given course store.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Register the caller's course.
    ///
    /// The caller identity becomes the course id, so each caller owns at most
    /// one course. Registering again replaces the descriptive fields but keeps
    /// `total_registered` and `created_at`, because enrolled students still
    /// reference the id.
    pub fn register(
        &self,
        caller: CallerIdentity,
        payload: CreateCoursePayload,
    ) -> Result<Course, Error> {
        payload.validate()?;
        let id = CourseId::from(caller);
        let now = self.clock.utc();
        let course = match self.store.get(&id) {
            Some(existing) => Course {
                total_registered: existing.total_registered,
                created_at: existing.created_at,
                updated_at: Some(now),
                ..Course::new(id.clone(), payload, now)
            },
            None => Course::new(id.clone(), payload, now),
        };
        self.store.insert(id, course.clone());
        info!(course_id = %course.id, "course registered");
        Ok(course)
    }

    /// Look up a course.
    pub fn get(&self, id: &CourseId) -> Option<Course> {
        self.store.get(id)
    }

    /// Every course in id order.
    pub fn list(&self) -> Vec<Course> {
        self.store.values()
    }

    /// Whether a course with `id` exists.
    pub fn contains(&self, id: &CourseId) -> bool {
        self.store.get(id).is_some()
    }

    /// Delete a course. Students keep any enrollment that references it.
    pub fn delete(&self, id: &CourseId) -> Result<Course, Error> {
        let removed = self.store.remove(id).ok_or_else(|| {
            Error::not_found(format!("couldn't delete course {id}: course not found"))
        })?;
        info!(course_id = %id, "course deleted");
        Ok(removed)
    }

    /// Increment the registration count unconditionally.
    ///
    /// Whether the increment is warranted is decided by the enrollment
    /// coordinator, not here.
    pub fn bump_registration(&self, id: &CourseId) -> Result<Course, Error> {
        let course = self
            .store
            .get(id)
            .ok_or_else(|| Error::not_found(format!("course {id} not found")))?;
        let updated = course.with_registration(self.clock.utc());
        self.store.insert(id.clone(), updated.clone());
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "course_catalog_tests.rs"]
mod tests;
