//! Lesson registry: sole owner of the lesson collection.

use std::sync::Arc;

use mockable::Clock;
use tracing::info;

use crate::domain::ports::EntityStore;
use crate::domain::{
    Course, CourseCatalog, CourseId, CreateLessonPayload, Error, Lesson, LessonId,
};

/// Registers, reads, and deletes lessons, checking course references.
pub struct LessonRegistry<L, C> {
    store: Arc<L>,
    catalog: CourseCatalog<C>,
    clock: Arc<dyn Clock>,
}

impl<L, C> LessonRegistry<L, C>
where
    L: EntityStore<LessonId, Lesson>,
    C: EntityStore<CourseId, Course>,
{
    /// Create a registry that resolves course references through `catalog`.
    pub fn new(store: Arc<L>, catalog: CourseCatalog<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            catalog,
            clock,
        }
    }

    /// Add a lesson to an existing course.
    pub fn register(&self, payload: CreateLessonPayload) -> Result<Lesson, Error> {
        let course_id = payload.validate()?;
        if !self.catalog.contains(&course_id) {
            return Err(Error::referential(format!(
                "lesson references unknown course {course_id}"
            )));
        }

        let lesson = Lesson::new(LessonId::random(), course_id, payload, self.clock.utc());
        self.store.insert(lesson.id.clone(), lesson.clone());
        info!(lesson_id = %lesson.id, course_id = %lesson.course_id, "lesson registered");
        Ok(lesson)
    }

    /// Look up a lesson, rejecting ids that were not generated by this registry.
    pub fn get(&self, raw_id: &str) -> Result<Lesson, Error> {
        let id = LessonId::parse(raw_id)?;
        self.store
            .get(&id)
            .ok_or_else(|| Error::not_found(format!("a lesson with id={id} not found")))
    }

    /// Every lesson in id order.
    pub fn list(&self) -> Vec<Lesson> {
        self.store.values()
    }

    /// Lessons attached to `course_id`, in id order.
    pub fn list_for_course(&self, course_id: &CourseId) -> Vec<Lesson> {
        self.store
            .values()
            .into_iter()
            .filter(|lesson| &lesson.course_id == course_id)
            .collect()
    }

    /// Delete a lesson.
    pub fn delete(&self, id: &LessonId) -> Result<Lesson, Error> {
        let removed = self.store.remove(id).ok_or_else(|| {
            Error::not_found(format!("couldn't delete lesson {id}: lesson not found"))
        })?;
        info!(lesson_id = %id, "lesson deleted");
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "lesson_registry_tests.rs"]
mod tests;
