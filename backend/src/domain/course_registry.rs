//! Registry facade wiring the components around one set of stores.
//!
//! Mutating operations pass through a single update gate so each one runs to
//! completion before the next starts, then the whole registry is written to
//! the snapshot repository. Reads go straight to the internally synchronised
//! stores.

use std::sync::{Arc, Mutex, PoisonError};

use mockable::Clock;
use tracing::{error, info};

use crate::domain::ports::{
    EntityStore, RegistryService, RegistrySnapshot, SnapshotRepository, SnapshotRepositoryError,
};
use crate::domain::validation::FieldError;
use crate::domain::{
    CallerIdentity, Course, CourseCatalog, CourseId, CreateCoursePayload, CreateLessonPayload,
    CreateStudentPayload, Error, Lesson, LessonId, LessonRegistry, RegistrationCoordinator,
    Student, StudentDirectory, StudentId,
};

/// Blank ids name no record, so deletes report them as not found.
fn delete_target<T>(parsed: Result<T, FieldError>, kind: &str, raw: &str) -> Result<T, Error> {
    parsed.map_err(|_| Error::not_found(format!("couldn't delete {kind} {raw:?}: {kind} not found")))
}

/// The three collections backing a registry.
pub struct RegistryStores<C, S, L> {
    pub courses: Arc<C>,
    pub students: Arc<S>,
    pub lessons: Arc<L>,
}

/// Course registry implementing the [`RegistryService`] driving port.
pub struct CourseRegistry<C, S, L> {
    stores: RegistryStores<C, S, L>,
    catalog: CourseCatalog<C>,
    directory: StudentDirectory<S>,
    lessons: LessonRegistry<L, C>,
    coordinator: RegistrationCoordinator<C, S>,
    snapshots: Arc<dyn SnapshotRepository>,
    update_gate: Mutex<()>,
}

impl<C, S, L> CourseRegistry<C, S, L>
where
    C: EntityStore<CourseId, Course>,
    S: EntityStore<StudentId, Student>,
    L: EntityStore<LessonId, Lesson>,
{
    /// Build a registry over `stores`, saving to `snapshots` after updates.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use course_registry::domain::ports::{FixtureSnapshotRepository, RegistryService};
    /// use course_registry::domain::{CourseRegistry, RegistryStores};
    /// use course_registry::outbound::store::InMemoryEntityStore;
    /// use mockable::DefaultClock;
    ///
    /// let registry = CourseRegistry::new(
    ///     RegistryStores {
    ///         courses: Arc::new(InMemoryEntityStore::new()),
    ///         students: Arc::new(InMemoryEntityStore::new()),
    ///         lessons: Arc::new(InMemoryEntityStore::new()),
    ///     },
    ///     Arc::new(DefaultClock),
    ///     Arc::new(FixtureSnapshotRepository),
    /// );
    /// assert!(registry.list_students().is_empty());
    /// ```
    pub fn new(
        stores: RegistryStores<C, S, L>,
        clock: Arc<dyn Clock>,
        snapshots: Arc<dyn SnapshotRepository>,
    ) -> Self {
        let catalog = CourseCatalog::new(Arc::clone(&stores.courses), Arc::clone(&clock));
        let directory = StudentDirectory::new(Arc::clone(&stores.students), Arc::clone(&clock));
        let lessons = LessonRegistry::new(Arc::clone(&stores.lessons), catalog.clone(), clock);
        let coordinator = RegistrationCoordinator::new(catalog.clone(), directory.clone());
        Self {
            stores,
            catalog,
            directory,
            lessons,
            coordinator,
            snapshots,
            update_gate: Mutex::new(()),
        }
    }

    /// Load the last saved snapshot into the stores.
    ///
    /// Returns the number of records restored; zero when nothing was saved.
    pub fn restore(&self) -> Result<usize, SnapshotRepositoryError> {
        let _guard = self.update_gate.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(snapshot) = self.snapshots.load()? else {
            return Ok(0);
        };
        let count = snapshot.record_count();
        let RegistrySnapshot {
            courses,
            students,
            lessons,
        } = snapshot;
        for course in courses {
            self.stores.courses.insert(course.id.clone(), course);
        }
        for student in students {
            self.stores.students.insert(student.id.clone(), student);
        }
        for lesson in lessons {
            self.stores.lessons.insert(lesson.id.clone(), lesson);
        }
        info!(records = count, "registry restored from snapshot");
        Ok(count)
    }

    /// Point-in-time copy of every collection.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            courses: self.stores.courses.values(),
            students: self.stores.students.values(),
            lessons: self.stores.lessons.values(),
        }
    }

    fn update<T>(&self, operation: impl FnOnce() -> Result<T, Error>) -> Result<T, Error> {
        let _guard = self.update_gate.lock().unwrap_or_else(PoisonError::into_inner);
        let outcome = operation();
        // Failed enrollments may already have bumped a course, so the
        // snapshot is written whatever the outcome.
        let saved = self.snapshots.save(&self.snapshot());
        match (outcome, saved) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(err)) => {
                error!(error = %err, "update applied in memory but snapshot save failed");
                Err(Error::internal(format!(
                    "change applied but could not be persisted: {err}"
                )))
            }
            (Err(op_err), Err(save_err)) => {
                error!(error = %save_err, "snapshot save failed after rejected update");
                Err(op_err)
            }
            (Err(op_err), Ok(())) => Err(op_err),
        }
    }
}

impl<C, S, L> RegistryService for CourseRegistry<C, S, L>
where
    C: EntityStore<CourseId, Course>,
    S: EntityStore<StudentId, Student>,
    L: EntityStore<LessonId, Lesson>,
{
    fn register_course(
        &self,
        caller: CallerIdentity,
        payload: CreateCoursePayload,
    ) -> Result<Course, Error> {
        self.update(|| self.catalog.register(caller, payload))
    }

    fn list_courses(&self) -> Vec<Course> {
        self.catalog.list()
    }

    fn get_course(&self, id: &str) -> Result<Course, Error> {
        let id = CourseId::new(id)?;
        self.catalog
            .get(&id)
            .ok_or_else(|| Error::not_found(format!("course {id} not found")))
    }

    fn delete_course(&self, id: &str) -> Result<Course, Error> {
        self.update(|| {
            let id = delete_target(CourseId::new(id), "course", id)?;
            self.catalog.delete(&id)
        })
    }

    fn register_student(&self, payload: CreateStudentPayload) -> Result<Student, Error> {
        self.update(|| self.directory.register(payload))
    }

    fn list_students(&self) -> Vec<Student> {
        self.directory.list()
    }

    fn get_student(&self, id: &str) -> Result<Student, Error> {
        let id = StudentId::new(id)?;
        self.directory
            .get(&id)
            .ok_or_else(|| Error::not_found(format!("student {id} not found")))
    }

    fn delete_student(&self, id: &str) -> Result<Student, Error> {
        self.update(|| {
            let id = delete_target(StudentId::new(id), "student", id)?;
            self.directory.delete(&id)
        })
    }

    fn register_lesson(&self, payload: CreateLessonPayload) -> Result<Lesson, Error> {
        self.update(|| self.lessons.register(payload))
    }

    fn list_lessons(&self) -> Vec<Lesson> {
        self.lessons.list()
    }

    fn list_course_lessons(&self, course_id: &str) -> Result<Vec<Lesson>, Error> {
        let course_id = CourseId::new(course_id)?;
        if !self.catalog.contains(&course_id) {
            return Err(Error::not_found(format!("course {course_id} not found")));
        }
        Ok(self.lessons.list_for_course(&course_id))
    }

    fn get_lesson(&self, id: &str) -> Result<Lesson, Error> {
        self.lessons.get(id)
    }

    fn delete_lesson(&self, id: &str) -> Result<Lesson, Error> {
        self.update(|| {
            let id = delete_target(LessonId::new(id), "lesson", id)?;
            self.lessons.delete(&id)
        })
    }

    fn enroll_student(&self, course_id: &str, student_id: &str) -> Result<Course, Error> {
        self.update(|| self.coordinator.enroll(course_id, student_id))
    }
}

#[cfg(test)]
#[path = "course_registry_tests.rs"]
mod tests;
