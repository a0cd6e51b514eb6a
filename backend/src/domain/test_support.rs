//! Shared fixtures for domain unit tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::ports::FixtureSnapshotRepository;
use crate::domain::{
    CallerIdentity, Course, CourseCatalog, CourseId, CourseRegistry, CreateCoursePayload,
    CreateLessonPayload, CreateStudentPayload, Lesson, LessonId, RegistryStores, Student,
    StudentDirectory, StudentId,
};
use crate::outbound::store::InMemoryEntityStore;

pub(crate) type CourseStore = InMemoryEntityStore<CourseId, Course>;
pub(crate) type StudentStore = InMemoryEntityStore<StudentId, Student>;
pub(crate) type LessonStore = InMemoryEntityStore<LessonId, Lesson>;
pub(crate) type TestRegistry = CourseRegistry<CourseStore, StudentStore, LessonStore>;

/// Clock frozen at a known instant until advanced.
pub(crate) struct SteppingClock(Mutex<DateTime<Utc>>);

impl SteppingClock {
    pub(crate) fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub(crate) fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

pub(crate) fn epoch() -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single() {
        Some(instant) => instant,
        None => panic!("fixture instant is unambiguous"),
    }
}

pub(crate) fn stepping_clock() -> Arc<SteppingClock> {
    Arc::new(SteppingClock::new(epoch()))
}

pub(crate) fn caller(name: &str) -> CallerIdentity {
    CallerIdentity::new(name).expect("fixture caller identity")
}

pub(crate) fn course_payload(title: &str) -> CreateCoursePayload {
    CreateCoursePayload {
        course_title: title.to_owned(),
        course_description: "Build canisters from scratch".to_owned(),
        course_image: "https://cdn.example/courses/intro.png".to_owned(),
        course_introductory_video_url: "https://videos.example/courses/intro.mp4".to_owned(),
        course_benefit: "Ship a working dapp".to_owned(),
    }
}

pub(crate) fn student_payload(user_name: &str) -> CreateStudentPayload {
    CreateStudentPayload {
        user_name: user_name.to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
    }
}

pub(crate) fn lesson_payload(course_id: &str) -> CreateLessonPayload {
    CreateLessonPayload {
        lesson_title: "Actors and messages".to_owned(),
        lesson_url: "https://videos.example/lessons/1.mp4".to_owned(),
        course_id: course_id.to_owned(),
    }
}

pub(crate) fn course_catalog(clock: Arc<SteppingClock>) -> CourseCatalog<CourseStore> {
    CourseCatalog::new(Arc::new(InMemoryEntityStore::new()), clock)
}

pub(crate) fn student_directory(clock: Arc<SteppingClock>) -> StudentDirectory<StudentStore> {
    StudentDirectory::new(Arc::new(InMemoryEntityStore::new()), clock)
}

pub(crate) fn registry_with_clock(clock: Arc<SteppingClock>) -> TestRegistry {
    CourseRegistry::new(
        RegistryStores {
            courses: Arc::new(InMemoryEntityStore::new()),
            students: Arc::new(InMemoryEntityStore::new()),
            lessons: Arc::new(InMemoryEntityStore::new()),
        },
        clock,
        Arc::new(FixtureSnapshotRepository),
    )
}
