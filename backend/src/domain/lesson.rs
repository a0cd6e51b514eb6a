//! Lesson records. Lessons are immutable once registered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{FieldError, non_empty_string, valid_url};
use super::{CourseId, LessonId};

/// Fields supplied when adding a lesson to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateLessonPayload {
    #[schema(example = "Actors and messages")]
    pub lesson_title: String,
    #[schema(example = "https://videos.example/lessons/1.mp4")]
    pub lesson_url: String,
    #[schema(example = "2vxsx-fae")]
    pub course_id: String,
}

impl CreateLessonPayload {
    /// Check every field, returning the typed course reference on success.
    pub fn validate(&self) -> Result<CourseId, FieldError> {
        non_empty_string("lesson_title", &self.lesson_title)?;
        valid_url("lesson_url", &self.lesson_url)?;
        CourseId::new(self.course_id.as_str())
    }
}

/// A lesson belonging to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Lesson {
    #[schema(value_type = String, example = "L3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: LessonId,
    pub lesson_title: String,
    pub lesson_url: String,
    #[schema(value_type = String)]
    pub course_id: CourseId,
    pub created_at: DateTime<Utc>,
}

impl Lesson {
    /// Build a lesson from a payload whose course reference was checked.
    pub fn new(
        id: LessonId,
        course_id: CourseId,
        payload: CreateLessonPayload,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            lesson_title: payload.lesson_title,
            lesson_url: payload.lesson_url,
            course_id,
            created_at: now,
        }
    }
}
