//! Course records and their registration payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CourseId;
use super::validation::{FieldError, non_empty_string, valid_url};

/// Fields supplied when registering a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateCoursePayload {
    #[schema(example = "Intro to Motoko")]
    pub course_title: String,
    pub course_description: String,
    #[schema(example = "https://cdn.example/courses/intro.png")]
    pub course_image: String,
    #[schema(example = "https://videos.example/courses/intro.mp4")]
    pub course_introductory_video_url: String,
    pub course_benefit: String,
}

impl CreateCoursePayload {
    /// Check every field, reporting the first offender in declaration order.
    pub fn validate(&self) -> Result<(), FieldError> {
        non_empty_string("course_title", &self.course_title)?;
        non_empty_string("course_description", &self.course_description)?;
        valid_url("course_image", &self.course_image)?;
        valid_url(
            "course_introductory_video_url",
            &self.course_introductory_video_url,
        )?;
        non_empty_string("course_benefit", &self.course_benefit)?;
        Ok(())
    }
}

/// A course offered on the platform.
///
/// ## Invariants
/// - `total_registered` equals the number of students whose `course_ids`
///   contain `id`. It is only ever changed by the enrollment coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    #[schema(value_type = String, example = "2vxsx-fae")]
    pub id: CourseId,
    pub course_title: String,
    pub course_description: String,
    pub course_image: String,
    pub course_introductory_video_url: String,
    pub course_benefit: String,
    pub total_registered: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Course {
    /// Build a freshly registered course with no enrollments.
    pub fn new(id: CourseId, payload: CreateCoursePayload, now: DateTime<Utc>) -> Self {
        let CreateCoursePayload {
            course_title,
            course_description,
            course_image,
            course_introductory_video_url,
            course_benefit,
        } = payload;
        Self {
            id,
            course_title,
            course_description,
            course_image,
            course_introductory_video_url,
            course_benefit,
            total_registered: 0,
            created_at: now,
            updated_at: None,
        }
    }

    /// Copy with the registration count incremented.
    #[must_use]
    pub fn with_registration(&self, now: DateTime<Utc>) -> Self {
        Self {
            total_registered: self.total_registered.saturating_add(1),
            updated_at: Some(now),
            ..self.clone()
        }
    }
}
