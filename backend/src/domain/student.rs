//! Student records and their registration payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{FieldError, non_empty_string};
use super::{CourseId, StudentId};

/// Fields supplied when registering a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentPayload {
    #[schema(example = "alice")]
    pub user_name: String,
    #[schema(example = "Alice")]
    pub first_name: String,
    #[schema(example = "Liddell")]
    pub last_name: String,
}

impl CreateStudentPayload {
    /// Check every field, reporting the first offender in declaration order.
    pub fn validate(&self) -> Result<(), FieldError> {
        non_empty_string("user_name", &self.user_name)?;
        non_empty_string("first_name", &self.first_name)?;
        non_empty_string("last_name", &self.last_name)?;
        Ok(())
    }
}

/// A registered student.
///
/// ## Invariants
/// - `user_name` is unique across the directory.
/// - `course_ids` holds no duplicates and is kept in enrollment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    #[schema(value_type = String, example = "S3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: StudentId,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    #[schema(value_type = Vec<String>)]
    pub course_ids: Vec<CourseId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Student {
    /// Build a freshly registered student with no enrollments.
    pub fn new(id: StudentId, payload: CreateStudentPayload, now: DateTime<Utc>) -> Self {
        let CreateStudentPayload {
            user_name,
            first_name,
            last_name,
        } = payload;
        Self {
            id,
            user_name,
            first_name,
            last_name,
            course_ids: Vec::new(),
            created_at: now,
            updated_at: None,
        }
    }

    /// Whether the student is already enrolled in `course_id`.
    pub fn is_enrolled_in(&self, course_id: &CourseId) -> bool {
        self.course_ids.contains(course_id)
    }

    /// Copy with `course_id` appended to the enrollment list.
    #[must_use]
    pub fn with_enrollment(&self, course_id: CourseId, now: DateTime<Utc>) -> Self {
        let mut course_ids = self.course_ids.clone();
        course_ids.push(course_id);
        Self {
            course_ids,
            updated_at: Some(now),
            ..self.clone()
        }
    }
}
