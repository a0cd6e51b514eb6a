//! Record identifiers and the caller identity.
//!
//! Course ids are the identity of the caller that registered the course.
//! Student and lesson ids are generated: a single-letter prefix (`S` or `L`)
//! followed by a hyphenated v4 UUID, so ids from different collections never
//! collide and can be told apart at a glance.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{FieldError, non_empty_string};

const STUDENT_PREFIX: char = 'S';
const LESSON_PREFIX: char = 'L';

fn prefixed_uuid(prefix: char) -> String {
    format!("{prefix}{}", Uuid::new_v4())
}

/// Only the hyphenated form counts; simple, braced and urn spellings do not.
fn is_prefixed_uuid(raw: &str, prefix: char) -> bool {
    raw.strip_prefix(prefix).is_some_and(|rest| {
        Uuid::try_parse(rest).is_ok_and(|uuid| uuid.hyphenated().to_string() == rest)
    })
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap a non-blank identifier string.
            pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
                let raw = raw.into();
                non_empty_string($field, &raw)?;
                Ok(Self(raw))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

string_id! {
    /// Identity of the party invoking an operation, as supplied by the transport.
    CallerIdentity, "caller"
}

string_id! {
    /// Primary key of a course: the identity of the caller that registered it.
    CourseId, "course_id"
}

string_id! {
    /// Generated student identifier (`S` followed by a UUID).
    StudentId, "student_id"
}

string_id! {
    /// Generated lesson identifier (`L` followed by a UUID).
    LessonId, "lesson_id"
}

impl From<CallerIdentity> for CourseId {
    fn from(value: CallerIdentity) -> Self {
        Self(value.0)
    }
}

impl StudentId {
    /// Generate a fresh student identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(prefixed_uuid(STUDENT_PREFIX))
    }
}

impl LessonId {
    /// Generate a fresh lesson identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(prefixed_uuid(LESSON_PREFIX))
    }

    /// Parse an identifier, requiring the generated `L<uuid>` shape.
    ///
    /// # Examples
    /// ```
    /// use course_registry::domain::LessonId;
    ///
    /// let id = LessonId::random();
    /// assert!(LessonId::parse(id.as_ref()).is_ok());
    /// assert!(LessonId::parse("lesson-1").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        non_empty_string("lesson_id", raw)?;
        if !is_prefixed_uuid(raw, LESSON_PREFIX) {
            return Err(FieldError::InvalidIdentifier { field: "lesson_id" });
        }
        Ok(Self(raw.to_owned()))
    }
}
