//! Named field validators applied to registration payloads.
//!
//! Every validator runs before any store mutation and reports the first
//! offending field by its serialised name.

use serde_json::json;
use url::Url;

use super::Error;

/// Field-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The value was empty or whitespace only.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    /// The value is not an absolute URL.
    #[error("{field} must be an absolute URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },
    /// The value is not a well-formed record identifier.
    #[error("{field} is not a valid identifier")]
    InvalidIdentifier { field: &'static str },
}

impl FieldError {
    /// Serialised name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::InvalidUrl { field, .. }
            | Self::InvalidIdentifier { field } => *field,
        }
    }

    /// Stable code describing the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "empty",
            Self::InvalidUrl { .. } => "invalid_url",
            Self::InvalidIdentifier { .. } => "invalid_identifier",
        }
    }
}

impl From<FieldError> for Error {
    fn from(value: FieldError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "field": value.field(),
            "code": value.code(),
        }))
    }
}

/// Require a value that is not blank.
///
/// The value is returned unchanged; surrounding whitespace is preserved so the
/// stored record matches the submitted payload.
///
/// # Examples
/// ```
/// use course_registry::domain::validation::non_empty_string;
///
/// assert!(non_empty_string("user_name", "alice").is_ok());
/// assert!(non_empty_string("user_name", "   ").is_err());
/// ```
pub fn non_empty_string(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Empty { field });
    }
    Ok(())
}

/// Require a non-blank value that parses as an absolute URL.
///
/// # Examples
/// ```
/// use course_registry::domain::validation::valid_url;
///
/// assert!(valid_url("lesson_url", "https://videos.example/intro.mp4").is_ok());
/// assert!(valid_url("lesson_url", "intro.mp4").is_err());
/// ```
pub fn valid_url(field: &'static str, value: &str) -> Result<(), FieldError> {
    non_empty_string(field, value)?;
    Url::parse(value.trim()).map_err(|err| FieldError::InvalidUrl {
        field,
        reason: err.to_string(),
    })?;
    Ok(())
}
