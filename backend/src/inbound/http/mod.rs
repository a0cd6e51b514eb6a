//! HTTP inbound adapter exposing the registry as a REST API.

pub mod caller;
pub mod courses;
pub mod error;
pub mod health;
pub mod lessons;
pub mod state;
pub mod students;
#[cfg(test)]
pub mod test_utils;

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde_json::json;

use crate::domain::Error;

pub use error::ApiResult;

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("malformed JSON body: {err}"))
        .with_details(json!({ "code": "invalid_json" }))
        .into()
}

/// Register every `/api/v1` handler on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use course_registry::inbound::http::configure_api;
///
/// let app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(courses::register_course)
        .service(courses::list_courses)
        .service(courses::get_course)
        .service(courses::delete_course)
        .service(courses::list_course_lessons)
        .service(courses::enroll_student)
        .service(students::register_student)
        .service(students::list_students)
        .service(students::get_student)
        .service(students::delete_student)
        .service(lessons::register_lesson)
        .service(lessons::list_lessons)
        .service(lessons::get_lesson)
        .service(lessons::delete_lesson);
}
