//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP handler and the record, payload, and error
//! schemas they exchange. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    Course, CreateCoursePayload, CreateLessonPayload, CreateStudentPayload, Error, ErrorCode,
    Lesson, Student,
};
use crate::inbound::http::courses::EnrollmentRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course registry API",
        description = "Record store for courses, students, and lessons with enrollment."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::courses::register_course,
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::delete_course,
        crate::inbound::http::courses::list_course_lessons,
        crate::inbound::http::courses::enroll_student,
        crate::inbound::http::students::register_student,
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::get_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::lessons::register_lesson,
        crate::inbound::http::lessons::list_lessons,
        crate::inbound::http::lessons::get_lesson,
        crate::inbound::http::lessons::delete_lesson,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Course,
        Student,
        Lesson,
        CreateCoursePayload,
        CreateStudentPayload,
        CreateLessonPayload,
        EnrollmentRequest,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "courses", description = "Course records, lessons by course, and enrollment"),
        (name = "students", description = "Student records"),
        (name = "lessons", description = "Lesson records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
