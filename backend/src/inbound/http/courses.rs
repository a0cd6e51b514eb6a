//! Course API handlers.
//!
//! ```text
//! POST   /api/v1/courses                      (X-Caller-Principal required)
//! GET    /api/v1/courses
//! GET    /api/v1/courses/{id}
//! DELETE /api/v1/courses/{id}
//! GET    /api/v1/courses/{id}/lessons
//! POST   /api/v1/courses/{id}/enrollments     {"studentId":"S..."}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Course, CreateCoursePayload, Error, Lesson};
use crate::inbound::http::ApiResult;
use crate::inbound::http::caller::Caller;
use crate::inbound::http::state::HttpState;

/// Enrollment request body for `POST /api/v1/courses/{id}/enrollments`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    #[schema(example = "S3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub student_id: String,
}

/// Register the caller's course, replacing its details if it already exists.
#[utoipa::path(
    post,
    path = "/api/v1/courses",
    request_body = CreateCoursePayload,
    params(("X-Caller-Principal" = String, Header, description = "Authenticated caller principal")),
    responses(
        (status = 201, description = "Course registered", body = Course),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Caller principal missing", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["courses"],
    operation_id = "registerCourse"
)]
#[post("/courses")]
pub async fn register_course(
    state: web::Data<HttpState>,
    caller: Caller,
    payload: web::Json<CreateCoursePayload>,
) -> ApiResult<HttpResponse> {
    let identity = caller.into_identity();
    let payload = payload.into_inner();
    let course = state
        .call(move |registry| registry.register_course(identity, payload))
        .await?;
    Ok(HttpResponse::Created().json(course))
}

/// List every course.
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    responses(
        (status = 200, description = "Courses", body = [Course]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["courses"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Course>>> {
    let courses = state.call(|registry| Ok(registry.list_courses())).await?;
    Ok(web::Json(courses))
}

/// Fetch one course.
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course", body = Course),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Course>> {
    let id = id.into_inner();
    let course = state.call(move |registry| registry.get_course(&id)).await?;
    Ok(web::Json(course))
}

/// Delete a course. Enrollments held by students are not touched.
#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "Removed course", body = Course),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["courses"],
    operation_id = "deleteCourse"
)]
#[delete("/courses/{id}")]
pub async fn delete_course(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Course>> {
    let id = id.into_inner();
    let course = state
        .call(move |registry| registry.delete_course(&id))
        .await?;
    Ok(web::Json(course))
}

/// List the lessons of one course.
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}/lessons",
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "Lessons of the course", body = [Lesson]),
        (status = 404, description = "Course not found", body = Error)
    ),
    tags = ["courses"],
    operation_id = "listCourseLessons"
)]
#[get("/courses/{id}/lessons")]
pub async fn list_course_lessons(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Vec<Lesson>>> {
    let id = id.into_inner();
    let lessons = state
        .call(move |registry| registry.list_course_lessons(&id))
        .await?;
    Ok(web::Json(lessons))
}

/// Enroll a student in the course, returning the updated course.
#[utoipa::path(
    post,
    path = "/api/v1/courses/{id}/enrollments",
    params(("id" = String, Path, description = "Course id")),
    request_body = EnrollmentRequest,
    responses(
        (status = 200, description = "Updated course", body = Course),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Course or student not found", body = Error),
        (status = 409, description = "Student already enrolled", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["courses"],
    operation_id = "enrollStudent"
)]
#[post("/courses/{id}/enrollments")]
pub async fn enroll_student(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<EnrollmentRequest>,
) -> ApiResult<web::Json<Course>> {
    let course_id = id.into_inner();
    let EnrollmentRequest { student_id } = payload.into_inner();
    let course = state
        .call(move |registry| registry.enroll_student(&course_id, &student_id))
        .await?;
    Ok(web::Json(course))
}
