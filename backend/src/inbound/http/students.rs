//! Student API handlers.
//!
//! ```text
//! POST   /api/v1/students {"user_name":"alice","first_name":"A","last_name":"B"}
//! GET    /api/v1/students
//! GET    /api/v1/students/{id}
//! DELETE /api/v1/students/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::{CreateStudentPayload, Error, Student};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Register a student with a unique user name.
#[utoipa::path(
    post,
    path = "/api/v1/students",
    request_body = CreateStudentPayload,
    responses(
        (status = 201, description = "Student registered", body = Student),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "User name already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["students"],
    operation_id = "registerStudent"
)]
#[post("/students")]
pub async fn register_student(
    state: web::Data<HttpState>,
    payload: web::Json<CreateStudentPayload>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let student = state
        .call(move |registry| registry.register_student(payload))
        .await?;
    Ok(HttpResponse::Created().json(student))
}

#[utoipa::path(
    get,
    path = "/api/v1/students",
    responses((status = 200, description = "Students", body = [Student])),
    tags = ["students"],
    operation_id = "listStudents"
)]
#[get("/students")]
pub async fn list_students(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Student>>> {
    let students = state.call(|registry| Ok(registry.list_students())).await?;
    Ok(web::Json(students))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/{id}",
    params(("id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student", body = Student),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["students"],
    operation_id = "getStudent"
)]
#[get("/students/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Student>> {
    let id = id.into_inner();
    let student = state.call(move |registry| registry.get_student(&id)).await?;
    Ok(web::Json(student))
}

/// Delete a student. Course registration counts are not decremented.
#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}",
    params(("id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "Removed student", body = Student),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["students"],
    operation_id = "deleteStudent"
)]
#[delete("/students/{id}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Student>> {
    let id = id.into_inner();
    let student = state
        .call(move |registry| registry.delete_student(&id))
        .await?;
    Ok(web::Json(student))
}
