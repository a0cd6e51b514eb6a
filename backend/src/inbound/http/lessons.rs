//! Lesson API handlers.
//!
//! ```text
//! POST   /api/v1/lessons {"lesson_title":"...","lesson_url":"https://...","course_id":"..."}
//! GET    /api/v1/lessons
//! GET    /api/v1/lessons/{id}
//! DELETE /api/v1/lessons/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::{CreateLessonPayload, Error, Lesson};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Add a lesson to an existing course.
#[utoipa::path(
    post,
    path = "/api/v1/lessons",
    request_body = CreateLessonPayload,
    responses(
        (status = 201, description = "Lesson registered", body = Lesson),
        (status = 400, description = "Invalid request", body = Error),
        (status = 422, description = "Course does not exist", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["lessons"],
    operation_id = "registerLesson"
)]
#[post("/lessons")]
pub async fn register_lesson(
    state: web::Data<HttpState>,
    payload: web::Json<CreateLessonPayload>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let lesson = state
        .call(move |registry| registry.register_lesson(payload))
        .await?;
    Ok(HttpResponse::Created().json(lesson))
}

#[utoipa::path(
    get,
    path = "/api/v1/lessons",
    responses((status = 200, description = "Lessons", body = [Lesson])),
    tags = ["lessons"],
    operation_id = "listLessons"
)]
#[get("/lessons")]
pub async fn list_lessons(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Lesson>>> {
    let lessons = state.call(|registry| Ok(registry.list_lessons())).await?;
    Ok(web::Json(lessons))
}

/// Fetch one lesson. Ids must have the generated `L<uuid>` shape.
#[utoipa::path(
    get,
    path = "/api/v1/lessons/{id}",
    params(("id" = String, Path, description = "Lesson id")),
    responses(
        (status = 200, description = "Lesson", body = Lesson),
        (status = 400, description = "Malformed lesson id", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["lessons"],
    operation_id = "getLesson"
)]
#[get("/lessons/{id}")]
pub async fn get_lesson(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Lesson>> {
    let id = id.into_inner();
    let lesson = state.call(move |registry| registry.get_lesson(&id)).await?;
    Ok(web::Json(lesson))
}

#[utoipa::path(
    delete,
    path = "/api/v1/lessons/{id}",
    params(("id" = String, Path, description = "Lesson id")),
    responses(
        (status = 200, description = "Removed lesson", body = Lesson),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["lessons"],
    operation_id = "deleteLesson"
)]
#[delete("/lessons/{id}")]
pub async fn delete_lesson(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Lesson>> {
    let id = id.into_inner();
    let lesson = state
        .call(move |registry| registry.delete_lesson(&id))
        .await?;
    Ok(web::Json(lesson))
}
