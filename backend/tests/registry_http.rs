//! End-to-end behaviour of the REST API over a file-backed registry.
//!
//! Each scenario drives the public HTTP surface, then reopens the data
//! directory with a fresh registry to check what survived on disk.

use std::path::Path;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use course_registry::Trace;
use course_registry::domain::ports::RegistryService;
use course_registry::domain::{CourseRegistry, RegistryStores};
use course_registry::inbound::http::caller::CALLER_PRINCIPAL_HEADER;
use course_registry::inbound::http::configure_api;
use course_registry::inbound::http::state::HttpState;
use course_registry::outbound::persistence::JsonSnapshotRepository;
use course_registry::outbound::store::InMemoryEntityStore;

const SNAPSHOT_FILE: &str = "registry.json";

fn open_registry(data_dir: &Path) -> Arc<dyn RegistryService> {
    let snapshots =
        JsonSnapshotRepository::open(data_dir, SNAPSHOT_FILE).expect("open snapshot repository");
    let registry = CourseRegistry::new(
        RegistryStores {
            courses: Arc::new(InMemoryEntityStore::new()),
            students: Arc::new(InMemoryEntityStore::new()),
            lessons: Arc::new(InMemoryEntityStore::new()),
        },
        Arc::new(DefaultClock),
        Arc::new(snapshots),
    );
    registry.restore().expect("restore snapshot");
    Arc::new(registry)
}

#[fixture]
fn data_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create data dir")
}

struct Enrollment {
    course_id: String,
    student_id: String,
    response: (StatusCode, Value),
}

macro_rules! app_for {
    ($registry:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new($registry)))
                .wrap(Trace)
                .service(web::scope("/api/v1").configure(configure_api)),
        )
        .await
    };
}

fn a_fresh_registry(data_dir: &Path) -> Arc<dyn RegistryService> {
    open_registry(data_dir)
}

async fn register_and_enroll(registry: Arc<dyn RegistryService>) -> Enrollment {
    let app = app_for!(registry);

    let course: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/courses")
            .insert_header((CALLER_PRINCIPAL_HEADER, "principal-c1"))
            .set_json(json!({
                "course_title": "Intro",
                "course_description": "Build canisters from scratch",
                "course_image": "https://cdn.example/courses/intro.png",
                "course_introductory_video_url": "https://videos.example/courses/intro.mp4",
                "course_benefit": "Ship a working dapp"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(course["total_registered"], 0);

    let student: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(json!({"user_name": "alice", "first_name": "A", "last_name": "B"}))
            .to_request(),
    )
    .await;
    assert_eq!(student["course_ids"], json!([]));

    let course_id = course["id"].as_str().expect("course id").to_owned();
    let student_id = student["id"].as_str().expect("student id").to_owned();
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/courses/{course_id}/enrollments"))
            .set_json(json!({ "studentId": student_id }))
            .to_request(),
    )
    .await;
    let status = res.status();
    let body: Value = test::read_body_json(res).await;
    Enrollment {
        course_id,
        student_id,
        response: (status, body),
    }
}

async fn the_enrollment_survives_a_restart(data_dir: &Path, enrollment: Enrollment) {
    let (status, body) = enrollment.response;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_registered"], 1);

    let app = app_for!(open_registry(data_dir));
    let students: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/students").to_request(),
    )
    .await;
    assert_eq!(students[0]["id"], enrollment.student_id);
    assert_eq!(students[0]["course_ids"], json!([enrollment.course_id]));

    let course: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/courses/{}", enrollment.course_id))
            .to_request(),
    )
    .await;
    assert_eq!(course["total_registered"], 1);
}

#[rstest]
#[actix_web::test]
async fn enrollment_is_persisted_across_restarts(data_dir: tempfile::TempDir) {
    let registry = a_fresh_registry(data_dir.path());
    let enrollment = register_and_enroll(registry).await;
    the_enrollment_survives_a_restart(data_dir.path(), enrollment).await;
}

#[rstest]
#[actix_web::test]
async fn second_enrollment_conflicts_and_is_not_persisted(data_dir: tempfile::TempDir) {
    let registry = a_fresh_registry(data_dir.path());
    let enrollment = register_and_enroll(Arc::clone(&registry)).await;
    let app = app_for!(registry);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!(
                "/api/v1/courses/{}/enrollments",
                enrollment.course_id
            ))
            .set_json(json!({ "studentId": enrollment.student_id }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert!(res.headers().contains_key("trace-id"));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "already_enrolled");
    assert!(body["traceId"].is_string());

    let reopened = open_registry(data_dir.path());
    let course = reopened
        .get_course(&enrollment.course_id)
        .expect("course persisted");
    assert_eq!(course.total_registered, 1);
}

#[rstest]
#[actix_web::test]
async fn deletions_are_persisted(data_dir: tempfile::TempDir) {
    let registry = a_fresh_registry(data_dir.path());
    let enrollment = register_and_enroll(Arc::clone(&registry)).await;
    let app = app_for!(registry);

    let uri = format!("/api/v1/students/{}", enrollment.student_id);
    let first = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(first.status(), StatusCode::OK);
    let second = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    let reopened = open_registry(data_dir.path());
    assert!(reopened.list_students().is_empty());
    let course = reopened
        .get_course(&enrollment.course_id)
        .expect("course kept");
    assert_eq!(course.total_registered, 1);
}

#[rstest]
#[core::prelude::v1::test]
fn unsupported_snapshot_version_fails_restore(data_dir: tempfile::TempDir) {
    std::fs::write(
        data_dir.path().join(SNAPSHOT_FILE),
        r#"{"version": 99, "courses": [], "students": [], "lessons": []}"#,
    )
    .expect("seed snapshot");
    let snapshots = JsonSnapshotRepository::open(data_dir.path(), SNAPSHOT_FILE)
        .expect("open snapshot repository");
    let registry = CourseRegistry::new(
        RegistryStores {
            courses: Arc::new(InMemoryEntityStore::new()),
            students: Arc::new(InMemoryEntityStore::new()),
            lessons: Arc::new(InMemoryEntityStore::new()),
        },
        Arc::new(DefaultClock),
        Arc::new(snapshots),
    );

    let err = registry.restore().expect_err("unsupported version");
    assert_eq!(err.to_string(), "unsupported snapshot version 99");
}
