//! Tests for the course catalog.

use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::test_support::{caller, course_catalog, course_payload, epoch, stepping_clock};

#[rstest]
fn register_keys_course_by_caller() {
    let catalog = course_catalog(stepping_clock());

    let course = catalog
        .register(caller("principal-a"), course_payload("Intro"))
        .expect("register succeeds");

    assert_eq!(course.id.as_ref(), "principal-a");
    assert_eq!(course.total_registered, 0);
    assert_eq!(course.created_at, epoch());
    assert!(course.updated_at.is_none());
    assert_eq!(catalog.get(&course.id), Some(course));
}

#[rstest]
#[case::blank_title(|p: &mut CreateCoursePayload| { p.course_title = "  ".to_owned(); }, "course_title")]
#[case::blank_description(|p: &mut CreateCoursePayload| { p.course_description = String::new(); }, "course_description")]
#[case::bad_image(|p: &mut CreateCoursePayload| { p.course_image = "not a url".to_owned(); }, "course_image")]
#[case::bad_video(|p: &mut CreateCoursePayload| { p.course_introductory_video_url = String::new(); }, "course_introductory_video_url")]
#[case::blank_benefit(|p: &mut CreateCoursePayload| { p.course_benefit = String::new(); }, "course_benefit")]
fn register_rejects_invalid_payloads(
    #[case] mutate: fn(&mut CreateCoursePayload),
    #[case] field: &str,
) {
    let catalog = course_catalog(stepping_clock());
    let mut payload = course_payload("Intro");
    mutate(&mut payload);

    let err = catalog
        .register(caller("principal-a"), payload)
        .expect_err("invalid payload");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    let details = err.details().expect("field details");
    assert_eq!(details["field"], field);
    assert!(catalog.list().is_empty());
}

#[rstest]
fn re_registration_keeps_count_and_creation_time() {
    let clock = stepping_clock();
    let catalog = course_catalog(clock.clone());
    let first = catalog
        .register(caller("principal-a"), course_payload("Intro"))
        .expect("first register");
    catalog.bump_registration(&first.id).expect("bump");
    clock.advance_seconds(60);

    let second = catalog
        .register(caller("principal-a"), course_payload("Intro, revised"))
        .expect("second register");

    assert_eq!(second.course_title, "Intro, revised");
    assert_eq!(second.total_registered, 1);
    assert_eq!(second.created_at, epoch());
    assert_eq!(second.updated_at, Some(clock.utc()));
    assert_eq!(catalog.list().len(), 1);
}

#[rstest]
fn bump_registration_increments_and_stamps_update() {
    let clock = stepping_clock();
    let catalog = course_catalog(clock.clone());
    let course = catalog
        .register(caller("principal-a"), course_payload("Intro"))
        .expect("register");
    clock.advance_seconds(5);

    let bumped = catalog.bump_registration(&course.id).expect("bump");

    assert_eq!(bumped.total_registered, 1);
    assert_eq!(bumped.updated_at, Some(clock.utc()));
    assert_eq!(catalog.get(&course.id), Some(bumped));
}

#[rstest]
fn bump_registration_on_missing_course_is_not_found() {
    let catalog = course_catalog(stepping_clock());
    let id = CourseId::new("ghost").expect("id");

    let err = catalog.bump_registration(&id).expect_err("missing course");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
fn delete_twice_reports_not_found_the_second_time() {
    let catalog = course_catalog(stepping_clock());
    let course = catalog
        .register(caller("principal-a"), course_payload("Intro"))
        .expect("register");

    let removed = catalog.delete(&course.id).expect("first delete");
    let err = catalog.delete(&course.id).expect_err("second delete");

    assert_eq!(removed, course);
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(
        err.message(),
        "couldn't delete course principal-a: course not found"
    );
    assert!(!catalog.contains(&course.id));
}
