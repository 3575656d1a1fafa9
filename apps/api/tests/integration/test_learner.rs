use super::helpers::{
    InMemoryCourseRepository, assert_status, course, enrollment, get, get_as, read_json,
    spawn_app, token_for, watch_record,
};
use axum::http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

#[tokio::test]
async fn watch_history_requires_token() {
    let app = spawn_app(InMemoryCourseRepository::default());

    let res = get(&app, "/api/v1/videos/history").await;
    assert_status(res.status(), StatusCode::FORBIDDEN);

    let res = get_as(&app, "/api/v1/videos/history", "not-a-jwt").await;
    assert_status(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn watch_history_only_shows_callers_records() {
    let user_id = Uuid::now_v7();
    let other_id = Uuid::now_v7();
    let repo = InMemoryCourseRepository {
        history: vec![
            watch_record(user_id, 10),
            watch_record(other_id, 5),
            watch_record(user_id, 1),
            watch_record(user_id, 20),
        ],
        ..Default::default()
    };
    let app = spawn_app(repo);

    let res = get_as(&app, "/api/v1/videos/history?limit=2", &token_for(user_id)).await;
    assert_status(res.status(), StatusCode::OK);
    let payload: Value = read_json(res).await;

    let data = payload["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 2);
    assert!(
        data.iter()
            .all(|r| r["user_id"].as_str() == Some(user_id.to_string().as_str()))
    );
    assert_eq!(payload["pagination"]["total_items"].as_i64(), Some(3));
    assert_eq!(payload["pagination"]["total_pages"].as_i64(), Some(2));
}

#[tokio::test]
async fn enrollments_are_joined_with_courses() {
    let user_id = Uuid::now_v7();
    let speaking = course("Speaking Part 2", 0);
    let reading = course("Academic Reading", 0);
    let repo = InMemoryCourseRepository {
        enrollments: vec![
            enrollment(user_id, speaking.id, 5),
            enrollment(user_id, reading.id, 50),
            enrollment(Uuid::now_v7(), reading.id, 1),
        ],
        courses: vec![speaking, reading],
        ..Default::default()
    };
    let app = spawn_app(repo);

    let res = get_as(&app, "/api/v1/enrollments/my", &token_for(user_id)).await;
    assert_status(res.status(), StatusCode::OK);
    let payload: Value = read_json(res).await;

    assert_eq!(
        payload["data"][0]["course"]["title"].as_str(),
        Some("Speaking Part 2")
    );
    assert_eq!(
        payload["data"][1]["course"]["title"].as_str(),
        Some("Academic Reading")
    );
    assert_eq!(
        payload["data"][0]["enrollment"]["user_id"].as_str(),
        Some(user_id.to_string().as_str())
    );
    assert_eq!(payload["pagination"]["total_items"].as_i64(), Some(2));
    assert_eq!(payload["pagination"]["limit"].as_i64(), Some(20));
}

#[tokio::test]
async fn enrollments_with_deleted_course_are_skipped_but_counted() {
    let user_id = Uuid::now_v7();
    let kept = course("Writing Task 2", 0);
    let repo = InMemoryCourseRepository {
        enrollments: vec![
            enrollment(user_id, kept.id, 5),
            enrollment(user_id, Uuid::now_v7(), 10),
        ],
        courses: vec![kept],
        ..Default::default()
    };
    let app = spawn_app(repo);

    let res = get_as(&app, "/api/v1/enrollments/my", &token_for(user_id)).await;
    assert_status(res.status(), StatusCode::OK);
    let payload: Value = read_json(res).await;

    assert_eq!(payload["data"].as_array().map(|v| v.len()), Some(1));
    assert_eq!(payload["pagination"]["total_items"].as_i64(), Some(2));
}

#[tokio::test]
async fn enrollments_require_token() {
    let app = spawn_app(InMemoryCourseRepository::default());

    let res = get(&app, "/api/v1/enrollments/my").await;
    assert_status(res.status(), StatusCode::FORBIDDEN);
    let payload: Value = read_json(res).await;
    assert_eq!(payload["error"].as_str(), Some("Access denied"));
}
