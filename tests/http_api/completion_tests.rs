//! Completion toggle tests.

use super::helpers::{
    create_task, find_task_by_title, read_bytes, read_json, send, task_id, test_router,
};
use axum::http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

async fn toggle(router: &axum::Router, id: &str) -> Value {
    let response = send(router, "PATCH", &format!("/tasks/{id}/complete")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    body.get("task").cloned().expect("response should wrap the task")
}

#[tokio::test(flavor = "multi_thread")]
async fn toggling_an_open_task_sets_the_completion_timestamp() {
    let router = test_router();
    create_task(&router, "Finish me", "One toggle").await;
    let id = task_id(&find_task_by_title(&router, "Finish me").await);

    let task = toggle(&router, &id).await;

    assert!(task.get("completed_at").and_then(Value::as_str).is_some());
    assert_eq!(task.get("completed_at"), task.get("updated_at"));
}

#[tokio::test(flavor = "multi_thread")]
async fn toggling_twice_restores_the_open_state() {
    let router = test_router();
    create_task(&router, "Flip flop", "Two toggles").await;
    let id = task_id(&find_task_by_title(&router, "Flip flop").await);

    toggle(&router, &id).await;
    let task = toggle(&router, &id).await;

    assert_eq!(task.get("completed_at"), Some(&Value::Null));
}

#[tokio::test(flavor = "multi_thread")]
async fn toggling_refreshes_updated_at() {
    let router = test_router();
    create_task(&router, "Timestamped", "Watch the clock").await;
    let before = find_task_by_title(&router, "Timestamped").await;
    let id = task_id(&before);

    std::thread::sleep(std::time::Duration::from_millis(2));
    let task = toggle(&router, &id).await;

    assert_ne!(task.get("updated_at"), before.get("updated_at"));
}

#[tokio::test(flavor = "multi_thread")]
async fn toggling_an_unknown_id_returns_404() {
    let router = test_router();

    let response = send(
        &router,
        "PATCH",
        &format!("/tasks/{}/complete", Uuid::new_v4()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_bytes(response).await;
    assert!(body.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn toggling_a_malformed_id_returns_400() {
    let router = test_router();

    let response = send(&router, "PATCH", "/tasks/oops/complete").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
