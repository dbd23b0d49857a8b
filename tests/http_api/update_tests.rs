//! Partial update tests.

use super::helpers::{
    create_task, find_task_by_title, read_bytes, read_json, send_json, task_id, test_router,
};
use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::test(flavor = "multi_thread")]
async fn updating_only_the_title_preserves_the_description() {
    let router = test_router();
    create_task(&router, "Initial title", "Initial description").await;
    let id = task_id(&find_task_by_title(&router, "Initial title").await);

    let response = send_json(
        &router,
        "PUT",
        &format!("/tasks/{id}"),
        &json!({ "title": "Revised title" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(
        body.get("title").and_then(Value::as_str),
        Some("Revised title")
    );
    assert_eq!(
        body.get("description").and_then(Value::as_str),
        Some("Initial description")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn updating_only_the_description_preserves_the_title() {
    let router = test_router();
    create_task(&router, "Stable title", "Old description").await;
    let id = task_id(&find_task_by_title(&router, "Stable title").await);

    let response = send_json(
        &router,
        "PUT",
        &format!("/tasks/{id}"),
        &json!({ "description": "New description" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(
        body.get("title").and_then(Value::as_str),
        Some("Stable title")
    );
    assert_eq!(
        body.get("description").and_then(Value::as_str),
        Some("New description")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn an_empty_patch_succeeds_and_refreshes_updated_at() {
    let router = test_router();
    create_task(&router, "Untouched", "Still here").await;
    let before = find_task_by_title(&router, "Untouched").await;
    let id = task_id(&before);

    std::thread::sleep(std::time::Duration::from_millis(2));
    let response = send_json(&router, "PUT", &format!("/tasks/{id}"), &json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body.get("title"), before.get("title"));
    assert_ne!(body.get("updated_at"), before.get("updated_at"));
    assert_eq!(body.get("created_at"), before.get("created_at"));
}

#[tokio::test(flavor = "multi_thread")]
async fn updating_an_unknown_id_returns_404_with_an_empty_body() {
    let router = test_router();

    let response = send_json(
        &router,
        "PUT",
        &format!("/tasks/{}", Uuid::new_v4()),
        &json!({ "title": "No target" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_bytes(response).await;
    assert!(body.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn updating_with_a_malformed_id_returns_400() {
    let router = test_router();

    let response = send_json(
        &router,
        "PUT",
        "/tasks/not-a-uuid",
        &json!({ "title": "Irrelevant" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Validation error")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn updating_with_a_null_title_returns_400() {
    let router = test_router();
    create_task(&router, "Keep me", "As I am").await;
    let id = task_id(&find_task_by_title(&router, "Keep me").await);

    let response = send_json(
        &router,
        "PUT",
        &format!("/tasks/{id}"),
        &json!({ "title": null }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn a_rejected_update_does_not_touch_the_task() {
    let router = test_router();
    create_task(&router, "Keep me", "As I am").await;
    let before = find_task_by_title(&router, "Keep me").await;
    let id = task_id(&before);

    let response = send_json(
        &router,
        "PUT",
        &format!("/tasks/{id}"),
        &json!({ "title": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let after = find_task_by_title(&router, "Keep me").await;
    assert_eq!(after.get("updated_at"), before.get("updated_at"));
}
