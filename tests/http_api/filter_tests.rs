//! Listing and substring filter tests.

use super::helpers::{
    assert_single_task_titled, create_task, list_tasks, read_json, send, test_router,
};
use axum::http::StatusCode;
use serde_json::Value;

async fn seeded_router() -> axum::Router {
    let router = test_router();
    create_task(&router, "New task example 1", "Description example").await;
    create_task(&router, "Another text", "Another text").await;
    router
}

fn titles(tasks: &[Value]) -> Vec<&str> {
    tasks
        .iter()
        .filter_map(|task| task.get("title").and_then(Value::as_str))
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn unfiltered_listing_returns_all_tasks_in_creation_order() {
    let router = seeded_router().await;

    let tasks = list_tasks(&router).await;

    assert_eq!(titles(&tasks), vec!["New task example 1", "Another text"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn title_filter_returns_the_single_matching_task() {
    let router = seeded_router().await;

    let response = send(&router, "GET", "/tasks?title=New%20task%20example%201").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let tasks = body
        .get("tasks")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    assert_single_task_titled(&tasks, "New task example 1").expect("single match by title");
}

#[tokio::test(flavor = "multi_thread")]
async fn description_filter_returns_the_single_matching_task() {
    let router = seeded_router().await;

    let response = send(&router, "GET", "/tasks?description=Description%20example").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let tasks = body
        .get("tasks")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    assert_single_task_titled(&tasks, "New task example 1").expect("single match by description");
}

#[tokio::test(flavor = "multi_thread")]
async fn combined_filters_apply_conjunctively() {
    let router = seeded_router().await;

    let response = send(
        &router,
        "GET",
        "/tasks?title=Another&description=Description%20example",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let tasks = body
        .get("tasks")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    assert!(tasks.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_filter_values_are_ignored() {
    let router = seeded_router().await;

    let response = send(&router, "GET", "/tasks?title=&description=").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let tasks = body
        .get("tasks")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    assert_eq!(tasks.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn substring_matches_inside_the_field() {
    let router = seeded_router().await;

    let response = send(&router, "GET", "/tasks?title=task%20example").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let tasks = body
        .get("tasks")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    assert_eq!(titles(&tasks), vec!["New task example 1"]);
}
