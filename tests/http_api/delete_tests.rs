//! Deletion and identifier validation tests.

use super::helpers::{
    create_task, find_task_by_title, list_tasks, read_bytes, send, task_id, test_router,
};
use axum::http::StatusCode;
use uuid::Uuid;

#[tokio::test(flavor = "multi_thread")]
async fn deleting_an_existing_task_removes_it_from_listings() {
    let router = test_router();
    create_task(&router, "Disposable", "Delete me").await;
    let id = task_id(&find_task_by_title(&router, "Disposable").await);

    let response = send(&router, "DELETE", &format!("/tasks/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_bytes(response).await;
    assert!(body.is_empty());
    assert!(list_tasks(&router).await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn deleting_an_unknown_well_formed_id_returns_404() {
    let router = test_router();

    let response = send(&router, "DELETE", &format!("/tasks/{}", Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_bytes(response).await;
    assert!(body.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_malformed_id_returns_400() {
    let router = test_router();

    let response = send(&router, "DELETE", "/tasks/42").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
