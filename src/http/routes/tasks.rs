//! Task route handlers.
//!
//! Each handler validates its raw input, invokes exactly one service
//! operation, and maps the outcome through [`ApiError`].

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::http::error::ApiError;
use crate::http::validation::{self, ValidationRejection};
use crate::task::domain::{Task, TaskFilter};
use crate::task::ports::TaskRepository;
use crate::task::services::{CreateTaskRequest, TaskService};

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Title substring filter.
    pub title: Option<String>,
    /// Description substring filter.
    pub description: Option<String>,
}

/// Response envelope for task listings.
#[derive(Debug, Clone, Serialize)]
pub struct TaskListResponse {
    /// Matching tasks in store order.
    pub tasks: Vec<Task>,
}

/// Response envelope for the completion toggle.
#[derive(Debug, Clone, Serialize)]
pub struct ToggledTaskResponse {
    /// The task after the toggle.
    pub task: Task,
}

/// `POST /tasks` — creates a task from a JSON body.
pub async fn create_task<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(payload) = body.map_err(reject_body)?;
    let input = validation::validate_create_body(&payload)?;
    service
        .create(CreateTaskRequest {
            title: input.title,
            description: input.description,
        })
        .await?;
    Ok(StatusCode::CREATED)
}

/// `GET /tasks` — lists tasks, optionally restricted by substring filters.
pub async fn list_tasks<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> Result<Json<TaskListResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(params) = query.map_err(reject_query)?;
    let tasks = service.list(&filter_from_query(params)).await?;
    Ok(Json(TaskListResponse { tasks }))
}

/// `PUT /tasks/{id}` — partially updates title and/or description.
pub async fn update_task<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = validation::validate_task_id(&id)?;
    let Json(payload) = body.map_err(reject_body)?;
    let patch = validation::validate_update_body(&payload)?;
    let task = service.update(task_id, patch).await?;
    Ok(Json(task))
}

/// `DELETE /tasks/{id}` — permanently removes a task.
pub async fn delete_task<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = validation::validate_task_id(&id)?;
    service.delete(task_id).await?;
    Ok(StatusCode::OK)
}

/// `PATCH /tasks/{id}/complete` — flips the completion state.
pub async fn toggle_complete<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    Path(id): Path<String>,
) -> Result<Json<ToggledTaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = validation::validate_task_id(&id)?;
    let task = service.toggle_completion(task_id).await?;
    Ok(Json(ToggledTaskResponse { task }))
}

/// Converts query parameters into a domain filter.
///
/// Empty values behave as absent filters.
fn filter_from_query(params: ListTasksQuery) -> TaskFilter {
    TaskFilter {
        title: params.title.filter(|text| !text.is_empty()),
        description: params.description.filter(|text| !text.is_empty()),
    }
}

fn reject_body(rejection: JsonRejection) -> ValidationRejection {
    ValidationRejection::single("body", rejection.body_text())
}

fn reject_query(rejection: QueryRejection) -> ValidationRejection {
    ValidationRejection::single("query", rejection.body_text())
}
