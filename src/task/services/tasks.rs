//! Service layer for task creation, listing, mutation, and deletion.

use crate::task::{
    domain::{Task, TaskDescription, TaskFilter, TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    /// Title for the new task.
    pub title: TaskTitle,
    /// Description for the new task.
    pub description: TaskDescription,
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task exists with the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            // A row that vanished between the existence check and the write
            // is a lost race with a concurrent delete, not an internal
            // fault.
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Each operation performs exactly one logical persistence operation, and
/// every mutating operation confirms existence before writing.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a new, not-yet-completed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let task = Task::new(request.title, request.description, &*self.clock);
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Lists tasks matching the filter in the store's natural order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, filter: &TaskFilter) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_many(filter).await?)
    }

    /// Applies a partial update to an existing task and returns it.
    ///
    /// Only fields present in the patch are replaced; `updated_at` is
    /// refreshed on every successful call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task with `id` exists.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        let mut task = self.get_existing(id).await?;
        task.apply_patch(patch, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Permanently removes an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task with `id` exists.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.get_existing(id).await?;
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Flips the completion state of an existing task and returns it.
    ///
    /// An open task gains a completion timestamp; a completed task is reset
    /// to open.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task with `id` exists.
    pub async fn toggle_completion(&self, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self.get_existing(id).await?;
        task.toggle_completion(&*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Internal lookup used before every mutating operation.
    async fn get_existing(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }
}
