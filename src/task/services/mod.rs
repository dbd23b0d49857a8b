//! Application services for task operations.

mod tasks;

pub use tasks::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
