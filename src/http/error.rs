//! Response mapping for service outcomes and request failures.
//!
//! Three outcome categories exist: validation failures become 400 with a
//! structured list of violated fields, not-found becomes 404 with an empty
//! body, and everything else becomes a generic 500 whose cause is logged
//! but never sent to the caller.

use super::validation::ValidationRejection;
use crate::task::services::TaskServiceError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

/// Error surfaced to API callers.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing request input.
    Validation(ValidationRejection),

    /// A well-formed identifier with no matching stored task.
    NotFound,

    /// Any other failure; classified, logged, and masked.
    Internal(TaskServiceError),
}

impl From<ValidationRejection> for ApiError {
    fn from(rejection: ValidationRejection) -> Self {
        Self::Validation(rejection)
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Validation error",
                    "issues": rejection.issues(),
                })),
            )
                .into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Internal(cause) => {
                error!(%cause, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
