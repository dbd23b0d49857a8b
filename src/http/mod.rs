//! HTTP surface for the task API.
//!
//! Control flow per request: validator → (on failure: error mapper → 400) →
//! task service → (on not-found: 404) → response mapper.
//!
//! Routes:
//!
//! ```text
//! POST   /tasks
//! GET    /tasks
//! PUT    /tasks/{id}
//! DELETE /tasks/{id}
//! PATCH  /tasks/{id}/complete
//! ```

pub mod error;
pub mod routes;
pub mod validation;

#[cfg(test)]
mod tests;

use axum::Router;
use axum::routing::{get, patch, put};
use mockable::Clock;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::task::{ports::TaskRepository, services::TaskService};

/// Errors raised while running the HTTP server.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Failed to bind the listen address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address the bind was attempted on.
        addr: SocketAddr,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The server terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Builds the task API router over the given service.
pub fn build_router<R, C>(service: Arc<TaskService<R, C>>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/tasks",
            get(routes::tasks::list_tasks::<R, C>).post(routes::tasks::create_task::<R, C>),
        )
        .route(
            "/tasks/{id}",
            put(routes::tasks::update_task::<R, C>).delete(routes::tasks::delete_task::<R, C>),
        )
        .route(
            "/tasks/{id}/complete",
            patch(routes::tasks::toggle_complete::<R, C>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serves the task API until the process is stopped.
///
/// # Errors
///
/// Returns [`ServeError`] when the listen address cannot be bound or the
/// server loop fails.
pub async fn serve<R, C>(
    addr: SocketAddr,
    service: Arc<TaskService<R, C>>,
) -> Result<(), ServeError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let router = build_router(service);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    info!("task API listening on http://{addr}");
    axum::serve(listener, router).await.map_err(ServeError::Serve)
}
