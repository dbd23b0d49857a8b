//! Schema validation for task API requests.
//!
//! Each operation's input contract is declared as a set of field rules
//! evaluated uniformly over the parsed request payload. Violations are
//! aggregated into a single [`ValidationRejection`] naming every offending
//! field, rather than failing on the first one. Validation runs before any
//! persistence access.

mod rules;

use crate::task::domain::{TaskDescription, TaskId, TaskPatch, TaskTitle};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A single violated field and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Name of the offending field.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl FieldIssue {
    /// Creates a field issue.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Aggregated validation failure for one request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("request validation failed: {}", format_issues(.issues))]
pub struct ValidationRejection {
    issues: Vec<FieldIssue>,
}

impl ValidationRejection {
    /// Creates a rejection from the collected issues.
    #[must_use]
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Creates a rejection with a single issue.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldIssue::new(field, message)])
    }

    /// Returns the violated fields.
    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validated create-task input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskInput {
    /// Validated title.
    pub title: TaskTitle,
    /// Validated description.
    pub description: TaskDescription,
}

/// Validates the create-task request body.
///
/// Both `title` and `description` are required non-empty strings.
///
/// # Errors
///
/// Returns [`ValidationRejection`] naming every violated field.
pub fn validate_create_body(body: &Value) -> Result<CreateTaskInput, ValidationRejection> {
    let object = rules::require_object(body).map_err(|issue| ValidationRejection::new(vec![issue]))?;

    let mut issues = Vec::new();
    let checked_title = collect_issue(
        rules::required_text(object, "title").and_then(|raw| rules::task_title(raw, "title")),
        &mut issues,
    );
    let checked_description = collect_issue(
        rules::required_text(object, "description")
            .and_then(|raw| rules::task_description(raw, "description")),
        &mut issues,
    );

    if let (Some(title), Some(description)) = (checked_title, checked_description) {
        return Ok(CreateTaskInput { title, description });
    }
    Err(ValidationRejection::new(issues))
}

/// Validates the update-task request body.
///
/// `title` and `description` are both optional, but must be non-empty
/// strings when present; an empty object is a valid empty patch.
///
/// # Errors
///
/// Returns [`ValidationRejection`] naming every violated field.
pub fn validate_update_body(body: &Value) -> Result<TaskPatch, ValidationRejection> {
    let object = rules::require_object(body).map_err(|issue| ValidationRejection::new(vec![issue]))?;

    let mut issues = Vec::new();
    let checked_title = collect_issue(
        rules::optional_text(object, "title")
            .and_then(|maybe| maybe.map(|raw| rules::task_title(raw, "title")).transpose()),
        &mut issues,
    );
    let checked_description = collect_issue(
        rules::optional_text(object, "description").and_then(|maybe| {
            maybe
                .map(|raw| rules::task_description(raw, "description"))
                .transpose()
        }),
        &mut issues,
    );

    if issues.is_empty() {
        return Ok(TaskPatch {
            title: checked_title.flatten(),
            description: checked_description.flatten(),
        });
    }
    Err(ValidationRejection::new(issues))
}

/// Validates a path-embedded task identifier.
///
/// Only the canonical hyphenated UUID form is accepted; anything else is a
/// validation failure, never a not-found.
///
/// # Errors
///
/// Returns [`ValidationRejection`] with a single `id` issue.
pub fn validate_task_id(raw: &str) -> Result<TaskId, ValidationRejection> {
    rules::task_id(raw).map_err(|issue| ValidationRejection::new(vec![issue]))
}

/// Moves the error, if any, into `issues` and returns the success value.
fn collect_issue<T>(result: Result<T, FieldIssue>, issues: &mut Vec<FieldIssue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(issue) => {
            issues.push(issue);
            None
        }
    }
}
