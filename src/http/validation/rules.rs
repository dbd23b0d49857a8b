//! Field-level validation rules for request payloads.
//!
//! Each rule is a pure function over the parsed JSON payload, returning the
//! extracted value or a [`FieldIssue`] attributing the failure to a named
//! field. Callers aggregate issues across rules.

use super::FieldIssue;
use crate::task::domain::{TaskDescription, TaskId, TaskTitle};
use serde_json::{Map, Value};

/// Requires the payload to be a JSON object.
pub(super) fn require_object(body: &Value) -> Result<&Map<String, Value>, FieldIssue> {
    body.as_object()
        .ok_or_else(|| FieldIssue::new("body", "expected a JSON object"))
}

/// Requires `field` to be present as text.
pub(super) fn required_text<'a>(
    object: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a str, FieldIssue> {
    match object.get(field) {
        None => Err(FieldIssue::new(field, "is required")),
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(FieldIssue::new(field, "must be a string")),
    }
}

/// Reads `field` as optional text; absence is valid, any other type
/// (including null) is not.
pub(super) fn optional_text<'a>(
    object: &'a Map<String, Value>,
    field: &str,
) -> Result<Option<&'a str>, FieldIssue> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(FieldIssue::new(field, "must be a string")),
    }
}

/// Builds a validated title, attributing domain failures to `field`.
pub(super) fn task_title(raw: &str, field: &str) -> Result<TaskTitle, FieldIssue> {
    TaskTitle::new(raw).map_err(|err| FieldIssue::new(field, err.to_string()))
}

/// Builds a validated description, attributing domain failures to `field`.
pub(super) fn task_description(raw: &str, field: &str) -> Result<TaskDescription, FieldIssue> {
    TaskDescription::new(raw).map_err(|err| FieldIssue::new(field, err.to_string()))
}

/// Parses a canonical UUID task identifier.
pub(super) fn task_id(raw: &str) -> Result<TaskId, FieldIssue> {
    TaskId::parse(raw).map_err(|err| FieldIssue::new("id", err.to_string()))
}
