//! Partial update parameter object for task mutations.

use super::{TaskDescription, TaskTitle};

/// Field-wise partial update for a task.
///
/// Absent fields leave the stored value untouched; the two fields are
/// independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title, when present.
    pub title: Option<TaskTitle>,
    /// Replacement description, when present.
    pub description: Option<TaskDescription>,
}

impl TaskPatch {
    /// Returns `true` when the patch carries no field changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}
