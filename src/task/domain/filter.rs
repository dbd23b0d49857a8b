//! Substring filter parameter object for task listings.

use super::Task;

/// Optional substring restrictions applied when listing tasks.
///
/// A present field restricts results to tasks whose corresponding field
/// contains the given substring; both restrictions combine with logical
/// AND. Matching is case-sensitive in every adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Title substring restriction.
    pub title: Option<String>,
    /// Description substring restriction.
    pub description: Option<String>,
}

impl TaskFilter {
    /// Returns `true` when no restriction is applied.
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    /// Returns `true` when the task satisfies every present restriction.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let title_matches = self
            .title
            .as_deref()
            .is_none_or(|needle| task.title().as_str().contains(needle));
        let description_matches = self
            .description
            .as_deref()
            .is_none_or(|needle| task.description().as_str().contains(needle));
        title_matches && description_matches
    }
}
