//! Identifier types for the task domain.

use super::ParseTaskIdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a task identifier from its canonical hyphenated form.
    ///
    /// Only the 36-character hyphenated representation is accepted;
    /// `Uuid::try_parse` alone would also admit the simple and URN forms.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskIdError`] when the value is not a canonical UUID.
    pub fn parse(value: &str) -> Result<Self, ParseTaskIdError> {
        if value.len() != uuid::fmt::Hyphenated::LENGTH {
            return Err(ParseTaskIdError(value.to_owned()));
        }
        Uuid::try_parse(value)
            .map(Self)
            .map_err(|_| ParseTaskIdError(value.to_owned()))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
