//! Domain model for task records.
//!
//! The task domain models a single to-do entry with validated text fields
//! and a nullable completion timestamp, keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod filter;
mod ids;
mod patch;
mod task;
mod text;

pub use error::{ParseTaskIdError, TaskDomainError};
pub use filter::TaskFilter;
pub use ids::TaskId;
pub use patch::TaskPatch;
pub use task::{PersistedTaskData, Task};
pub use text::{TaskDescription, TaskTitle};
