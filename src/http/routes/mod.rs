//! Route handlers for the task API.

pub mod tasks;
