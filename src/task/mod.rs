//! Task record management.
//!
//! This module implements the task entity and its five operations: create,
//! list with substring filters, partial update, delete, and completion
//! toggling. Every mutating operation confirms existence first; a row that
//! disappears between the check and the write surfaces as not-found rather
//! than an internal failure. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
