//! Taskdesk: a minimal task management HTTP API.
//!
//! This crate provides create, list/filter, update, delete, and
//! toggle-complete operations on a single task entity, backed by a
//! relational store.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`config`]: Environment-derived process configuration
//! - [`http`]: Router, request validation, and response/error mapping
//! - [`task`]: Task domain, persistence ports and adapters, and services

pub mod config;
pub mod http;
pub mod task;
