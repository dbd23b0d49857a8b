//! Unit tests for the HTTP layer.
