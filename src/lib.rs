//! Trivia API Library
//!
//! This library provides the core functionality for the trivia backend,
//! including domain entities, repository contracts, the SQLite adapters and
//! the HTTP API layer.

pub mod api;
pub mod domain;
pub mod infrastructure;
