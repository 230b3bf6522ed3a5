//! Trivia API Library
//!
//! HTTP API for a trivia game: categories, paginated questions, search,
//! question management and random quiz selection, backed by PostgreSQL.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
