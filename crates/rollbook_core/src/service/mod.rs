//! Core use-case services.
//!
//! # Responsibility
//! - Combine the record store and attendance queue into caller-level APIs.
//! - Keep drivers (CLI, tests) decoupled from storage details.

pub mod student_service;
