//! Repository layer abstractions and in-memory implementation.
//!
//! # Responsibility
//! - Define the record-store contract used by services and the attendance queue.
//! - Keep storage layout details out of use-case orchestration.
//!
//! # Invariants
//! - Lookups scan in insertion order; the first matching roll wins.
//! - Roll-addressed writes return `NotFound` instead of silently no-oping.

pub mod student_repo;
