//! Domain model for enrolled students and pending attendance.
//!
//! # Responsibility
//! - Define the record shape held by the student store.
//! - Define the delta shape buffered by the attendance queue.
//!
//! # Invariants
//! - Every student is identified by its caller-assigned `RollNumber`.
//! - Roll numbers are unique by convention only; nothing here enforces it.

pub mod attendance;
pub mod student;
