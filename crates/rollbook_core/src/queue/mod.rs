//! Deferred update buffers drained against the record store.
//!
//! # Responsibility
//! - Hold pending attendance deltas until a caller asks for bulk application.
//!
//! # Invariants
//! - Draining is last-in-first-out.
//! - A drain halts at the first delta whose student is missing.

pub mod attendance_queue;
