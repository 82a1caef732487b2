//! Pending attendance updates.

use crate::model::student::RollNumber;
use serde::{Deserialize, Serialize};

/// One queued increment to a student's attended-class counter.
///
/// Owned by `AttendanceQueue` until it is applied or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDelta {
    /// Target student. Existence is only checked when the delta is applied.
    pub roll_number: RollNumber,
    /// Added to `classes_attended` as-is; may be zero or negative.
    pub attended_increment: i64,
}

impl AttendanceDelta {
    pub fn new(roll_number: RollNumber, attended_increment: i64) -> Self {
        Self {
            roll_number,
            attended_increment,
        }
    }
}
