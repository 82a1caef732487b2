//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical student record kept by the record store.
//! - Derive promotion eligibility from grade and attendance.
//!
//! # Invariants
//! - `roll_number` is the sole identity and never changes after creation.
//! - Both attendance counters start at zero.
//! - A record with `total_classes == 0` is never eligible.

use serde::{Deserialize, Serialize};

/// Caller-assigned student identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RollNumber = i64;

/// Minimum CGPA required for promotion.
pub const MIN_CGPA: f64 = 2.0;

/// Minimum `classes_attended / total_classes` ratio required for promotion.
pub const MIN_ATTENDANCE_RATIO: f64 = 0.7;

/// One enrolled student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Identity key used by every lookup.
    pub roll_number: RollNumber,
    /// Free-form display name.
    pub name: String,
    /// Free-form contact number; not validated.
    pub phone_number: String,
    /// Grade point average; range is not checked.
    pub cgpa: f64,
    /// Year of study; range is not checked.
    pub year_of_study: i32,
    /// Enrolled subjects in enrollment order.
    pub subjects_enrolled: Vec<String>,
    /// Classes held. No store operation increments this.
    pub total_classes: i64,
    /// Classes attended, advanced only by applied attendance deltas.
    pub classes_attended: i64,
}

impl StudentRecord {
    /// Creates a record with zeroed attendance and no subjects.
    pub fn new(
        roll_number: RollNumber,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        cgpa: f64,
        year_of_study: i32,
    ) -> Self {
        Self {
            roll_number,
            name: name.into(),
            phone_number: phone_number.into(),
            cgpa,
            year_of_study,
            subjects_enrolled: Vec::new(),
            total_classes: 0,
            classes_attended: 0,
        }
    }

    /// Appends one subject to the enrollment list.
    pub fn enroll(&mut self, subject: impl Into<String>) {
        self.subjects_enrolled.push(subject.into());
    }

    /// Returns `classes_attended / total_classes`, or `None` when no classes
    /// have been held.
    pub fn attendance_ratio(&self) -> Option<f64> {
        if self.total_classes == 0 {
            return None;
        }
        Some(self.classes_attended as f64 / self.total_classes as f64)
    }

    /// Returns whether this student meets both promotion thresholds.
    ///
    /// # Contract
    /// - `cgpa >= MIN_CGPA`.
    /// - `total_classes > 0` and attendance ratio `>= MIN_ATTENDANCE_RATIO`.
    pub fn is_eligible(&self) -> bool {
        self.cgpa >= MIN_CGPA
            && self
                .attendance_ratio()
                .is_some_and(|ratio| ratio >= MIN_ATTENDANCE_RATIO)
    }
}
