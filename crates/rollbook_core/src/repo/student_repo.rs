//! Student repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide append, lookup and roll-addressed mutation over student records.
//! - Own every stored record exclusively; callers only see shared borrows.
//!
//! # Invariants
//! - Records keep insertion order for their whole lifetime.
//! - Duplicate roll numbers are accepted; lookups resolve to the earliest.
//! - A failed roll-addressed write leaves every record untouched.

use crate::model::student::{RollNumber, StudentRecord};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for roll-addressed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoError {
    NotFound(RollNumber),
    /// Applying the increment would overflow `classes_attended`.
    AttendanceOverflow(RollNumber),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(roll) => write!(f, "student not found: roll {roll}"),
            Self::AttendanceOverflow(roll) => {
                write!(f, "attendance counter overflow: roll {roll}")
            }
        }
    }
}

impl Error for RepoError {}

/// Repository interface for the student record store.
pub trait StudentRepository {
    /// Appends a record after every existing one. No constraints are checked.
    fn add_student(&mut self, record: StudentRecord);

    /// Returns the first record in insertion order whose roll matches.
    fn find_by_roll(&self, roll: RollNumber) -> Option<&StudentRecord>;

    /// Appends `subject` to the first matching record.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no record carries `roll`.
    fn enroll_subject(&mut self, roll: RollNumber, subject: &str) -> RepoResult<()>;

    /// Adds `increment` to the first matching record's `classes_attended`.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no record carries `roll`.
    /// - `RepoError::AttendanceOverflow` when the sum leaves the `i64` range;
    ///   the counter is left unchanged.
    fn add_attended_classes(&mut self, roll: RollNumber, increment: i64) -> RepoResult<()>;

    /// Returns every record in insertion order.
    fn list_all(&self) -> &[StudentRecord];

    /// Drops every record.
    fn clear(&mut self);

    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vector-backed student repository with linear roll lookup.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    records: Vec<StudentRecord>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_by_roll_mut(&mut self, roll: RollNumber) -> RepoResult<&mut StudentRecord> {
        self.records
            .iter_mut()
            .find(|record| record.roll_number == roll)
            .ok_or(RepoError::NotFound(roll))
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn add_student(&mut self, record: StudentRecord) {
        self.records.push(record);
    }

    fn find_by_roll(&self, roll: RollNumber) -> Option<&StudentRecord> {
        self.records.iter().find(|record| record.roll_number == roll)
    }

    fn enroll_subject(&mut self, roll: RollNumber, subject: &str) -> RepoResult<()> {
        self.find_by_roll_mut(roll)?.enroll(subject);
        Ok(())
    }

    fn add_attended_classes(&mut self, roll: RollNumber, increment: i64) -> RepoResult<()> {
        let record = self.find_by_roll_mut(roll)?;
        record.classes_attended = record
            .classes_attended
            .checked_add(increment)
            .ok_or(RepoError::AttendanceOverflow(roll))?;
        Ok(())
    }

    fn list_all(&self) -> &[StudentRecord] {
        &self.records
    }

    fn clear(&mut self) {
        self.records.clear();
    }
}
