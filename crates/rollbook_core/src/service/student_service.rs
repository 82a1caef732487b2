//! Student use-case service.
//!
//! # Responsibility
//! - Provide the caller-facing add/search/enroll/attendance/list entry points.
//! - Own one record store and one attendance queue per session.
//!
//! # Invariants
//! - Service APIs never bypass repository lookup contracts.
//! - `clear` drops records only; queued deltas survive for a later drain.
//! - Log events carry roll numbers and counts, never names or phone numbers.

use crate::model::attendance::AttendanceDelta;
use crate::model::student::{RollNumber, StudentRecord};
use crate::queue::attendance_queue::{ApplyOutcome, AttendanceQueue};
use crate::repo::student_repo::{RepoResult, StudentRepository};
use log::{info, warn};
use serde::Serialize;

/// Request model for registering a student together with initial subjects.
#[derive(Debug, Clone, PartialEq)]
pub struct AddStudentRequest {
    pub roll_number: RollNumber,
    pub name: String,
    pub phone_number: String,
    pub cgpa: f64,
    pub year_of_study: i32,
    /// Enrolled in order after the record is appended.
    pub subjects: Vec<String>,
}

/// Listing projection: a stored record plus derived eligibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentView<'a> {
    #[serde(flatten)]
    pub record: &'a StudentRecord,
    /// `None` while no classes have been held.
    pub attendance_ratio: Option<f64>,
    pub eligible: bool,
}

impl<'a> From<&'a StudentRecord> for StudentView<'a> {
    fn from(record: &'a StudentRecord) -> Self {
        Self {
            record,
            attendance_ratio: record.attendance_ratio(),
            eligible: record.is_eligible(),
        }
    }
}

/// Use-case service over a student repository and its attendance queue.
pub struct StudentService<R: StudentRepository> {
    repo: R,
    queue: AttendanceQueue,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service with an empty attendance queue.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            queue: AttendanceQueue::new(),
        }
    }

    /// Appends a new student with zeroed attendance and no subjects.
    ///
    /// Duplicate roll numbers are accepted; later lookups see the first one.
    pub fn add_student(
        &mut self,
        roll: RollNumber,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        cgpa: f64,
        year_of_study: i32,
    ) {
        self.repo.add_student(StudentRecord::new(
            roll,
            name,
            phone_number,
            cgpa,
            year_of_study,
        ));
        info!(
            "event=student_add module=service status=ok roll={} total={}",
            roll,
            self.repo.len()
        );
    }

    /// Appends a student, then enrolls each requested subject in order.
    ///
    /// # Errors
    /// - Propagates `NotFound` from enrollment, which only happens when the
    ///   repository drops the record it was just given.
    pub fn register_student(&mut self, request: &AddStudentRequest) -> RepoResult<()> {
        self.add_student(
            request.roll_number,
            request.name.clone(),
            request.phone_number.clone(),
            request.cgpa,
            request.year_of_study,
        );
        for subject in &request.subjects {
            self.enroll_subject(request.roll_number, subject)?;
        }
        Ok(())
    }

    /// Enrolls `subject` on the first student carrying `roll`.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no student carries `roll`; nothing is
    ///   mutated in that case.
    pub fn enroll_subject(&mut self, roll: RollNumber, subject: &str) -> RepoResult<()> {
        self.repo.enroll_subject(roll, subject).inspect_err(|_| {
            warn!("event=subject_enroll module=service status=not_found roll={roll}");
        })
    }

    /// Returns the first student carrying `roll`.
    pub fn find_by_roll(&self, roll: RollNumber) -> Option<&StudentRecord> {
        self.repo.find_by_roll(roll)
    }

    /// Queues an attendance delta; the roll is checked only when applied.
    pub fn mark_attendance(&mut self, roll: RollNumber, attended: i64) {
        self.queue.mark_attendance(roll, attended);
    }

    /// Drains queued deltas newest first, halting on the first missing roll or
    /// counter overflow.
    pub fn apply_all_attendance(&mut self) -> ApplyOutcome {
        self.queue.apply_all(&mut self.repo)
    }

    /// Drops the delta blocking the next drain without applying it.
    pub fn discard_pending_attendance(&mut self) -> Option<AttendanceDelta> {
        self.queue.discard_top()
    }

    /// Number of deltas still waiting to be applied.
    pub fn pending_attendance(&self) -> usize {
        self.queue.len()
    }

    /// Read-only access to the attendance queue.
    pub fn attendance_queue(&self) -> &AttendanceQueue {
        &self.queue
    }

    /// Returns every student in insertion order.
    pub fn list_all(&self) -> &[StudentRecord] {
        self.repo.list_all()
    }

    /// Returns every student in insertion order with derived eligibility.
    pub fn list_views(&self) -> Vec<StudentView<'_>> {
        self.repo.list_all().iter().map(StudentView::from).collect()
    }

    /// Drops every student record.
    pub fn clear(&mut self) {
        let dropped = self.repo.len();
        self.repo.clear();
        info!(
            "event=store_clear module=service status=ok dropped={} pending={}",
            dropped,
            self.queue.len()
        );
    }
}
