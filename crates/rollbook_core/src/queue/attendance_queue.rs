//! Last-in-first-out attendance journal.
//!
//! # Responsibility
//! - Buffer attendance deltas without checking their targets at push time.
//! - Apply buffered deltas to a repository on demand, newest first.
//!
//! # Invariants
//! - `apply_all` pops a delta only after it was applied successfully.
//! - On the first missing roll or counter overflow, the failing delta and
//!   everything below it stay queued in their original order.

use crate::model::attendance::AttendanceDelta;
use crate::model::student::RollNumber;
use crate::repo::student_repo::{RepoError, StudentRepository};
use log::{debug, info, warn};

/// Summary of one `apply_all` drain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Number of deltas applied and removed from the queue.
    pub applied: usize,
    /// Roll of the delta that stopped the drain because no student carries it.
    pub halted_on_missing_roll: Option<RollNumber>,
    /// Roll of the delta that stopped the drain because applying it would
    /// overflow the student's attended counter.
    pub halted_on_overflow_roll: Option<RollNumber>,
}

impl ApplyOutcome {
    /// Returns whether the drain stopped before emptying the queue.
    pub fn halted(&self) -> bool {
        self.halted_on_missing_roll.is_some() || self.halted_on_overflow_roll.is_some()
    }
}

/// Stack of pending attendance deltas.
#[derive(Debug, Default)]
pub struct AttendanceQueue {
    // Top of the stack is the last element.
    pending: Vec<AttendanceDelta>,
}

impl AttendanceQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a delta on top of the queue.
    pub fn mark_attendance(&mut self, roll: RollNumber, attended_increment: i64) {
        self.pending.push(AttendanceDelta::new(roll, attended_increment));
    }

    /// Applies deltas newest first until the queue is empty or a delta
    /// cannot be applied.
    ///
    /// # Contract
    /// - Never fails; a missing student or an overflowing counter is
    ///   reported in the outcome.
    /// - The blocking delta is left on top for a later retry or
    ///   `discard_top`.
    pub fn apply_all<R>(&mut self, repo: &mut R) -> ApplyOutcome
    where
        R: StudentRepository + ?Sized,
    {
        let mut outcome = ApplyOutcome::default();

        while let Some(delta) = self.pending.last().copied() {
            match repo.add_attended_classes(delta.roll_number, delta.attended_increment) {
                Ok(()) => {
                    self.pending.pop();
                    outcome.applied += 1;
                    debug!(
                        "event=attendance_delta module=queue status=ok roll={} increment={}",
                        delta.roll_number, delta.attended_increment
                    );
                }
                Err(RepoError::NotFound(roll)) => {
                    outcome.halted_on_missing_roll = Some(roll);
                    break;
                }
                Err(RepoError::AttendanceOverflow(roll)) => {
                    outcome.halted_on_overflow_roll = Some(roll);
                    break;
                }
            }
        }

        let halted = match (outcome.halted_on_missing_roll, outcome.halted_on_overflow_roll) {
            (Some(roll), _) => Some(("not_found", roll)),
            (None, Some(roll)) => Some(("overflow", roll)),
            (None, None) => None,
        };
        match halted {
            Some((reason, roll)) => warn!(
                "event=attendance_apply module=queue status=halted reason={} roll={} applied={} remaining={}",
                reason,
                roll,
                outcome.applied,
                self.pending.len()
            ),
            None => info!(
                "event=attendance_apply module=queue status=ok applied={}",
                outcome.applied
            ),
        }

        outcome
    }

    /// Returns the delta that the next drain would try first.
    pub fn peek(&self) -> Option<&AttendanceDelta> {
        self.pending.last()
    }

    /// Removes and returns the top delta without applying it.
    pub fn discard_top(&mut self) -> Option<AttendanceDelta> {
        let discarded = self.pending.pop();
        if let Some(delta) = discarded {
            info!(
                "event=attendance_discard module=queue status=ok roll={}",
                delta.roll_number
            );
        }
        discarded
    }

    /// Iterates pending deltas in drain order (top first).
    pub fn pending(&self) -> impl Iterator<Item = &AttendanceDelta> + '_ {
        self.pending.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
