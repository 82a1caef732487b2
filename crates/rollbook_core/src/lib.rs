//! Core domain logic for Rollbook.
//! This crate owns the student record store and the deferred attendance queue.

pub mod logging;
pub mod model;
pub mod queue;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::attendance::AttendanceDelta;
pub use model::student::{RollNumber, StudentRecord, MIN_ATTENDANCE_RATIO, MIN_CGPA};
pub use queue::attendance_queue::{ApplyOutcome, AttendanceQueue};
pub use repo::student_repo::{
    InMemoryStudentRepository, RepoError, RepoResult, StudentRepository,
};
pub use service::student_service::{AddStudentRequest, StudentService, StudentView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
