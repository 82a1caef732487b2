use rollbook_core::{
    AttendanceDelta, AttendanceQueue, InMemoryStudentRepository, RepoResult, StudentRecord,
    StudentRepository,
};

/// Repository wrapper that records the order of attendance writes.
struct RecordingRepository {
    inner: InMemoryStudentRepository,
    writes: Vec<(i64, i64)>,
}

impl RecordingRepository {
    fn with_rolls(rolls: &[i64]) -> Self {
        let mut inner = InMemoryStudentRepository::new();
        for roll in rolls {
            inner.add_student(StudentRecord::new(*roll, "student", "555-0100", 3.0, 1));
        }
        Self {
            inner,
            writes: Vec::new(),
        }
    }
}

impl StudentRepository for RecordingRepository {
    fn add_student(&mut self, record: StudentRecord) {
        self.inner.add_student(record);
    }

    fn find_by_roll(&self, roll: i64) -> Option<&StudentRecord> {
        self.inner.find_by_roll(roll)
    }

    fn enroll_subject(&mut self, roll: i64, subject: &str) -> RepoResult<()> {
        self.inner.enroll_subject(roll, subject)
    }

    fn add_attended_classes(&mut self, roll: i64, increment: i64) -> RepoResult<()> {
        self.inner.add_attended_classes(roll, increment)?;
        self.writes.push((roll, increment));
        Ok(())
    }

    fn list_all(&self) -> &[StudentRecord] {
        self.inner.list_all()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

#[test]
fn deltas_for_one_student_apply_newest_first_and_sum() {
    let mut repo = RecordingRepository::with_rolls(&[1]);
    let mut queue = AttendanceQueue::new();
    queue.mark_attendance(1, 5);
    queue.mark_attendance(1, 3);

    let outcome = queue.apply_all(&mut repo);

    assert_eq!(outcome.applied, 2);
    assert_eq!(outcome.halted_on_missing_roll, None);
    assert_eq!(repo.writes, vec![(1, 3), (1, 5)]);
    assert_eq!(repo.find_by_roll(1).unwrap().classes_attended, 8);
    assert!(queue.is_empty());
}

#[test]
fn newest_delta_drains_first_across_students() {
    let mut repo = RecordingRepository::with_rolls(&[1, 2, 3]);
    let mut queue = AttendanceQueue::new();
    queue.mark_attendance(1, 10);
    queue.mark_attendance(2, 20);
    queue.mark_attendance(3, 30);

    queue.apply_all(&mut repo);

    assert_eq!(repo.writes, vec![(3, 30), (2, 20), (1, 10)]);
}

#[test]
fn newer_present_roll_applies_before_halting_on_older_missing_roll() {
    // Roll 1 is marked first but absent; roll 2 is marked last and present.
    let mut repo = RecordingRepository::with_rolls(&[2]);
    let mut queue = AttendanceQueue::new();
    queue.mark_attendance(1, 4);
    queue.mark_attendance(2, 6);

    let outcome = queue.apply_all(&mut repo);

    assert_eq!(outcome.applied, 1);
    assert_eq!(outcome.halted_on_missing_roll, Some(1));
    assert_eq!(repo.find_by_roll(2).unwrap().classes_attended, 6);
    assert_eq!(
        queue.pending().copied().collect::<Vec<_>>(),
        vec![AttendanceDelta::new(1, 4)]
    );
}

#[test]
fn missing_roll_halts_and_leaves_queue_unchanged() {
    let mut repo = RecordingRepository::with_rolls(&[1]);
    let mut queue = AttendanceQueue::new();
    queue.mark_attendance(99, 2);

    let outcome = queue.apply_all(&mut repo);

    assert_eq!(outcome.applied, 0);
    assert_eq!(outcome.halted_on_missing_roll, Some(99));
    assert!(outcome.halted());
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.peek(), Some(&AttendanceDelta::new(99, 2)));
    assert!(repo.writes.is_empty());
}

#[test]
fn deltas_below_blocker_wait_until_it_is_discarded() {
    let mut repo = RecordingRepository::with_rolls(&[1]);
    let mut queue = AttendanceQueue::new();
    queue.mark_attendance(1, 2);
    queue.mark_attendance(99, 5);

    let first = queue.apply_all(&mut repo);
    assert_eq!(first.applied, 0);
    assert_eq!(first.halted_on_missing_roll, Some(99));

    // A delta pushed above the blocker is drained before hitting it again.
    queue.mark_attendance(1, 1);
    let second = queue.apply_all(&mut repo);
    assert_eq!(second.applied, 1);
    assert_eq!(second.halted_on_missing_roll, Some(99));
    assert_eq!(repo.find_by_roll(1).unwrap().classes_attended, 1);

    assert_eq!(queue.discard_top(), Some(AttendanceDelta::new(99, 5)));
    let third = queue.apply_all(&mut repo);
    assert_eq!(third.applied, 1);
    assert_eq!(third.halted_on_missing_roll, None);
    assert_eq!(repo.find_by_roll(1).unwrap().classes_attended, 3);
    assert!(queue.is_empty());
}

#[test]
fn blocker_resolves_once_student_is_added() {
    let mut repo = RecordingRepository::with_rolls(&[]);
    let mut queue = AttendanceQueue::new();
    queue.mark_attendance(5, 9);

    assert_eq!(queue.apply_all(&mut repo).halted_on_missing_roll, Some(5));

    repo.add_student(StudentRecord::new(5, "late", "555-0105", 2.5, 1));
    let outcome = queue.apply_all(&mut repo);

    assert_eq!(outcome.applied, 1);
    assert_eq!(repo.find_by_roll(5).unwrap().classes_attended, 9);
}

#[test]
fn overflowing_delta_halts_and_stays_queued() {
    let mut repo = RecordingRepository::with_rolls(&[1]);
    let mut queue = AttendanceQueue::new();
    queue.mark_attendance(1, i64::MAX);
    queue.mark_attendance(1, 1);

    let outcome = queue.apply_all(&mut repo);

    assert_eq!(outcome.applied, 1);
    assert_eq!(outcome.halted_on_missing_roll, None);
    assert_eq!(outcome.halted_on_overflow_roll, Some(1));
    assert!(outcome.halted());
    assert_eq!(repo.writes, vec![(1, 1)]);
    assert_eq!(repo.find_by_roll(1).unwrap().classes_attended, 1);
    assert_eq!(queue.peek(), Some(&AttendanceDelta::new(1, i64::MAX)));

    assert_eq!(queue.discard_top(), Some(AttendanceDelta::new(1, i64::MAX)));
    assert!(queue.is_empty());
}
