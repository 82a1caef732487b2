use rollbook_core::{InMemoryStudentRepository, RepoError, StudentRecord, StudentRepository};

fn student(roll: i64, name: &str) -> StudentRecord {
    StudentRecord::new(roll, name, "555-0100", 3.0, 2)
}

#[test]
fn list_all_preserves_insertion_order() {
    let mut repo = InMemoryStudentRepository::new();
    for (roll, name) in [(30, "Cato"), (10, "Asha"), (20, "Ben"), (5, "Dee")] {
        repo.add_student(student(roll, name));
    }

    let rolls: Vec<i64> = repo.list_all().iter().map(|r| r.roll_number).collect();
    assert_eq!(rolls, vec![30, 10, 20, 5]);
}

#[test]
fn find_by_roll_returns_match_or_none() {
    let mut repo = InMemoryStudentRepository::new();
    repo.add_student(student(1, "Asha"));
    repo.add_student(student(2, "Ben"));

    assert_eq!(repo.find_by_roll(2).map(|r| r.name.as_str()), Some("Ben"));
    assert!(repo.find_by_roll(3).is_none());
}

#[test]
fn duplicate_rolls_are_accepted_and_first_match_wins() {
    let mut repo = InMemoryStudentRepository::new();
    repo.add_student(student(7, "first"));
    repo.add_student(student(7, "second"));

    assert_eq!(repo.len(), 2);
    assert_eq!(repo.find_by_roll(7).unwrap().name, "first");

    repo.enroll_subject(7, "History").unwrap();
    repo.add_attended_classes(7, 3).unwrap();

    let all = repo.list_all();
    assert_eq!(all[0].subjects_enrolled, vec!["History"]);
    assert_eq!(all[0].classes_attended, 3);
    assert!(all[1].subjects_enrolled.is_empty());
    assert_eq!(all[1].classes_attended, 0);
}

#[test]
fn out_of_range_values_are_stored_unchecked() {
    let mut repo = InMemoryStudentRepository::new();
    repo.add_student(StudentRecord::new(-4, "", "", 11.5, -1));

    let stored = repo.find_by_roll(-4).unwrap();
    assert_eq!(stored.cgpa, 11.5);
    assert_eq!(stored.year_of_study, -1);
}

#[test]
fn enroll_subject_on_missing_roll_returns_not_found_without_mutation() {
    let mut repo = InMemoryStudentRepository::new();
    repo.add_student(student(1, "Asha"));
    let before = repo.list_all().to_vec();

    let err = repo.enroll_subject(99, "Biology").unwrap_err();
    assert_eq!(err, RepoError::NotFound(99));
    assert_eq!(repo.list_all(), before.as_slice());
}

#[test]
fn enroll_subject_appends_in_order() {
    let mut repo = InMemoryStudentRepository::new();
    repo.add_student(student(1, "Asha"));

    repo.enroll_subject(1, "Physics").unwrap();
    repo.enroll_subject(1, "Algebra").unwrap();

    assert_eq!(
        repo.find_by_roll(1).unwrap().subjects_enrolled,
        vec!["Physics", "Algebra"]
    );
}

#[test]
fn clear_empties_store_and_lookups() {
    let mut repo = InMemoryStudentRepository::new();
    repo.add_student(student(1, "Asha"));
    repo.add_student(student(2, "Ben"));

    repo.clear();

    assert!(repo.list_all().is_empty());
    assert!(repo.find_by_roll(1).is_none());
    assert!(repo.find_by_roll(2).is_none());
}
