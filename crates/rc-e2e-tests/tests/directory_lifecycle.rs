//! E2E tests for directory writes flowing through to chat replies.

mod helpers;

use helpers::TestHarness;
use rc_roster::{
    FacultyRepository, NewFaculty, NewStudent, NewSubject, RosterError, StudentRepository,
    SubjectRepository,
};

fn new_faculty(name: &str, email: &str, faculty_id: &str) -> NewFaculty {
    NewFaculty {
        name: name.into(),
        email: email.into(),
        password: "changeme@1".into(),
        faculty_id: faculty_id.into(),
    }
}

/// A freshly registered faculty member is immediately answerable.
#[tokio::test]
async fn e2e_new_faculty_appears_in_replies() {
    let mut h = TestHarness::empty();

    FacultyRepository::add(
        h.roster.as_ref(),
        new_faculty("Dr. Meera Nair", "meera.nair@rollcall.edu", "FAC-110"),
    )
    .await
    .unwrap();

    let listing = h.ask("show all faculty").await;
    assert!(listing.message.starts_with("👩‍🏫 **Faculty Directory** (1)"));

    let detail = h.ask("who is meera").await;
    assert!(detail.message.starts_with("👩‍🏫 **Dr. Meera Nair**"));
    assert!(detail.message.contains("• ID: FAC-110"));
}

/// Subject assignment surfaces on both the subject and the faculty card.
#[tokio::test]
async fn e2e_assignment_links_both_directions() {
    let mut h = TestHarness::with_sample_data();

    SubjectRepository::add(
        h.roster.as_ref(),
        NewSubject {
            name: "Machine Learning".into(),
            code: "CS305".into(),
            semester: 6,
            credits: 4,
        },
    )
    .await
    .unwrap();
    h.roster
        .set_faculty("CS305", "FAC-103", "Dr. Kavya Reddy")
        .await
        .unwrap();
    h.roster.assign_subject("FAC-103", "CS305").await.unwrap();

    let subject = h.ask("tell me about CS305").await;
    assert!(subject.message.contains("• Faculty: Dr. Kavya Reddy"));

    let faculty = h.ask("FAC-103").await;
    assert!(faculty.message.contains("• Subjects: CS305"));
}

/// Assigning the same subject twice stays a single entry.
#[tokio::test]
async fn e2e_assignment_is_idempotent() {
    let mut h = TestHarness::with_sample_data();

    h.roster.assign_subject("FAC-103", "CS304").await.unwrap();
    let record = h.roster.assign_subject("FAC-103", "CS304").await.unwrap();
    assert_eq!(record.assigned_subjects, vec!["CS304".to_string()]);

    let reply = h.ask("FAC-103").await;
    assert!(reply.message.contains("• Subjects: CS304"));
    assert!(!reply.message.contains("CS304, CS304"));
}

/// Uniqueness is enforced per identity field, case-insensitively.
#[tokio::test]
async fn e2e_duplicate_registrations_rejected() {
    let h = TestHarness::with_sample_data();

    let err = FacultyRepository::add(
        h.roster.as_ref(),
        new_faculty("Someone Else", "PRIYA.SHARMA@rollcall.edu", "FAC-199"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RosterError::Duplicate { field: "email", .. }));

    let err = FacultyRepository::add(
        h.roster.as_ref(),
        new_faculty("Someone Else", "someone.else@rollcall.edu", "fac-101"),
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        RosterError::Duplicate {
            field: "faculty_id",
            ..
        }
    ));

    let err = SubjectRepository::add(
        h.roster.as_ref(),
        NewSubject {
            name: "Data Structures II".into(),
            code: "cs301".into(),
            semester: 4,
            credits: 4,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RosterError::Duplicate { field: "code", .. }));

    let err = StudentRepository::add(
        h.roster.as_ref(),
        NewStudent {
            usn: "1ms21cs001".into(),
            name: "Another Ananya".into(),
            email: "another@rollcall.edu".into(),
            semester: 3,
            section: "B".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RosterError::Duplicate { field: "usn", .. }));
}

/// Field validation rejects out-of-range and malformed input.
#[tokio::test]
async fn e2e_validation_bounds() {
    let h = TestHarness::empty();

    for semester in [0u8, 9] {
        let err = SubjectRepository::add(
            h.roster.as_ref(),
            NewSubject {
                name: "Mystery Elective".into(),
                code: "XX100".into(),
                semester,
                credits: 2,
            },
        )
        .await
        .unwrap_err();
        assert!(
            matches!(err, RosterError::Invalid { field: "semester", .. }),
            "semester {semester} should be rejected"
        );
    }

    let err = StudentRepository::add(
        h.roster.as_ref(),
        NewStudent {
            usn: "SHORT1".into(),
            name: "Badly Entered".into(),
            email: "bad@rollcall.edu".into(),
            semester: 3,
            section: "A".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RosterError::Invalid { field: "usn", .. }));
}

/// Removed records stop appearing in replies.
#[tokio::test]
async fn e2e_removal_disappears_from_replies() {
    let mut h = TestHarness::with_sample_data();

    FacultyRepository::remove(h.roster.as_ref(), "FAC-102")
        .await
        .unwrap();

    let reply = h.ask("show all faculty").await;
    assert!(reply.message.starts_with("👩‍🏫 **Faculty Directory** (2)"));
    assert!(!reply.message.contains("Arjun Mehta"));

    let err = FacultyRepository::remove(h.roster.as_ref(), "FAC-102")
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::NotFound { .. }));
}
