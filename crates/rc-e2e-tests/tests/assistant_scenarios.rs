//! E2E tests for the headline chat flows, asserting user-visible reply text.

mod helpers;

use chrono::Utc;

use helpers::TestHarness;
use rc_protocol::ReplyData;

/// A greeting comes back with quick-reply suggestions attached.
#[tokio::test]
async fn e2e_greeting_flow() {
    let mut h = TestHarness::with_sample_data();

    let reply = h.ask("hello").await;
    assert!(reply.message.starts_with("👋 Hello!"));
    assert!(
        reply.suggestions.contains(&"Show all faculty".to_string()),
        "greeting should offer a faculty quick reply"
    );
}

/// A raw seat number answers with the student card and a live
/// percentage computed from the ledger.
#[tokio::test]
async fn e2e_student_lookup_with_live_percentage() {
    let mut h = TestHarness::with_sample_data();
    let today = Utc::now().date_naive();

    // Two semester-3 classes held; Ananya attended one of them.
    h.record_class("CS301", "FAC-101", today, 1, &["1MS21CS001", "1MS21CS002"], 3)
        .await;
    h.record_class("CS302", "FAC-101", today, 1, &["1MS21CS002"], 3)
        .await;

    let reply = h.ask("1MS21CS001").await;
    assert!(reply.message.starts_with("🎓 **Ananya Rao** (1MS21CS001)"));
    assert!(reply.message.contains("• Attendance: 50%"));
    match reply.data {
        ReplyData::Student {
            attendance_percent, ..
        } => assert_eq!(attendance_percent, Some(50.0)),
        other => panic!("expected a student payload, got {other:?}"),
    }
}

/// An empty directory onboards instead of replying with an empty list.
#[tokio::test]
async fn e2e_empty_directory_onboarding() {
    let mut h = TestHarness::empty();

    let reply = h.ask("show all faculty").await;
    assert!(reply.message.starts_with("👩‍🏫 **No faculty records yet**"));
    assert!(reply.data.is_none());
}

/// Credential queries enumerate email/password pairs.
#[tokio::test]
async fn e2e_credentials_enumeration() {
    let mut h = TestHarness::with_sample_data();

    let reply = h.ask("show faculty credentials").await;
    assert!(reply.message.starts_with("🔐 **Faculty Credentials** (3)"));
    assert!(
        reply
            .message
            .contains("• Dr. Priya Sharma — priya.sharma@rollcall.edu / priya@123")
    );

    // Lines follow directory order.
    let priya = reply.message.find("Priya").unwrap();
    let arjun = reply.message.find("Arjun").unwrap();
    let kavya = reply.message.find("Kavya").unwrap();
    assert!(priya < arjun && arjun < kavya);
}

/// Unrecognized input falls back to the help menu, never an error.
#[tokio::test]
async fn e2e_unrecognized_input_serves_help() {
    let mut h = TestHarness::with_sample_data();

    let reply = h.ask("xyzzy plugh").await;
    assert!(reply.message.starts_with("🤖 **Smart Attendance Assistant**"));
    assert!(reply.data.is_none());
}

/// Listings reflect catalog writes made after the session started.
#[tokio::test]
async fn e2e_listing_tracks_catalog_changes() {
    use rc_roster::{NewSubject, SubjectRepository};

    let mut h = TestHarness::with_sample_data();

    let before = h.ask("list subjects").await;
    assert!(before.message.starts_with("📚 **Subject Catalog** (4)"));

    SubjectRepository::add(
        h.roster.as_ref(),
        NewSubject {
            name: "Compiler Design".into(),
            code: "CS401".into(),
            semester: 7,
            credits: 4,
        },
    )
    .await
    .unwrap();

    let after = h.ask("list subjects").await;
    assert!(after.message.starts_with("📚 **Subject Catalog** (5)"));
    assert!(after.message.contains("• CS401 — Compiler Design (sem 7, 4 credits)"));
}

/// The transcript keeps both sides in submission order.
#[tokio::test]
async fn e2e_transcript_grows_per_exchange() {
    let mut h = TestHarness::with_sample_data();

    h.ask("hi").await;
    h.ask("list subjects").await;

    let transcript = h.session.transcript();
    assert_eq!(transcript.len(), 4);
    assert!(transcript[0].is_user);
    assert_eq!(transcript[0].content, "hi");
    assert!(!transcript[3].is_user);
    assert!(transcript[3].content.starts_with("📚 **Subject Catalog**"));
}

/// Reply payloads serialize with snake_case kind tags for the widgets.
#[tokio::test]
async fn e2e_reply_payload_wire_shape() {
    let mut h = TestHarness::with_sample_data();

    let reply = h.ask("1MS21CS002").await;
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["data"]["kind"], "student");
    assert_eq!(json["data"]["record"]["usn"], "1MS21CS002");

    let listing = h.ask("show all faculty").await;
    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["data"]["kind"], "faculty_list");
    assert_eq!(json["data"]["records"].as_array().unwrap().len(), 3);
}
