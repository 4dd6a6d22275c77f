//! End-to-end flows over injected in-memory tiers.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use telar::catalog::{catalog, is_visible, AssessmentMode, Language};
use telar::profile::{AnswerValue, ProfileSnapshot};
use telar::progress::{
    fused_key, LocalProgress, LocalTier, MemoryRemote, MemoryStore, ProgressRecord, RemoteTier,
    RetryConfig,
};
use telar::session::{AssessmentSession, RecordingObserver, SessionConfig};

fn config(mode: AssessmentMode) -> SessionConfig {
    let mut config = SessionConfig::new("maria", Language::Es, mode);
    config.retry = RetryConfig {
        max_attempts: 2,
        base_delay: Duration::from_millis(1),
    };
    config
}

fn start(
    mode: AssessmentMode,
    local: Arc<MemoryStore>,
    remote: Option<Arc<MemoryRemote>>,
) -> AssessmentSession<Arc<MemoryStore>, RecordingObserver> {
    AssessmentSession::start(
        config(mode),
        catalog(Language::Es, mode),
        LocalProgress::new(local),
        remote.map(|r| r as Arc<dyn RemoteTier + Sync>),
        None,
        RecordingObserver::default(),
    )
    .unwrap()
}

fn seed_local(store: &MemoryStore, user: &str, record: &ProgressRecord) {
    store
        .write(&fused_key(user), &serde_json::to_string(record).unwrap())
        .unwrap();
}

// Empty stored state: block 0, everything visible, nothing answered.
#[test]
fn fresh_start_lands_on_first_block() {
    let session = start(AssessmentMode::Full, Arc::new(MemoryStore::new()), None);

    assert_eq!(session.answered_count(), 0);
    assert_eq!(session.block_index(), 0);
    let block = session.current_block().unwrap();
    let profile = ProfileSnapshot::new();
    assert!(block.questions.iter().all(|q| is_visible(q, &profile)));
    assert!(!session.is_completed());
}

// A stored onboarding run with all three answers completes on resume with
// placeholder scores.
#[test]
fn stored_full_onboarding_set_completes_on_resume() {
    let store = Arc::new(MemoryStore::new());
    let mut record = ProgressRecord::empty(Utc::now());
    record.answered_ids = vec![
        "business_description".to_string(),
        "sales_status".to_string(),
        "target_customer".to_string(),
    ];
    seed_local(&store, "maria", &record);

    let mut session = start(AssessmentMode::Onboarding, store, None);
    let report = session
        .continue_from_checkpoint()
        .unwrap()
        .expect("completion should fire");

    assert!(report.placeholder_scores);
    assert_eq!(report.scores.average(), 0.0);
    assert!(session.is_completed());
}

// Remote newer than local: the session loads the remote content and the
// local tier is overwritten to match.
#[test]
fn newer_remote_overwrites_local() {
    let store = Arc::new(MemoryStore::new());
    let mut stale = ProgressRecord::empty(Utc::now() - chrono::Duration::hours(2));
    stale.answered_ids = vec!["experience_time".to_string()];
    seed_local(&store, "maria", &stale);

    let remote = Arc::new(MemoryRemote::new());
    let mut fresh = ProgressRecord::empty(Utc::now());
    fresh.answered_ids = vec![
        "experience_time".to_string(),
        "work_structure".to_string(),
        "production_capacity".to_string(),
    ];
    fresh
        .profile
        .set("experienceTime", AnswerValue::from("3_5"));
    remote.seed("maria", fresh);

    let session = start(AssessmentMode::Full, Arc::clone(&store), Some(remote));
    assert_eq!(session.answered_count(), 3);
    assert_eq!(session.profile().text("experienceTime"), Some("3_5"));

    let written: ProgressRecord =
        serde_json::from_str(&store.read(&fused_key("maria")).unwrap().unwrap()).unwrap();
    assert_eq!(written.answered_ids.len(), 3);
}

// An answered id the catalog no longer defines is purged and the purge is
// re-persisted.
#[test]
fn retired_ids_are_purged_and_repersisted() {
    let store = Arc::new(MemoryStore::new());
    let mut record = ProgressRecord::empty(Utc::now());
    record.answered_ids = vec![
        "experience_time".to_string(),
        "question_from_2024".to_string(),
    ];
    seed_local(&store, "maria", &record);

    let session = start(AssessmentMode::Full, Arc::clone(&store), None);
    assert_eq!(session.answered_count(), 1);

    let written: ProgressRecord =
        serde_json::from_str(&store.read(&fused_key("maria")).unwrap().unwrap()).unwrap();
    assert_eq!(written.answered_ids, ["experience_time"]);
}

// Completing the last question of a block advances the derived index
// without any answer in the next block.
#[test]
fn finishing_a_block_advances_without_touching_the_next() {
    let mut session = start(AssessmentMode::Full, Arc::new(MemoryStore::new()), None);

    let block0_ids: Vec<String> = session.catalog().blocks()[0]
        .questions
        .iter()
        .map(|q| q.id.clone())
        .collect();
    for (i, id) in block0_ids.iter().enumerate() {
        assert_eq!(session.block_index(), 0, "advanced early at answer {i}");
        session.record_answer(id, AnswerValue::from("x")).unwrap();
    }

    assert_eq!(session.block_index(), 1);
    assert_eq!(
        session.next_question().unwrap().id,
        session.catalog().blocks()[1].questions[0].id
    );
}

// Full-mode walkthrough: thirty answers, navigation to the end, completion
// with real scores, and the completed record on both tiers.
#[test]
fn full_walkthrough_to_completion() {
    let store = Arc::new(MemoryStore::new());
    let remote = Arc::new(MemoryRemote::new());
    let mut session = start(
        AssessmentMode::Full,
        Arc::clone(&store),
        Some(Arc::clone(&remote)),
    );

    session
        .record_answer(
            "business_location",
            AnswerValue::from("Taller de textiles en telar de pedal, piezas únicas de lana."),
        )
        .unwrap();
    let ids: Vec<String> = session.catalog().questions().map(|q| q.id.clone()).collect();
    for id in ids {
        if !session.is_answered(&id) {
            session.record_answer(&id, AnswerValue::from("regular")).unwrap();
        }
    }
    assert_eq!(session.answered_count(), 30);

    let report = session.go_to_next_block().unwrap().expect("completion");
    assert!(!report.placeholder_scores);
    assert!(report.scores.average() > 0.0);
    assert_eq!(report.answered, 30);

    // Completion callback fires exactly once.
    assert_eq!(session.observer().reports.len(), 1);
    assert_eq!(session.observer().reports[0], report);

    let local_copy: ProgressRecord =
        serde_json::from_str(&store.read(&fused_key("maria")).unwrap().unwrap()).unwrap();
    assert!(local_copy.is_completed);
    assert!(remote.stored("maria").unwrap().is_completed);
}

// Legacy-shape local progress is imported once and flagged.
#[test]
fn legacy_progress_is_imported() {
    let store = Arc::new(MemoryStore::new());
    store
        .write(
            &telar::progress::legacy_key("maria"),
            r#"{
                "answers": {"experience_time": "3_5", "work_structure": "solo"},
                "profileData": {"experienceTime": "3_5", "workStructure": "solo"},
                "timestamp": 1750000000000
            }"#,
        )
        .unwrap();

    let session = start(AssessmentMode::Full, Arc::clone(&store), None);
    assert_eq!(session.answered_count(), 2);
    assert!(session
        .observer()
        .notices
        .iter()
        .any(|n| matches!(n, telar::session::Notice::LegacyImported)));

    // Import is re-persisted under the current key; the legacy payload is
    // dropped once that write lands.
    assert!(store.read(&fused_key("maria")).unwrap().is_some());
    assert!(store
        .read(&telar::progress::legacy_key("maria"))
        .unwrap()
        .is_none());

    // A restart sees only the migrated record, with no second import notice.
    let session = start(AssessmentMode::Full, Arc::clone(&store), None);
    assert_eq!(session.answered_count(), 2);
    assert!(!session
        .observer()
        .notices
        .iter()
        .any(|n| matches!(n, telar::session::Notice::LegacyImported)));
}
