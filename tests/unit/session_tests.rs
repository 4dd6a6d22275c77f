use std::sync::Arc;
use std::time::Duration;

use telar::catalog::{catalog, AssessmentMode, Language};
use telar::profile::AnswerValue;
use telar::progress::{FileStore, LocalProgress, MemoryRemote, RemoteTier, RetryConfig};
use telar::session::{AssessmentSession, Notice, NullObserver, RecordingObserver, SessionConfig};

fn config(mode: AssessmentMode) -> SessionConfig {
    let mut config = SessionConfig::new("maria", Language::Es, mode);
    config.retry = RetryConfig {
        max_attempts: 2,
        base_delay: Duration::from_millis(1),
    };
    config
}

#[test]
fn progress_survives_session_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut session = AssessmentSession::start(
            config(AssessmentMode::Full),
            catalog(Language::Es, AssessmentMode::Full),
            LocalProgress::new(FileStore::new(dir.path()).unwrap()),
            None,
            None,
            NullObserver,
        )
        .unwrap();
        session
            .record_answer("experience_time", AnswerValue::from("3_5"))
            .unwrap();
        session
            .record_answer("work_structure", AnswerValue::from("solo"))
            .unwrap();
    }

    let session = AssessmentSession::start(
        config(AssessmentMode::Full),
        catalog(Language::Es, AssessmentMode::Full),
        LocalProgress::new(FileStore::new(dir.path()).unwrap()),
        None,
        None,
        RecordingObserver::default(),
    )
    .unwrap();
    assert_eq!(session.answered_count(), 2);
    assert!(session.is_answered("experience_time"));
    assert_eq!(session.profile().text("experienceTime"), Some("3_5"));
}

#[test]
fn background_flush_failures_surface_as_notice() {
    let remote = Arc::new(MemoryRemote::new());
    remote.fail_next_upserts(10);

    let mut session = AssessmentSession::start(
        config(AssessmentMode::Full),
        catalog(Language::Es, AssessmentMode::Full),
        LocalProgress::new(telar::progress::MemoryStore::new()),
        Some(Arc::clone(&remote) as Arc<dyn RemoteTier + Sync>),
        None,
        RecordingObserver::default(),
    )
    .unwrap();

    session.record_answer("experience_time", AnswerValue::from("3_5")).unwrap();
    session.record_answer("work_structure", AnswerValue::from("solo")).unwrap();
    session.record_answer("production_capacity", AnswerValue::from("low")).unwrap();

    // The cadence flush retries in the background and exhausts; give the
    // worker time to chew through its two fast attempts.
    std::thread::sleep(Duration::from_millis(100));
    session.poll_events().unwrap();

    assert!(session
        .observer()
        .notices
        .iter()
        .any(|n| matches!(n, Notice::RemoteSyncFailed { .. })));
}

#[test]
fn checkpoint_fires_after_debounce_on_fifth_answer() {
    let mut session = AssessmentSession::start(
        config(AssessmentMode::Full),
        catalog(Language::Es, AssessmentMode::Full),
        LocalProgress::new(telar::progress::MemoryStore::new()),
        None,
        None,
        RecordingObserver::default(),
    )
    .unwrap();

    for id in [
        "experience_time",
        "work_structure",
        "production_capacity",
        "quality_control",
        "business_location",
    ] {
        session.record_answer(id, AnswerValue::from("x")).unwrap();
    }

    // Inside the debounce window: nothing yet.
    session.poll_events().unwrap();
    assert!(session.observer().checkpoints.is_empty());

    std::thread::sleep(Duration::from_millis(350));
    session.poll_events().unwrap();
    let checkpoints = &session.observer().checkpoints;
    assert_eq!(checkpoints.len(), 1);
    assert_eq!(checkpoints[0].answered, 5);
    assert_eq!(checkpoints[0].total, 30);
}

#[test]
fn flush_checkpoint_skips_debounce() {
    let mut session = AssessmentSession::start(
        config(AssessmentMode::Full),
        catalog(Language::Es, AssessmentMode::Full),
        LocalProgress::new(telar::progress::MemoryStore::new()),
        None,
        None,
        RecordingObserver::default(),
    )
    .unwrap();

    for id in [
        "experience_time",
        "work_structure",
        "production_capacity",
        "quality_control",
        "business_location",
    ] {
        session.record_answer(id, AnswerValue::from("x")).unwrap();
    }
    session.flush_checkpoint().unwrap();
    assert_eq!(session.observer().checkpoints.len(), 1);

    // Flushing again emits nothing new.
    session.flush_checkpoint().unwrap();
    assert_eq!(session.observer().checkpoints.len(), 1);
}
