use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use telar::progress::{
    fused_key, legacy_key, merge_by_recency, upsert_with_retry, FileStore, LocalProgress,
    LocalTier, MemoryRemote, MemoryStore, MergeSource, ProgressRecord, RemoteFlushWorker,
    RetryConfig,
};

fn fast_retry() -> RetryConfig {
    RetryConfig {
        max_attempts: 3,
        base_delay: Duration::from_millis(1),
    }
}

#[test]
fn file_store_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = LocalProgress::new(FileStore::new(dir.path()).unwrap());
        let mut record = ProgressRecord::empty(Utc::now());
        record.answered_ids.push("experience_time".to_string());
        store.save("maria", &record).unwrap();
    }

    // Fresh store over the same directory, as a new process would open.
    let store = LocalProgress::new(FileStore::new(dir.path()).unwrap());
    let load = store.load("maria").unwrap();
    assert_eq!(load.record.unwrap().answered_ids, ["experience_time"]);
}

#[test]
fn clear_removes_both_key_generations() {
    let tier = Arc::new(MemoryStore::new());
    tier.write(&fused_key("u"), "{}").unwrap();
    tier.write(&legacy_key("u"), "{}").unwrap();

    let store = LocalProgress::new(Arc::clone(&tier));
    store.clear("u").unwrap();
    assert!(tier.read(&fused_key("u")).unwrap().is_none());
    assert!(tier.read(&legacy_key("u")).unwrap().is_none());
}

#[test]
fn retry_recovers_from_transient_failures() {
    let remote = MemoryRemote::new();
    remote.fail_next_upserts(2);
    let record = ProgressRecord::empty(Utc::now());

    assert!(upsert_with_retry(&remote, &fast_retry(), "u", &record));
    assert!(remote.stored("u").is_some());
}

#[test]
fn retry_gives_up_after_max_attempts() {
    let remote = MemoryRemote::new();
    remote.fail_next_upserts(3);
    let record = ProgressRecord::empty(Utc::now());

    assert!(!upsert_with_retry(&remote, &fast_retry(), "u", &record));
    assert!(remote.stored("u").is_none());
}

#[test]
fn worker_flushes_latest_snapshot() {
    let remote = Arc::new(MemoryRemote::new());
    let worker = RemoteFlushWorker::spawn(Box::new(Arc::clone(&remote)), fast_retry());

    let mut record = ProgressRecord::empty(Utc::now());
    record.answered_ids.push("a".to_string());
    worker.enqueue("u", record.clone());
    record.answered_ids.push("b".to_string());
    worker.enqueue("u", record);
    drop(worker);

    assert_eq!(remote.stored("u").unwrap().answered_ids, ["a", "b"]);
}

#[test]
fn merge_prefers_strictly_newer_remote() {
    let older = ProgressRecord::empty(Utc::now() - chrono::Duration::hours(1));
    let newer = ProgressRecord::empty(Utc::now());

    let (_, source) = merge_by_recency(Some(older.clone()), Some(newer.clone()));
    assert_eq!(source, MergeSource::Remote);

    let (_, source) = merge_by_recency(Some(newer), Some(older));
    assert_eq!(source, MergeSource::Local);
}

#[test]
fn record_json_uses_camel_case_wire_names() {
    let record = ProgressRecord::empty(Utc::now());
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"answeredIds\""));
    assert!(json.contains("\"blockIndex\""));
    assert!(json.contains("\"isCompleted\""));
    assert!(json.contains("\"lastUpdated\""));
}
