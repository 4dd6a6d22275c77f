//! Wire-level tests for the HTTP tiers against a mock server.

use std::time::Duration;

use chrono::Utc;
use httpmock::prelude::*;
use telar::catalog::Language;
use telar::extraction::{BusinessExtractor, HttpExtractor};
use telar::progress::{upsert_with_retry, HttpRemote, ProgressRecord, RemoteTier, RetryConfig};

fn fast_retry() -> RetryConfig {
    RetryConfig {
        max_attempts: 3,
        base_delay: Duration::from_millis(1),
    }
}

#[test]
fn fetch_missing_user_is_none() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/users/maria/progress");
        then.status(404);
    });

    let remote = HttpRemote::new(&server.base_url(), "token-1").unwrap();
    assert!(remote.fetch("maria").unwrap().is_none());
    mock.assert();
}

#[test]
fn fetch_parses_record_and_sends_bearer() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/maria/progress")
            .header("authorization", "Bearer token-1");
        then.status(200).json_body(serde_json::json!({
            "blockIndex": 2,
            "answeredIds": ["experience_time"],
            "profile": {"experienceTime": "3_5"},
            "isCompleted": false,
            "lastUpdated": "2026-08-01T12:00:00Z"
        }));
    });

    let remote = HttpRemote::new(&server.base_url(), "token-1").unwrap();
    let record = remote.fetch("maria").unwrap().unwrap();
    assert_eq!(record.block_index, 2);
    assert_eq!(record.answered_ids, ["experience_time"]);
    mock.assert();
}

#[test]
fn upsert_puts_camel_case_payload_with_idempotency_key() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/users/maria/progress")
            .header("authorization", "Bearer token-1")
            .header_exists("idempotency-key")
            .json_body_partial(r#"{"blockIndex": 0, "isCompleted": false}"#);
        then.status(200);
    });

    let remote = HttpRemote::new(&server.base_url(), "token-1").unwrap();
    let record = ProgressRecord::empty(Utc::now());
    remote.upsert("maria", &record).unwrap();
    mock.assert();
}

#[test]
fn server_error_message_surfaces() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/maria/progress");
        then.status(500)
            .json_body(serde_json::json!({"message": "shard down"}));
    });

    let remote = HttpRemote::new(&server.base_url(), "token-1").unwrap();
    let err = remote.fetch("maria").unwrap_err();
    assert!(err.to_string().contains("shard down"));
}

#[test]
fn retry_exhausts_against_persistent_failure() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT).path("/users/maria/progress");
        then.status(503);
    });

    let remote = HttpRemote::new(&server.base_url(), "token-1").unwrap();
    let record = ProgressRecord::empty(Utc::now());
    assert!(!upsert_with_retry(&remote, &fast_retry(), "maria", &record));
    mock.assert_hits(3);
}

#[test]
fn remove_tolerates_missing_row() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/users/maria/progress");
        then.status(404);
    });

    let remote = HttpRemote::new(&server.base_url(), "token-1").unwrap();
    assert!(remote.remove("maria").is_ok());
}

#[test]
fn extractor_posts_text_and_parses_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/ai/extract-business-info")
            .json_body_partial(
                r#"{
                    "userText": "Tejo rebozos de seda en telar de cintura en Tenancingo",
                    "language": "es"
                }"#,
            );
        then.status(200).json_body(serde_json::json!({
            "craft_type": "textiles",
            "location": "Tenancingo",
            "unique_value": "rebozos de seda en telar de cintura",
            "confidence": 0.92
        }));
    });

    let extractor = HttpExtractor::new(&server.base_url(), None).unwrap();
    let info = extractor
        .extract(
            "Tejo rebozos de seda en telar de cintura en Tenancingo",
            Language::Es,
        )
        .unwrap();
    assert_eq!(info.craft_type.as_deref(), Some("textiles"));
    assert_eq!(info.location.as_deref(), Some("Tenancingo"));
    assert!(info.brand_name.is_none());
    mock.assert();
}

#[test]
fn extractor_rejects_short_text_without_calling_out() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/ai/extract-business-info");
        then.status(200).json_body(serde_json::json!({}));
    });

    let extractor = HttpExtractor::new(&server.base_url(), None).unwrap();
    assert!(extractor.extract("tejo", Language::Es).is_err());
    mock.assert_hits(0);
}

#[test]
fn extractor_service_failure_is_an_extraction_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/ai/extract-business-info");
        then.status(502);
    });

    let extractor = HttpExtractor::new(&server.base_url(), None).unwrap();
    let err = extractor
        .extract("Hago joyería de filigrana en plata oxidada", Language::Es)
        .unwrap_err();
    assert!(matches!(err, telar::TelarError::Extraction(_)));
}
