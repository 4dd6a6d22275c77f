//! Account-scoped remote progress tier.
//!
//! Fetch is best-effort at session load; upsert runs through an explicit
//! retry routine with linear backoff. Callers decide whether a final
//! failure is fatal (completion) or merely logged (mid-session flush).

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Deserialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{Result, TelarError};

use super::record::ProgressRecord;

/// Retry policy for remote writes: 3 attempts, waits of 1s, 2s, 3s.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryConfig {
    /// Linear backoff: attempt 1 waits base, attempt 2 waits 2x base.
    #[must_use]
    pub fn delay_before(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

/// Remote progress backend. Implementations are shared between the session
/// and the flush worker, so they must be usable from both threads.
pub trait RemoteTier: Send {
    /// Fetch the stored record, `None` when the user has no remote row.
    fn fetch(&self, user_id: &str) -> Result<Option<ProgressRecord>>;
    /// Write the record, replacing any previous row.
    fn upsert(&self, user_id: &str, record: &ProgressRecord) -> Result<()>;
    /// Delete the remote row if present.
    fn remove(&self, user_id: &str) -> Result<()>;
}

impl<T: RemoteTier + Sync + ?Sized> RemoteTier for std::sync::Arc<T> {
    fn fetch(&self, user_id: &str) -> Result<Option<ProgressRecord>> {
        (**self).fetch(user_id)
    }

    fn upsert(&self, user_id: &str, record: &ProgressRecord) -> Result<()> {
        (**self).upsert(user_id, record)
    }

    fn remove(&self, user_id: &str) -> Result<()> {
        (**self).remove(user_id)
    }
}

/// Run an upsert through the retry policy. Returns `true` on success and
/// `false` when every attempt failed; never propagates the remote error.
pub fn upsert_with_retry(
    tier: &dyn RemoteTier,
    retry: &RetryConfig,
    user_id: &str,
    record: &ProgressRecord,
) -> bool {
    for attempt in 1..=retry.max_attempts {
        if attempt > 1 {
            let delay = retry.delay_before(attempt - 1);
            debug!(attempt, delay_ms = delay.as_millis() as u64, "retrying remote upsert");
            std::thread::sleep(delay);
        }
        match tier.upsert(user_id, record) {
            Ok(()) => {
                if attempt > 1 {
                    info!(attempt, "remote upsert succeeded after retry");
                }
                return true;
            }
            Err(e) => {
                warn!(attempt, error = %e, "remote upsert failed");
            }
        }
    }
    false
}

#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the progress API.
pub struct HttpRemote {
    base_url: String,
    token: String,
    http_client: reqwest::blocking::Client,
}

impl HttpRemote {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TelarError::Config(format!("HTTP client error: {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            http_client,
        })
    }

    fn url(&self, user_id: &str) -> String {
        format!("{}/users/{user_id}/progress", self.base_url)
    }

    fn error_from(status: reqwest::StatusCode, body: &str) -> TelarError {
        let message = serde_json::from_str::<RemoteErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.to_string());
        TelarError::Remote(format!("{status}: {message}"))
    }
}

impl RemoteTier for HttpRemote {
    fn fetch(&self, user_id: &str) -> Result<Option<ProgressRecord>> {
        let response = self
            .http_client
            .get(self.url(user_id))
            .header("Authorization", format!("Bearer {}", self.token))
            .send()?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Self::error_from(status, &body));
        }

        let record: ProgressRecord = response
            .json()
            .map_err(|e| TelarError::Remote(format!("invalid progress payload: {e}")))?;
        debug!(user = %user_id, answered = record.answered_ids.len(), "remote progress fetched");
        Ok(Some(record))
    }

    fn upsert(&self, user_id: &str, record: &ProgressRecord) -> Result<()> {
        let idempotency_key = format!("telar-progress-{}", Uuid::new_v4());
        let response = self
            .http_client
            .put(self.url(user_id))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Idempotency-Key", &idempotency_key)
            .json(record)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Self::error_from(status, &body));
        }
        debug!(user = %user_id, idempotency_key = %idempotency_key, "remote progress upserted");
        Ok(())
    }

    fn remove(&self, user_id: &str) -> Result<()> {
        let response = self
            .http_client
            .delete(self.url(user_id))
            .header("Authorization", format!("Bearer {}", self.token))
            .send()?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND || status.is_success() {
            return Ok(());
        }
        let body = response.text().unwrap_or_default();
        Err(Self::error_from(status, &body))
    }
}

/// In-memory remote tier for tests, with optional scripted failures.
#[derive(Default)]
pub struct MemoryRemote {
    rows: Mutex<HashMap<String, ProgressRecord>>,
    failures_remaining: Mutex<u32>,
    upsert_count: Mutex<u32>,
}

impl MemoryRemote {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` upserts fail before succeeding.
    pub fn fail_next_upserts(&self, n: u32) {
        *self.failures_remaining.lock() = n;
    }

    pub fn seed(&self, user_id: &str, record: ProgressRecord) {
        self.rows.lock().insert(user_id.to_string(), record);
    }

    #[must_use]
    pub fn stored(&self, user_id: &str) -> Option<ProgressRecord> {
        self.rows.lock().get(user_id).cloned()
    }

    #[must_use]
    pub fn upsert_count(&self) -> u32 {
        *self.upsert_count.lock()
    }
}

impl RemoteTier for MemoryRemote {
    fn fetch(&self, user_id: &str) -> Result<Option<ProgressRecord>> {
        Ok(self.rows.lock().get(user_id).cloned())
    }

    fn upsert(&self, user_id: &str, record: &ProgressRecord) -> Result<()> {
        *self.upsert_count.lock() += 1;
        let mut failures = self.failures_remaining.lock();
        if *failures > 0 {
            *failures -= 1;
            return Err(TelarError::Remote("scripted failure".to_string()));
        }
        drop(failures);
        self.rows.lock().insert(user_id.to_string(), record.clone());
        Ok(())
    }

    fn remove(&self, user_id: &str) -> Result<()> {
        self.rows.lock().remove(user_id);
        Ok(())
    }
}
