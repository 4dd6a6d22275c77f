//! Persisted progress payloads, current and legacy.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::ProfileSnapshot;
use crate::scoring::BusinessType;

/// Current on-disk and over-the-wire progress payload. Fields other than
/// the timestamp all default so older writers missing a field still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub block_index: usize,
    #[serde(default)]
    pub answered_ids: Vec<String>,
    #[serde(default)]
    pub profile: ProfileSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<BusinessType>,
    #[serde(default)]
    pub show_checkpoint: bool,
    #[serde(default)]
    pub is_completed: bool,
    pub last_updated: DateTime<Utc>,
}

impl ProgressRecord {
    #[must_use]
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            block_index: 0,
            answered_ids: Vec::new(),
            profile: ProfileSnapshot::default(),
            business_type: None,
            show_checkpoint: false,
            is_completed: false,
            last_updated: now,
        }
    }
}

/// Pre-rework progress shape. Answers were keyed by question id with the
/// raw value inline, and the timestamp was epoch milliseconds. Read-only:
/// loaded once for migration, never written back.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRecord {
    #[serde(default)]
    pub answers: std::collections::BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub profile_data: ProfileSnapshot,
    #[serde(default)]
    pub business_type: Option<BusinessType>,
    #[serde(default)]
    pub timestamp: i64,
}

impl LegacyRecord {
    /// Lift a legacy payload into the current shape. Block index is left at
    /// zero; the reconciler re-derives it from the answered set anyway.
    #[must_use]
    pub fn migrate(self) -> ProgressRecord {
        let last_updated = Utc
            .timestamp_millis_opt(self.timestamp)
            .single()
            .unwrap_or_else(Utc::now);
        ProgressRecord {
            block_index: 0,
            answered_ids: self.answers.into_keys().collect(),
            profile: self.profile_data,
            business_type: self.business_type,
            show_checkpoint: false,
            is_completed: false,
            last_updated,
        }
    }
}
