//! Session-level notifications surfaced to the caller.

use serde::Serialize;

use crate::scoring::{BusinessType, CategoryScores, MaturityBand, RecommendedTask};

use super::checkpoint::CheckpointInfo;

/// Non-fatal events raised while a session runs. The session keeps going
/// after every one of these; the observer decides how loudly to surface it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Stored answers referenced questions the current catalog no longer
    /// defines and were purged.
    CatalogMigrated {
        removed: Vec<String>,
        remaining_questions: usize,
    },
    /// Progress was imported from the legacy storage key.
    LegacyImported,
    /// The remote tier could not be fetched at load; the session runs on
    /// local progress only.
    RemoteUnavailable,
    /// One or more background remote flushes exhausted their retries.
    RemoteSyncFailed { failed_flushes: u32 },
    /// AI extraction of the business description failed. The raw answer is
    /// already persisted; only the derived fields are missing.
    ExtractionFailed { reason: String },
}

/// Final assessment output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReport {
    pub scores: CategoryScores,
    pub band: MaturityBand,
    pub tasks: Vec<RecommendedTask>,
    pub business_type: BusinessType,
    pub answered: usize,
    /// True for fast-onboarding completions: the zero scores are an
    /// ephemeral placeholder, never persisted as real results.
    pub placeholder_scores: bool,
}

/// Callbacks for session progress. All methods default to no-ops so callers
/// implement only what they render.
pub trait SessionObserver {
    fn on_notice(&mut self, _notice: &Notice) {}
    fn on_checkpoint(&mut self, _checkpoint: &CheckpointInfo) {}
    fn on_complete(&mut self, _report: &CompletionReport) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SessionObserver for NullObserver {}

/// Observer that records everything, for tests.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub notices: Vec<Notice>,
    pub checkpoints: Vec<CheckpointInfo>,
    pub reports: Vec<CompletionReport>,
}

impl SessionObserver for RecordingObserver {
    fn on_notice(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn on_checkpoint(&mut self, checkpoint: &CheckpointInfo) {
        self.checkpoints.push(checkpoint.clone());
    }

    fn on_complete(&mut self, report: &CompletionReport) {
        self.reports.push(report.clone());
    }
}
