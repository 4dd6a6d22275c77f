//! Checkpoint cadence and debounce.
//!
//! A checkpoint fires every `CHECKPOINT_FREQUENCY` answers in full mode,
//! but never at zero and never at completion. Emission is debounced: a
//! burst of rapid answers landing on and then past a multiple produces at
//! most one checkpoint, the one matching the settled count.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::catalog::{AssessmentMode, TOTAL_QUESTIONS};

/// Answers between checkpoints.
pub const CHECKPOINT_FREQUENCY: usize = 5;

/// Settle time before a pending checkpoint is emitted.
pub const CHECKPOINT_DEBOUNCE: Duration = Duration::from_millis(300);

/// A progress checkpoint snapshot. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointInfo {
    pub answered: usize,
    pub total: usize,
    pub percent: u8,
    /// Ordinal of this checkpoint (1 at the fifth answer, 2 at the tenth).
    pub checkpoint_number: usize,
    pub questions_until_next: usize,
}

impl CheckpointInfo {
    #[must_use]
    pub fn new(answered: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            ((answered * 100) / total).min(100) as u8
        };
        Self {
            answered,
            total,
            percent,
            checkpoint_number: answered / CHECKPOINT_FREQUENCY,
            questions_until_next: CHECKPOINT_FREQUENCY.min(total.saturating_sub(answered)),
        }
    }
}

/// Whether a checkpoint is due at this answer count. Onboarding sessions
/// never checkpoint; they are too short to resume mid-way.
#[must_use]
pub fn checkpoint_due(answered: usize, mode: AssessmentMode) -> bool {
    mode == AssessmentMode::Full
        && answered > 0
        && answered % CHECKPOINT_FREQUENCY == 0
        && answered < TOTAL_QUESTIONS
}

/// Debounced checkpoint emission. Time is injected so tests control it.
#[derive(Debug)]
pub struct CheckpointTracker {
    mode: AssessmentMode,
    debounce: Duration,
    pending: Option<(usize, Instant)>,
    last_emitted: Option<usize>,
}

impl CheckpointTracker {
    #[must_use]
    pub fn new(mode: AssessmentMode) -> Self {
        Self::with_debounce(mode, CHECKPOINT_DEBOUNCE)
    }

    #[must_use]
    pub fn with_debounce(mode: AssessmentMode, debounce: Duration) -> Self {
        Self {
            mode,
            debounce,
            pending: None,
            last_emitted: None,
        }
    }

    /// Record the current answer count. A count on the checkpoint cadence
    /// arms (or re-arms) the debounce window; any other count disarms it,
    /// which is what collapses rapid bursts to a single emission.
    pub fn observe(&mut self, answered: usize, now: Instant) {
        if checkpoint_due(answered, self.mode) && self.last_emitted != Some(answered) {
            self.pending = Some((answered, now));
        } else {
            self.pending = None;
        }
    }

    /// Emit the pending checkpoint once its debounce window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<CheckpointInfo> {
        let (answered, armed_at) = self.pending?;
        if now.duration_since(armed_at) < self.debounce {
            return None;
        }
        self.pending = None;
        self.last_emitted = Some(answered);
        Some(CheckpointInfo::new(answered, TOTAL_QUESTIONS))
    }

    /// Force out whatever is pending, ignoring the debounce. Used when the
    /// session is about to end.
    pub fn flush(&mut self) -> Option<CheckpointInfo> {
        let (answered, _) = self.pending.take()?;
        self.last_emitted = Some(answered);
        Some(CheckpointInfo::new(answered, TOTAL_QUESTIONS))
    }
}
