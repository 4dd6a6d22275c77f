//! Assessment session controller.
//!
//! Owns the in-memory session state (answered set, profile, block position)
//! and coordinates the storage tiers: every mutation is written to the
//! local tier synchronously, while remote flushes ride a background worker
//! on a fixed cadence. Completion is guarded and irreversible.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::catalog::{
    is_visible, AssessmentMode, Block, Catalog, Language, Question, QuestionKind,
};
use crate::error::{Result, TelarError};
use crate::extraction::{BusinessExtractor, NoopExtractor, MIN_EXTRACTION_LENGTH};
use crate::profile::{AnswerValue, ProfileSnapshot};
use crate::progress::{
    derive_block_index, load_reconciled, upsert_with_retry, LocalProgress, LocalTier,
    MergeSource, ProgressRecord, RemoteFlushWorker, RemoteTier, RetryConfig,
};
use crate::scoring::{
    calculate_scores, detect_business_type, recommended_tasks, BusinessType, CategoryScores,
    MaturityBand,
};

use super::checkpoint::CheckpointTracker;
use super::events::{CompletionReport, Notice, SessionObserver};

/// New answers between background remote flushes.
pub const REMOTE_FLUSH_EVERY: usize = 3;

/// Session wiring. Storage tiers and the extractor are injected; the
/// session never constructs its own backends.
pub struct SessionConfig {
    pub user_id: String,
    pub language: Language,
    pub mode: AssessmentMode,
    pub remote_flush_every: usize,
    pub retry: RetryConfig,
}

impl SessionConfig {
    #[must_use]
    pub fn new(user_id: &str, language: Language, mode: AssessmentMode) -> Self {
        Self {
            user_id: user_id.to_string(),
            language,
            mode,
            remote_flush_every: REMOTE_FLUSH_EVERY,
            retry: RetryConfig::default(),
        }
    }
}

/// Result of recording one answer.
#[derive(Debug)]
pub struct AnswerOutcome {
    /// False when the question was already answered and only its value
    /// changed.
    pub newly_answered: bool,
    pub answered: usize,
    /// Set when this answer completed the assessment (onboarding mode).
    pub completed: Option<CompletionReport>,
}

pub struct AssessmentSession<L: LocalTier, O: SessionObserver> {
    config: SessionConfig,
    catalog: Catalog,
    local: LocalProgress<L>,
    remote: Option<Arc<dyn RemoteTier + Sync>>,
    worker: Option<RemoteFlushWorker>,
    extractor: Box<dyn BusinessExtractor>,
    observer: O,
    tracker: CheckpointTracker,

    block_index: usize,
    answered: BTreeSet<String>,
    profile: ProfileSnapshot,
    business_type: Option<BusinessType>,
    show_checkpoint: bool,
    is_completed: bool,
    completing: bool,
    new_answers_since_flush: usize,
}

impl<L: LocalTier, O: SessionObserver> AssessmentSession<L, O> {
    /// Load, reconcile, and start a session. Reconciliation notices are
    /// delivered to the observer before this returns.
    pub fn start(
        config: SessionConfig,
        catalog: Catalog,
        local: LocalProgress<L>,
        remote: Option<Arc<dyn RemoteTier + Sync>>,
        extractor: Option<Box<dyn BusinessExtractor>>,
        mut observer: O,
    ) -> Result<Self> {
        let state = load_reconciled(
            &local,
            remote.as_ref().map(|r| r as &dyn RemoteTier),
            &config.user_id,
            &catalog,
        )?;

        if state.migrated_from_legacy {
            observer.on_notice(&Notice::LegacyImported);
        }
        if state.remote_unavailable {
            observer.on_notice(&Notice::RemoteUnavailable);
        }
        if !state.removed_ids.is_empty() {
            observer.on_notice(&Notice::CatalogMigrated {
                removed: state.removed_ids.clone(),
                remaining_questions: catalog.question_count(),
            });
        }

        let worker = remote.as_ref().map(|tier| {
            RemoteFlushWorker::spawn(Box::new(Arc::clone(tier)), config.retry.clone())
        });

        info!(
            user = %config.user_id,
            mode = ?config.mode,
            answered = state.record.answered_ids.len(),
            block = state.record.block_index,
            "assessment session started"
        );

        // Tier convergence writeback: whichever tier does not already hold
        // the reconciled record gets it now, so a session that loads and
        // exits without answering still leaves the tiers agreeing. Purged
        // ids and repaired indices invalidate the winner's own row too.
        let record_rewritten =
            state.repaired_index || !state.removed_ids.is_empty() || state.migrated_from_legacy;
        let local_stale = state.source == MergeSource::Remote || record_rewritten;
        let remote_stale = !state.remote_unavailable
            && match state.source {
                MergeSource::Local => true,
                MergeSource::Remote => record_rewritten,
                MergeSource::Fresh => false,
            };

        let tracker = CheckpointTracker::new(config.mode);
        let mut session = Self {
            catalog,
            local,
            remote,
            worker,
            extractor: extractor.unwrap_or_else(|| Box::new(NoopExtractor)),
            observer,
            tracker,
            block_index: state.record.block_index,
            answered: state.record.answered_ids.iter().cloned().collect(),
            profile: state.record.profile,
            business_type: state.record.business_type,
            show_checkpoint: state.record.show_checkpoint,
            is_completed: state.record.is_completed,
            completing: false,
            new_answers_since_flush: 0,
            config,
        };
        if local_stale {
            session.persist_local()?;
            if state.migrated_from_legacy {
                session.local.remove_legacy(&session.config.user_id)?;
            }
        }
        if remote_stale {
            session.flush_remote_background();
        }
        Ok(session)
    }

    /// Record an answer. The raw value is persisted locally before any
    /// derived work (extraction, business type) runs, so failures there
    /// never lose the answer. Re-answering an already answered question
    /// updates the profile without advancing progress.
    pub fn record_answer(&mut self, question_id: &str, value: AnswerValue) -> Result<AnswerOutcome> {
        if self.is_completed {
            return Err(TelarError::AlreadyCompleted);
        }
        let question = self
            .catalog
            .question(question_id)
            .ok_or_else(|| TelarError::QuestionNotFound(question_id.to_string()))?
            .clone();

        self.profile.set(question.field_name.clone(), value.clone());
        let newly_answered = self.answered.insert(question.id.clone());

        if question.field_name == "businessDescription" || question.field_name == "industry" {
            self.refresh_business_type();
        }

        // Eager re-derivation keeps the position consistent with the
        // answered set at all times.
        self.block_index = derive_block_index(&self.answered, &self.catalog, &self.profile);
        self.persist_local()?;

        if question.kind == QuestionKind::TextWithExtraction {
            self.run_extraction(&question, &value)?;
        }

        if newly_answered {
            self.tracker.observe(self.answered.len(), Instant::now());
            self.new_answers_since_flush += 1;
            if self.new_answers_since_flush >= self.config.remote_flush_every {
                self.flush_remote_background();
            }
        }

        let completed = if self.config.mode == AssessmentMode::Onboarding
            && self.answered.len() >= self.required_answers()
        {
            Some(self.complete_assessment()?)
        } else {
            None
        };

        Ok(AnswerOutcome {
            newly_answered,
            answered: self.answered.len(),
            completed,
        })
    }

    fn run_extraction(&mut self, question: &Question, value: &AnswerValue) -> Result<()> {
        let Some(text) = value.as_text() else {
            return Ok(());
        };
        if text.trim().len() < MIN_EXTRACTION_LENGTH {
            return Ok(());
        }
        match self.extractor.extract(text, self.config.language) {
            Ok(info) => {
                if !info.is_empty() {
                    info.apply_to(&mut self.profile);
                    self.refresh_business_type();
                    self.persist_local()?;
                }
            }
            Err(e) => {
                warn!(question = %question.id, error = %e, "business info extraction failed");
                self.observer.on_notice(&Notice::ExtractionFailed {
                    reason: e.to_string(),
                });
            }
        }
        Ok(())
    }

    fn refresh_business_type(&mut self) {
        let description = self.profile.text("businessDescription").unwrap_or("");
        let industry = self.profile.text("industry").unwrap_or("");
        if !description.is_empty() || !industry.is_empty() {
            self.business_type = Some(detect_business_type(description, industry));
        }
    }

    /// Advance to the next block. Returns `Ok(Some(report))` when the last
    /// block was completed and the assessment finished, `Ok(None)` after a
    /// plain advance. Advancing with unanswered visible questions in the
    /// current block is a no-op.
    pub fn go_to_next_block(&mut self) -> Result<Option<CompletionReport>> {
        if self.is_completed {
            return Err(TelarError::AlreadyCompleted);
        }
        // A stored index past the catalog means older state; re-derive
        // rather than fail the session.
        if self.block_index >= self.catalog.block_count() {
            warn!(
                index = self.block_index,
                blocks = self.catalog.block_count(),
                "block index out of range, re-deriving"
            );
            self.block_index = derive_block_index(&self.answered, &self.catalog, &self.profile);
            self.persist_local()?;
            return Ok(None);
        }

        if !self.current_block_complete() {
            debug!(block = self.block_index, "block incomplete, staying put");
            return Ok(None);
        }

        if self.block_index + 1 >= self.catalog.block_count() {
            return Ok(Some(self.complete_assessment()?));
        }

        self.block_index += 1;
        self.persist_local()?;
        Ok(None)
    }

    /// Step back one block for review. Never an error; the first block
    /// stays put.
    pub fn go_to_previous_block(&mut self) -> Result<()> {
        if self.block_index > 0 {
            self.block_index -= 1;
            self.persist_local()?;
        }
        Ok(())
    }

    /// Resume after a checkpoint: re-derive the position from the answered
    /// set and continue there.
    pub fn continue_from_checkpoint(&mut self) -> Result<Option<CompletionReport>> {
        if self.is_completed {
            return Err(TelarError::AlreadyCompleted);
        }
        self.show_checkpoint = false;
        self.block_index = derive_block_index(&self.answered, &self.catalog, &self.profile);
        self.persist_local()?;

        if self.answered.len() >= self.required_answers() {
            return Ok(Some(self.complete_assessment()?));
        }
        Ok(None)
    }

    /// Finish the assessment. Requires every question answered (3 in
    /// onboarding mode), rejects re-entry and repeat completion, and
    /// forces a final synchronous flush to both tiers.
    pub fn complete_assessment(&mut self) -> Result<CompletionReport> {
        if self.is_completed {
            return Err(TelarError::AlreadyCompleted);
        }
        if self.completing {
            return Err(TelarError::CompletionInFlight);
        }
        let required = self.required_answers();
        if self.answered.len() < required {
            return Err(TelarError::IncompleteAssessment {
                answered: self.answered.len(),
                required,
            });
        }

        self.completing = true;
        let report = self.build_report();
        self.show_checkpoint = false;
        self.is_completed = true;

        if let Err(e) = self.persist_local() {
            // Roll back so the caller can retry completion.
            self.is_completed = false;
            self.completing = false;
            return Err(e);
        }

        // Drain queued background flushes first so the completed record is
        // the last remote write, then flush synchronously.
        self.worker = None;
        if let Some(remote) = &self.remote {
            let record = self.snapshot_record();
            if !upsert_with_retry(
                remote.as_ref(),
                &self.config.retry,
                &self.config.user_id,
                &record,
            ) {
                self.observer
                    .on_notice(&Notice::RemoteSyncFailed { failed_flushes: 1 });
            }
        }

        self.completing = false;
        info!(
            user = %self.config.user_id,
            band = ?report.band,
            answered = report.answered,
            "assessment completed"
        );
        self.observer.on_complete(&report);
        Ok(report)
    }

    fn build_report(&self) -> CompletionReport {
        let placeholder = self.config.mode == AssessmentMode::Onboarding;
        let scores = if placeholder {
            CategoryScores::placeholder()
        } else {
            calculate_scores(&self.profile)
        };
        let band = MaturityBand::for_average(scores.average());
        let tasks = if placeholder {
            Vec::new()
        } else {
            recommended_tasks(&scores, self.config.language)
        };
        CompletionReport {
            scores,
            band,
            tasks,
            business_type: self.business_type.unwrap_or_default(),
            answered: self.answered.len(),
            placeholder_scores: placeholder,
        }
    }

    /// Drive debounced checkpoints and drain background flush failures.
    /// Call this from the host loop; it is cheap when nothing is pending.
    pub fn poll_events_at(&mut self, now: Instant) -> Result<()> {
        if let Some(info) = self.tracker.poll(now) {
            self.show_checkpoint = true;
            self.observer.on_checkpoint(&info);
            self.persist_local()?;
        }
        if let Some(worker) = &self.worker {
            let failed = worker.take_failures();
            if failed > 0 {
                self.observer.on_notice(&Notice::RemoteSyncFailed {
                    failed_flushes: failed,
                });
            }
        }
        Ok(())
    }

    pub fn poll_events(&mut self) -> Result<()> {
        self.poll_events_at(Instant::now())
    }

    /// Emit any pending checkpoint immediately, skipping the debounce.
    /// One-shot hosts call this before exiting; the debounce only matters
    /// for long-lived interactive loops.
    pub fn flush_checkpoint(&mut self) -> Result<()> {
        if let Some(info) = self.tracker.flush() {
            self.show_checkpoint = true;
            self.observer.on_checkpoint(&info);
            self.persist_local()?;
        }
        Ok(())
    }

    fn flush_remote_background(&mut self) {
        if let Some(worker) = &self.worker {
            worker.enqueue(&self.config.user_id, self.snapshot_record());
            self.new_answers_since_flush = 0;
        }
    }

    fn persist_local(&self) -> Result<()> {
        self.local.save(&self.config.user_id, &self.snapshot_record())
    }

    fn snapshot_record(&self) -> ProgressRecord {
        ProgressRecord {
            block_index: self.block_index,
            answered_ids: self.answered.iter().cloned().collect(),
            profile: self.profile.clone(),
            business_type: self.business_type,
            show_checkpoint: self.show_checkpoint,
            is_completed: self.is_completed,
            last_updated: Utc::now(),
        }
    }

    fn required_answers(&self) -> usize {
        self.catalog.question_count()
    }

    fn current_block_complete(&self) -> bool {
        self.catalog.block(self.block_index).is_some_and(|block| {
            block
                .questions
                .iter()
                .filter(|q| is_visible(q, &self.profile))
                .all(|q| self.answered.contains(&q.id))
        })
    }

    /// The block the user is currently on. The index is kept in range by
    /// derivation, so this only returns `None` for an empty catalog.
    #[must_use]
    pub fn current_block(&self) -> Option<&Block> {
        self.catalog.block(self.block_index)
    }

    /// First unanswered visible question of the current block.
    #[must_use]
    pub fn next_question(&self) -> Option<&Question> {
        self.current_block()?
            .questions
            .iter()
            .filter(|q| is_visible(q, &self.profile))
            .find(|q| !self.answered.contains(&q.id))
    }

    /// Live scores over the current profile, for status previews. Not the
    /// completion result.
    #[must_use]
    pub fn score_preview(&self) -> CategoryScores {
        calculate_scores(&self.profile)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    #[must_use]
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answered.contains(question_id)
    }

    #[must_use]
    pub fn block_index(&self) -> usize {
        self.block_index
    }

    /// True when an emitted checkpoint has not been continued past yet.
    /// Persists across restarts so a resuming host can re-offer the pause.
    #[must_use]
    pub fn checkpoint_pending(&self) -> bool {
        self.show_checkpoint
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    #[must_use]
    pub fn profile(&self) -> &ProfileSnapshot {
        &self.profile
    }

    #[must_use]
    pub fn business_type(&self) -> Option<BusinessType> {
        self.business_type
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }
}

impl<L: LocalTier, O: SessionObserver> Drop for AssessmentSession<L, O> {
    /// Final local flush. The worker's own Drop drains any queued remote
    /// writes after this.
    fn drop(&mut self) {
        if let Err(e) = self.persist_local() {
            warn!(user = %self.config.user_id, error = %e, "final local flush failed");
        }
    }
}
