//! Two-source progress reconciliation.
//!
//! Load-time pipeline: merge the local and remote records by recency, purge
//! answered ids the current catalog no longer defines, then re-derive the
//! block position from the answered set instead of trusting the stored
//! index. The derivation is pure and runs eagerly, so a stale or corrupt
//! index can never park a user on a block they cannot finish.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::catalog::{is_visible, AssessmentMode, Catalog, ONBOARDING_QUESTION_IDS};
use crate::error::Result;
use crate::profile::ProfileSnapshot;

use super::local::{LocalProgress, LocalTier};
use super::record::ProgressRecord;
use super::remote::RemoteTier;

/// Which source won the recency merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSource {
    Local,
    Remote,
    /// Neither tier had a usable record; the session starts fresh.
    Fresh,
}

/// Pick the fresher of two records. Local wins ties so an offline device
/// never loses its own answers to an equally old remote row.
#[must_use]
pub fn merge_by_recency(
    local: Option<ProgressRecord>,
    remote: Option<ProgressRecord>,
) -> (Option<ProgressRecord>, MergeSource) {
    match (local, remote) {
        (Some(l), Some(r)) => {
            if r.last_updated > l.last_updated {
                (Some(r), MergeSource::Remote)
            } else {
                (Some(l), MergeSource::Local)
            }
        }
        (Some(l), None) => (Some(l), MergeSource::Local),
        (None, Some(r)) => (Some(r), MergeSource::Remote),
        (None, None) => (None, MergeSource::Fresh),
    }
}

/// Result of validating stored answered ids against the current catalog.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IdValidation {
    pub valid: BTreeSet<String>,
    pub removed: Vec<String>,
}

/// Keep only ids the catalog still defines. Ids from retired catalog
/// versions are purged; their profile fields stay untouched.
#[must_use]
pub fn validate_answered_ids<I>(ids: I, catalog: &Catalog) -> IdValidation
where
    I: IntoIterator<Item = String>,
{
    let known = catalog.valid_ids();
    let mut validation = IdValidation::default();
    for id in ids {
        if known.contains(id.as_str()) {
            validation.valid.insert(id);
        } else {
            validation.removed.push(id);
        }
    }
    validation
}

/// Derive the block position from the answered set: the first block with an
/// unanswered question that is visible under the current profile. All
/// blocks complete resolves to the last block; an empty answered set to the
/// first. Pure, and total over any input.
#[must_use]
pub fn derive_block_index(
    answered: &BTreeSet<String>,
    catalog: &Catalog,
    profile: &ProfileSnapshot,
) -> usize {
    if answered.is_empty() || catalog.block_count() == 0 {
        return 0;
    }
    for (index, block) in catalog.blocks().iter().enumerate() {
        let incomplete = block
            .questions
            .iter()
            .filter(|q| is_visible(q, profile))
            .any(|q| !answered.contains(&q.id));
        if incomplete {
            return index;
        }
    }
    catalog.block_count() - 1
}

/// Fully reconciled session state ready to drive a controller.
#[derive(Debug)]
pub struct ReconciledState {
    pub record: ProgressRecord,
    pub source: MergeSource,
    /// Ids purged because the current catalog no longer defines them.
    pub removed_ids: Vec<String>,
    /// The stored block index disagreed with the derived one.
    pub repaired_index: bool,
    /// Progress came in via the legacy local key.
    pub migrated_from_legacy: bool,
    /// A local payload existed but could not be parsed.
    pub corrupt_local: bool,
    /// The remote fetch errored; reconciliation proceeded on local only.
    pub remote_unavailable: bool,
}

/// Load and reconcile progress for a user against a catalog.
///
/// The remote fetch is best-effort: an error degrades to local-only with
/// `remote_unavailable` set, it never aborts the load.
pub fn load_reconciled<T: LocalTier>(
    local: &LocalProgress<T>,
    remote: Option<&dyn RemoteTier>,
    user_id: &str,
    catalog: &Catalog,
) -> Result<ReconciledState> {
    let local_load = local.load(user_id)?;
    let migrated_from_legacy = local_load.migrated_from_legacy;
    let corrupt_local = local_load.corrupt;

    let mut remote_unavailable = false;
    let remote_record = match remote {
        Some(tier) => match tier.fetch(user_id) {
            Ok(record) => record,
            Err(e) => {
                warn!(user = %user_id, error = %e, "remote fetch failed, using local only");
                remote_unavailable = true;
                None
            }
        },
        None => None,
    };

    let (merged, source) = merge_by_recency(local_load.record, remote_record);
    let mut record = merged.unwrap_or_else(|| ProgressRecord::empty(chrono::Utc::now()));

    // Onboarding sessions only track the fixed 3-question subset, whatever
    // a full-mode session stored before.
    let mode_ids: Vec<String> = if catalog.mode() == AssessmentMode::Onboarding {
        record
            .answered_ids
            .drain(..)
            .filter(|id| ONBOARDING_QUESTION_IDS.contains(&id.as_str()))
            .collect()
    } else {
        std::mem::take(&mut record.answered_ids)
    };

    let validation = validate_answered_ids(mode_ids, catalog);
    if !validation.removed.is_empty() {
        info!(
            user = %user_id,
            removed = validation.removed.len(),
            remaining = validation.valid.len(),
            "purged answered ids from retired catalog versions"
        );
    }

    let derived = derive_block_index(&validation.valid, catalog, &record.profile);
    let repaired_index = record.block_index != derived;
    if repaired_index {
        debug!(
            user = %user_id,
            stored = record.block_index,
            derived,
            "block index re-derived from answered set"
        );
    }

    record.block_index = derived;
    record.answered_ids = validation.valid.iter().cloned().collect();

    Ok(ReconciledState {
        record,
        source,
        removed_ids: validation.removed,
        repaired_index,
        migrated_from_legacy,
        corrupt_local,
        remote_unavailable,
    })
}
