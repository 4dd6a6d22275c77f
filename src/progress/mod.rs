//! Progress persistence and reconciliation.
//!
//! Two tiers: a device-local store that is always written synchronously,
//! and an account-scoped remote store flushed in the background. Loading
//! merges both by recency and repairs the block position from the answered
//! set.

mod local;
mod reconcile;
mod record;
mod remote;
mod worker;

pub use local::{fused_key, legacy_key, FileStore, LocalLoad, LocalProgress, LocalTier, MemoryStore};
pub use reconcile::{
    derive_block_index, load_reconciled, merge_by_recency, validate_answered_ids, IdValidation,
    MergeSource, ReconciledState,
};
pub use record::{LegacyRecord, ProgressRecord};
pub use remote::{upsert_with_retry, HttpRemote, MemoryRemote, RemoteTier, RetryConfig};
pub use worker::RemoteFlushWorker;
