//! Conversational assessment sessions: answer handling, block navigation,
//! checkpoints, and guarded completion.

mod checkpoint;
mod controller;
mod events;

pub use checkpoint::{
    checkpoint_due, CheckpointInfo, CheckpointTracker, CHECKPOINT_DEBOUNCE, CHECKPOINT_FREQUENCY,
};
pub use controller::{AnswerOutcome, AssessmentSession, SessionConfig, REMOTE_FLUSH_EVERY};
pub use events::{CompletionReport, Notice, NullObserver, RecordingObserver, SessionObserver};
