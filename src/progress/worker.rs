//! Background remote flush worker.
//!
//! Mid-session remote writes are fire-and-forget: the session enqueues a
//! snapshot and moves on. A single worker thread drains the queue in order,
//! running each write through the retry routine, so remote rows never go
//! backwards from out-of-order flushes. Dropping the worker closes the
//! queue and joins the thread, draining whatever is still pending.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{unbounded, Sender};
use tracing::{debug, warn};

use super::record::ProgressRecord;
use super::remote::{upsert_with_retry, RemoteTier, RetryConfig};

struct FlushJob {
    user_id: String,
    record: ProgressRecord,
}

pub struct RemoteFlushWorker {
    sender: Option<Sender<FlushJob>>,
    handle: Option<JoinHandle<()>>,
    failures: Arc<AtomicU32>,
}

impl RemoteFlushWorker {
    /// Spawn the worker over a remote tier. The tier moves into the worker
    /// thread; all queued writes share it.
    #[must_use]
    pub fn spawn(tier: Box<dyn RemoteTier>, retry: RetryConfig) -> Self {
        let (sender, receiver) = unbounded::<FlushJob>();
        let failures = Arc::new(AtomicU32::new(0));
        let failure_counter = Arc::clone(&failures);

        let handle = std::thread::spawn(move || {
            while let Ok(job) = receiver.recv() {
                debug!(user = %job.user_id, "flushing progress to remote");
                if !upsert_with_retry(tier.as_ref(), &retry, &job.user_id, &job.record) {
                    warn!(user = %job.user_id, "remote flush exhausted retries");
                    failure_counter.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        Self {
            sender: Some(sender),
            handle: Some(handle),
            failures,
        }
    }

    /// Queue a snapshot for remote write. Never blocks on the network.
    pub fn enqueue(&self, user_id: &str, record: ProgressRecord) {
        if let Some(sender) = &self.sender {
            let job = FlushJob {
                user_id: user_id.to_string(),
                record,
            };
            if sender.send(job).is_err() {
                warn!("remote flush worker is gone, dropping snapshot");
            }
        }
    }

    /// Number of flushes that exhausted retries since the last call.
    pub fn take_failures(&self) -> u32 {
        self.failures.swap(0, Ordering::SeqCst)
    }
}

impl Drop for RemoteFlushWorker {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain remaining jobs and exit.
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("remote flush worker panicked");
            }
        }
    }
}
