//! Sync jobs: per-job tree synchronization and the sequential job runner

mod runner;
mod synchronizer;

use crate::executor::TransferRecord;
use crate::types::{SyncError, TransferMethod};

pub use runner::{run_jobs, RunSummary};
pub use synchronizer::{sync_job, JobReport, JobStats};

/// Events emitted while running jobs.
#[derive(Debug)]
pub enum SyncEvent<'a> {
    /// Job processing started.
    JobStarted {
        name: &'a str,
        method: TransferMethod,
    },
    /// The configured method was missing or invalid and `copy` is used instead.
    MethodDefaulted {
        name: &'a str,
        raw: Option<&'a str>,
    },
    /// One file reached one target.
    Transferred(&'a TransferRecord),
    /// Job stopped early; transfers already made are kept.
    JobFailed {
        name: &'a str,
        stats: &'a JobStats,
        error: &'a SyncError,
    },
    /// Job walked its whole tree.
    JobFinished { name: &'a str, stats: &'a JobStats },
}

/// Optional callback used to receive sync events. The callback may borrow
/// from the caller's stack for `'a`.
pub type SyncCallback<'a> = dyn Fn(&SyncEvent<'_>) + 'a;

fn emit_event(on_event: Option<&SyncCallback<'_>>, event: SyncEvent<'_>) {
    if let Some(callback) = on_event {
        callback(&event);
    }
}
