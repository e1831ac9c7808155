//! Tree synchronizer for a single job

use super::{emit_event, SyncCallback, SyncEvent};
use crate::executor::fan_out;
use crate::scanner::{walk_files, WalkStats};
use crate::types::{SyncError, SyncJob, TransferKind, TransferMethod};

/// Per-job transfer counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobStats {
    /// Source files fully transferred to every target
    pub files: u64,
    /// Source entries that are not transferable files
    pub skipped: u64,
    /// Completed copy transfers
    pub copies: u64,
    /// Completed move transfers
    pub moves: u64,
    /// Bytes written across all targets
    pub bytes: u64,
}

impl JobStats {
    pub fn transfers(&self) -> u64 {
        self.copies + self.moves
    }
}

/// Result of running one job
#[derive(Debug)]
pub struct JobReport {
    pub name: String,
    pub method: TransferMethod,
    /// Work completed, including work done before a failure
    pub stats: JobStats,
    pub error: Option<SyncError>,
}

impl JobReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Replicate `job.source_dir` into every entry of `job.target_dirs`
///
/// The method is normalized into a local value first; an invalid one
/// falls back to copy and emits [`SyncEvent::MethodDefaulted`]. The first
/// error aborts the remaining walk and is stored in the report instead of
/// being returned.
pub fn sync_job(job: &SyncJob, on_event: Option<&SyncCallback<'_>>) -> JobReport {
    let resolved = job.resolved_method();
    let method = resolved.method;

    emit_event(
        on_event,
        SyncEvent::JobStarted {
            name: &job.name,
            method,
        },
    );
    if resolved.defaulted {
        emit_event(
            on_event,
            SyncEvent::MethodDefaulted {
                name: &job.name,
                raw: job.method.as_deref(),
            },
        );
    }

    tracing::debug!(
        "job '{}': {} -> {} target(s) via {}",
        job.name,
        job.source_dir.display(),
        job.target_dirs.len(),
        method
    );

    let mut stats = JobStats::default();
    let mut walk = WalkStats::default();
    let result = walk_files(&job.source_dir, &mut walk, |path, relative| {
        fan_out(path, relative, &job.target_dirs, method, |record| {
            match record.kind {
                TransferKind::Copy => stats.copies += 1,
                TransferKind::Move => stats.moves += 1,
            }
            stats.bytes += record.bytes;
            emit_event(on_event, SyncEvent::Transferred(&record));
        })
    });
    stats.files = walk.files;
    stats.skipped = walk.skipped;

    let error = result.err();
    match &error {
        Some(error) => emit_event(
            on_event,
            SyncEvent::JobFailed {
                name: &job.name,
                stats: &stats,
                error,
            },
        ),
        None => emit_event(
            on_event,
            SyncEvent::JobFinished {
                name: &job.name,
                stats: &stats,
            },
        ),
    }

    JobReport {
        name: job.name.clone(),
        method,
        stats,
        error,
    }
}
