//! Sequential job runner

use super::{sync_job, JobReport, SyncCallback};
use crate::types::SyncJob;

/// Reports for every job of a run, in configuration order
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<JobReport>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.succeeded()
    }

    pub fn total_transfers(&self) -> u64 {
        self.reports.iter().map(|r| r.stats.transfers()).sum()
    }

    pub fn total_bytes(&self) -> u64 {
        self.reports.iter().map(|r| r.stats.bytes).sum()
    }
}

/// Run every job in order
///
/// A failed job is recorded in its report and never stops the jobs after it.
pub fn run_jobs(jobs: &[SyncJob], on_event: Option<&SyncCallback<'_>>) -> RunSummary {
    let mut summary = RunSummary {
        reports: Vec::with_capacity(jobs.len()),
    };

    for (idx, job) in jobs.iter().enumerate() {
        tracing::debug!("running job {}/{}: '{}'", idx + 1, jobs.len(), job.name);
        summary.reports.push(sync_job(job, on_event));
    }

    summary
}
