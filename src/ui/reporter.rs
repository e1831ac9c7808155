//! Human-readable run reporting

use crate::executor::TransferRecord;
use crate::jobs::{JobStats, RunSummary, SyncEvent};
use crate::types::{SyncError, TransferKind, TransferMethod};
use console::style;
use indicatif::HumanBytes;
use std::cell::Cell;

/// Prints progress for sync events
///
/// Job headers, transfer lines and the summary go to stdout. Warnings and
/// job failures go through `tracing` so they land on stderr.
#[derive(Debug, Default)]
pub struct Reporter {
    quiet: bool,
    jobs_seen: Cell<usize>,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            jobs_seen: Cell::new(0),
        }
    }

    /// Handle one event emitted by the job runner
    pub fn handle(&self, event: &SyncEvent<'_>) {
        match event {
            SyncEvent::JobStarted { name, method } => {
                let index = self.jobs_seen.get() + 1;
                self.jobs_seen.set(index);
                println!("{}", format_job_header(index, name, *method));
            }
            SyncEvent::MethodDefaulted { name, raw } => {
                tracing::warn!("{}", format_method_warning(name, *raw));
            }
            SyncEvent::Transferred(record) => {
                if !self.quiet {
                    println!("{}", format_transfer(record));
                }
            }
            SyncEvent::JobFailed { name, stats, error } => {
                tracing::error!("{}", format_job_failure(name, stats, error));
            }
            SyncEvent::JobFinished { name, stats } => {
                println!("{}", format_job_done(name, stats));
            }
        }
    }

    /// Print the end-of-run summary
    pub fn finish(&self, summary: &RunSummary) {
        println!("{}", format_run_summary(summary));
    }
}

fn format_job_header(index: usize, name: &str, method: TransferMethod) -> String {
    format!(
        "{} {} ({})",
        style(format!("[{index}]")).bold(),
        style(display_name(name)).cyan().bold(),
        method
    )
}

fn format_method_warning(name: &str, raw: Option<&str>) -> String {
    match raw {
        Some(value) => format!(
            "Job '{}': unknown method '{}', using 'copy'",
            display_name(name),
            value
        ),
        None => format!(
            "Job '{}': no method configured, using 'copy'",
            display_name(name)
        ),
    }
}

fn format_transfer(record: &TransferRecord) -> String {
    let label = match record.kind {
        TransferKind::Copy => style("copy").green(),
        TransferKind::Move => style("move").yellow(),
    };
    format!(
        "  {}  {} -> {}",
        label,
        record.from.display(),
        record.to.display()
    )
}

fn format_job_done(name: &str, stats: &JobStats) -> String {
    let mut line = format!(
        "  {} '{}': {} file(s), {} copied, {} moved, {}",
        style("done").green().bold(),
        display_name(name),
        stats.files,
        stats.copies,
        stats.moves,
        HumanBytes(stats.bytes)
    );
    if stats.skipped > 0 {
        line.push_str(&format!(", {} skipped", stats.skipped));
    }
    line
}

fn format_job_failure(name: &str, stats: &JobStats, error: &SyncError) -> String {
    let mut line = format!(
        "Sync job '{}' failed after {} transfer(s): {}",
        display_name(name),
        stats.transfers(),
        error
    );
    if error.is_transfer_error() && stats.transfers() > 0 {
        line.push_str(" (completed transfers are kept)");
    }
    line
}

fn format_run_summary(summary: &RunSummary) -> String {
    let failed = summary.failed();
    let failed_label = if failed > 0 {
        style(format!("{failed} failed")).red().bold()
    } else {
        style(format!("{failed} failed"))
    };

    let mut lines = vec![format!(
        "Summary: {} job(s), {} succeeded, {} | {} transfer(s), {}",
        summary.reports.len(),
        summary.succeeded(),
        failed_label,
        summary.total_transfers(),
        HumanBytes(summary.total_bytes())
    )];

    for report in summary.reports.iter().filter(|r| !r.is_success()) {
        if let Some(error) = &report.error {
            lines.push(format!("  - {}: {}", display_name(&report.name), error));
        }
    }

    lines.join("\n")
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "<unnamed>"
    } else {
        name
    }
}
