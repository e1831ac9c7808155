//! Main sync command

use crate::config::{resolve_config_path, Config};
use crate::jobs::{run_jobs, RunSummary, SyncEvent};
use crate::types::SyncError;
use crate::ui::Reporter;
use std::path::Path;

/// Load the configuration at `config_path` and run every job
///
/// Relative paths are resolved against `cwd`. Configuration problems are
/// returned as errors; job failures are only reported and end up in the
/// returned summary.
pub fn run(config_path: &Path, cwd: &Path, quiet: bool) -> Result<RunSummary, SyncError> {
    let path = resolve_config_path(config_path, cwd);
    tracing::debug!("loading configuration from {}", path.display());

    let config = Config::load(&path)?;
    if config.jobs.is_empty() {
        tracing::warn!("No sync jobs configured in {}", path.display());
    }

    let reporter = Reporter::new(quiet);
    let on_event = |event: &SyncEvent<'_>| reporter.handle(event);
    let summary = run_jobs(&config.jobs, Some(&on_event));
    reporter.finish(&summary);

    Ok(summary)
}
