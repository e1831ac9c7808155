//! # dirsync - Config-Driven Directory Synchronization
//!
//! Reads a list of sync jobs and replicates each job's source tree into
//! every one of its target directories, by copying or by moving.
//!
//! Each run walks the source once and transfers every regular file
//! unconditionally; there is no diffing or conflict detection.

// Module declarations
pub mod commands;
pub mod config;
pub mod executor;
pub mod jobs;
pub mod logging;
pub mod scanner;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use jobs::{run_jobs, sync_job, JobReport, RunSummary};
pub use types::{SyncError, SyncJob, TransferKind, TransferMethod};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
