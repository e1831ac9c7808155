//! Core type definitions for dirsync

mod error;
mod job;
mod method;

pub use error::SyncError;
pub use job::SyncJob;
pub use method::{ResolvedMethod, TransferKind, TransferMethod};
