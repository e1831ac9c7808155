//! Move a file, falling back to copy + delete across devices

use super::copy::copy_file;
use crate::types::{SyncError, TransferKind};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Move `src` to `dst`
///
/// Uses a single rename when both paths live on the same filesystem. When
/// the OS reports a cross-device rename, the file is copied and the source
/// removed afterwards. An existing `dst` is replaced.
///
/// # Returns
/// * `Ok(u64)` - Size of the moved file
/// * `Err(SyncError::Transfer)` - rename, fallback copy, or source removal failed
pub fn move_file(src: &Path, dst: &Path) -> Result<u64, SyncError> {
    let transfer_error = |source: io::Error| SyncError::Transfer {
        kind: TransferKind::Move,
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    };

    let size = fs::metadata(src).map_err(transfer_error)?.len();

    match fs::rename(src, dst) {
        Ok(()) => Ok(size),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => move_across_devices(src, dst),
        Err(e) => Err(transfer_error(e)),
    }
}

/// Copy `src` to `dst`, then remove `src`
///
/// Used when a rename cannot cross filesystems. Failures are reported as
/// move failures, including those of the copy step.
fn move_across_devices(src: &Path, dst: &Path) -> Result<u64, SyncError> {
    tracing::debug!(
        "rename {} -> {} crosses devices, copying instead",
        src.display(),
        dst.display()
    );

    let as_move = |source: io::Error| SyncError::Transfer {
        kind: TransferKind::Move,
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    };

    let bytes = copy_file(src, dst).map_err(|err| match err {
        SyncError::Transfer { source, .. } => as_move(source),
        other => other,
    })?;
    fs::remove_file(src).map_err(as_move)?;
    Ok(bytes)
}
