//! Executor module for file operations

pub mod copy;
pub mod rename;

use crate::types::{SyncError, TransferKind, TransferMethod};
use std::fs;
use std::path::{Path, PathBuf};

pub use copy::copy_file;
pub use rename::move_file;

/// A completed single-file transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    pub kind: TransferKind,
    pub from: PathBuf,
    pub to: PathBuf,
    pub bytes: u64,
}

/// Deliver one source file to every target according to `method`
///
/// Targets are processed in order. With [`TransferMethod::Move`] every
/// target but the last receives a copy and the last one receives the file
/// itself, so `src` is gone once this returns `Ok`.
///
/// `on_transfer` is called after each successful transfer. The first
/// failure stops the loop; transfers already made are left in place.
pub fn fan_out<F>(
    src: &Path,
    relative: &Path,
    targets: &[PathBuf],
    method: TransferMethod,
    mut on_transfer: F,
) -> Result<(), SyncError>
where
    F: FnMut(TransferRecord),
{
    for (index, target) in targets.iter().enumerate() {
        let dest = destination_path(target, relative);
        prepare_parent(&dest)?;

        let kind = method.kind_for_target(index, targets.len());
        let bytes = match kind {
            TransferKind::Copy => copy_file(src, &dest)?,
            TransferKind::Move => move_file(src, &dest)?,
        };

        on_transfer(TransferRecord {
            kind,
            from: src.to_path_buf(),
            to: dest,
            bytes,
        });
    }

    Ok(())
}

/// Destination of `relative` under `target`. An empty relative path maps to the target itself.
pub fn destination_path(target: &Path, relative: &Path) -> PathBuf {
    if relative.as_os_str().is_empty() {
        target.to_path_buf()
    } else {
        target.join(relative)
    }
}

/// Create every missing parent directory of `dest`
pub fn prepare_parent(dest: &Path) -> Result<(), SyncError> {
    let Some(parent) = dest.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(parent)
        .map_err(|source| SyncError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })
}
