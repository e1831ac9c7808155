//! Sequential source tree walker

use crate::types::SyncError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Counters collected while walking a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Files handed to `visit` that it accepted
    pub files: u64,
    pub dirs: u64,
    /// Entries that are neither directories nor transferable files
    pub skipped: u64,
}

/// Walk `root` and call `visit(path, relative_path)` for every file
///
/// Traversal is depth-first with siblings sorted by file name, so a given
/// tree snapshot is always visited in the same order. Every standard
/// filter of the `ignore` crate is disabled: hidden files and
/// `.gitignore`d entries are visited too. Links are not followed.
///
/// Regular files and symlinks resolving to regular files are visited.
/// Directories and other entry types are not passed to `visit`.
///
/// Counters are accumulated into `stats` as the walk goes, so they still
/// describe the work done when an error stops it early.
///
/// # Errors
/// * `SyncError::SourceNotFound` - `root` does not exist
/// * `SyncError::Walk` - `root` or a directory could not be read, or an entry could not be inspected
/// * Any error returned by `visit`, which stops the walk immediately
pub fn walk_files<F>(root: &Path, stats: &mut WalkStats, mut visit: F) -> Result<(), SyncError>
where
    F: FnMut(&Path, &Path) -> Result<(), SyncError>,
{
    if let Err(e) = fs::symlink_metadata(root) {
        return Err(match e.kind() {
            ErrorKind::NotFound => SyncError::SourceNotFound {
                path: root.to_path_buf(),
            },
            _ => SyncError::Walk {
                path: root.to_path_buf(),
                message: e.to_string(),
            },
        });
    }

    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for result in walker {
        let entry = result.map_err(|e| SyncError::Walk {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;

        let Some(file_type) = entry.file_type() else {
            // stdin entries only; never produced for a filesystem root
            continue;
        };

        if file_type.is_dir() {
            stats.dirs += 1;
            continue;
        }

        if !is_transferable(entry.path(), file_type) {
            tracing::debug!("skipping non-regular entry {}", entry.path().display());
            stats.skipped += 1;
            continue;
        }

        let relative = relative_path(root, entry.path(), entry.depth())?;
        tracing::trace!("visiting {}", relative.display());

        visit(entry.path(), &relative)?;
        stats.files += 1;
    }

    Ok(())
}

fn is_transferable(path: &Path, file_type: fs::FileType) -> bool {
    if file_type.is_file() {
        return true;
    }
    if file_type.is_symlink() {
        return fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
    }
    false
}

/// Path of `path` relative to `root`. A root that is itself a file maps to its file name.
fn relative_path(root: &Path, path: &Path, depth: usize) -> Result<PathBuf, SyncError> {
    if depth == 0 {
        return Ok(path.file_name().map(PathBuf::from).unwrap_or_default());
    }

    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| SyncError::Walk {
            path: path.to_path_buf(),
            message: format!("entry is outside source root {}", root.display()),
        })
}
