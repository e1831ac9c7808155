//! Byte-for-byte file copy

use crate::types::{SyncError, TransferKind};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

const COPY_BUFFER_SIZE: usize = 128 * 1024;

/// Copy the content of `src` into `dst`
///
/// `dst` is created or truncated. Permissions and timestamps are not
/// carried over, and the parent directory must already exist. A failure
/// mid-stream can leave a partially written `dst` behind.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(SyncError::Transfer)` - source could not be opened, destination
///   could not be created, or the stream was interrupted
///
/// # Example
/// ```no_run
/// use dirsync::executor::copy_file;
/// use std::path::Path;
///
/// let bytes = copy_file(Path::new("source.txt"), Path::new("dest.txt"))?;
/// # Ok::<(), dirsync::SyncError>(())
/// ```
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64, SyncError> {
    stream_copy(src, dst).map_err(|source| SyncError::Transfer {
        kind: TransferKind::Copy,
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    })
}

fn stream_copy(src: &Path, dst: &Path) -> io::Result<u64> {
    let mut src_file = File::open(src)?;
    let mut dst_file = File::create(dst)?;

    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = match src_file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        dst_file.write_all(&buffer[..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    dst_file.flush()?;
    Ok(total_bytes)
}
