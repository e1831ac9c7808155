//! Error types for dirsync

use super::TransferKind;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for dirsync operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file does not exist
    #[error("Configuration file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Configuration file exists but could not be read
    #[error("Failed to read configuration {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Job source directory does not exist
    #[error("Source directory does not exist: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// Directory traversal failed
    #[error("Failed to walk {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    /// Destination parent directory could not be created
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copy or move of a single file failed
    #[error("Failed to {kind} {} -> {}: {source}", .from.display(), .to.display())]
    Transfer {
        kind: TransferKind,
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    /// Check if this error should abort the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SyncError::Config(_)
                | SyncError::ConfigNotFound { .. }
                | SyncError::ConfigRead { .. }
                | SyncError::ConfigParse { .. }
        )
    }

    /// Check if this error came from a single-file transfer
    pub fn is_transfer_error(&self) -> bool {
        matches!(self, SyncError::Transfer { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_automatic_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let sync_error: SyncError = io_error.into();

        assert!(matches!(sync_error, SyncError::Io(_)));
        assert!(sync_error.to_string().contains("IO error"));
    }

    #[test]
    fn test_io_error_from_function() {
        fn returns_io_error() -> Result<(), SyncError> {
            let _file = std::fs::File::open("/nonexistent/path/file.txt")?;
            Ok(())
        }

        let result = returns_io_error();
        assert!(matches!(result, Err(SyncError::Io(_))));
    }

    #[test]
    fn test_config_errors_are_fatal() {
        assert!(SyncError::Config("bad".to_string()).is_fatal());
        assert!(SyncError::ConfigNotFound {
            path: PathBuf::from("config.yaml")
        }
        .is_fatal());
        assert!(SyncError::ConfigParse {
            path: PathBuf::from("config.yaml"),
            message: "unexpected token".to_string()
        }
        .is_fatal());
        assert!(SyncError::ConfigRead {
            path: PathBuf::from("config.yaml"),
            source: IoError::new(ErrorKind::PermissionDenied, "denied"),
        }
        .is_fatal());
    }

    #[test]
    fn test_job_errors_are_not_fatal() {
        assert!(!SyncError::SourceNotFound {
            path: PathBuf::from("missing")
        }
        .is_fatal());
        assert!(!SyncError::Walk {
            path: PathBuf::from("src"),
            message: "denied".to_string()
        }
        .is_fatal());
        assert!(!SyncError::Io(IoError::new(ErrorKind::Other, "x")).is_fatal());
    }

    #[test]
    fn test_transfer_error_message() {
        let error = SyncError::Transfer {
            kind: TransferKind::Move,
            from: PathBuf::from("src/a.txt"),
            to: PathBuf::from("t1/a.txt"),
            source: IoError::new(ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("Failed to move"));
        assert!(message.contains("src/a.txt -> t1/a.txt"));
        assert!(error.is_transfer_error());
        assert!(!error.is_fatal());
    }

    #[test]
    fn test_create_dir_exposes_source() {
        use std::error::Error;

        let error = SyncError::CreateDir {
            path: PathBuf::from("t1/nested"),
            source: IoError::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("t1/nested"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_not_found_mentions_path() {
        let error = SyncError::ConfigNotFound {
            path: PathBuf::from("/etc/dirsync/config.yaml"),
        };
        assert!(error
            .to_string()
            .contains("Configuration file not found: /etc/dirsync/config.yaml"));
    }
}
