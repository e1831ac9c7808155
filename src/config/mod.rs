//! Configuration management

mod cli;
mod format;

pub use cli::Cli;
pub use format::ConfigFormat;

use crate::types::{SyncError, SyncJob};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Example document printed by `--example`
pub const EXAMPLE_CONFIG: &str = r#"sync_configs:
  - name: "sync1"
    source_dir: "/path/to/source1"
    target_dirs:
      - "/path/to/target1"
      - "/path/to/target2"
    method: "copy"
  - name: "sync2"
    source_dir: "/path/to/source2"
    target_dirs:
      - "/path/to/target3"
      - "/path/to/target4"
    method: "move"
"#;

/// Parsed configuration: the ordered list of sync jobs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, rename = "sync_configs")]
    pub jobs: Vec<SyncJob>,
}

impl Config {
    /// Load and validate a configuration file
    ///
    /// The syntax is picked from the extension (see [`ConfigFormat`]). An
    /// empty document yields a configuration without jobs.
    ///
    /// # Errors
    /// * `SyncError::ConfigNotFound` - `path` does not exist
    /// * `SyncError::ConfigRead` - the file exists but could not be read
    /// * `SyncError::ConfigParse` - invalid syntax or structure
    /// * `SyncError::Config` - a job failed validation
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SyncError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => SyncError::ConfigRead {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        Self::parse(&content, ConfigFormat::from_path(path)).map_err(|err| match err {
            SyncError::ConfigParse { message, .. } => SyncError::ConfigParse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, SyncError> {
        let config = format::parse_document::<Config>(content, format)
            .map_err(|message| SyncError::ConfigParse {
                path: PathBuf::new(),
                message,
            })?
            .unwrap_or_default();

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// Only required fields are checked here; `method` is normalized when
    /// each job runs.
    pub fn validate(&self) -> Result<(), SyncError> {
        for (idx, job) in self.jobs.iter().enumerate() {
            if job.source_dir.as_os_str().is_empty() {
                return Err(SyncError::Config(format!(
                    "Job #{} ('{}') has an empty source_dir",
                    idx + 1,
                    job.name
                )));
            }
        }

        Ok(())
    }
}

/// Resolve a configuration path against `cwd` unless it is already absolute
pub fn resolve_config_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
