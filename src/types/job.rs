//! SyncJob - One configured unit of work

use super::{ResolvedMethod, TransferMethod};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// A source tree, its ordered target trees and the raw transfer method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncJob {
    /// Human label, not required to be unique
    #[serde(default)]
    pub name: String,

    /// Root of the tree to replicate
    #[serde(default)]
    pub source_dir: PathBuf,

    /// Destinations; order is significant for `move`
    #[serde(default)]
    pub target_dirs: Vec<PathBuf>,

    /// Raw method as written in the config, normalized when the job runs.
    /// Non-string values are kept as their textual form so they fall back
    /// to copy instead of failing the load.
    #[serde(
        default,
        deserialize_with = "deserialize_raw_method",
        skip_serializing_if = "Option::is_none"
    )]
    pub method: Option<String>,
}

impl SyncJob {
    pub fn new(
        name: impl Into<String>,
        source_dir: impl Into<PathBuf>,
        target_dirs: Vec<PathBuf>,
        method: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            source_dir: source_dir.into(),
            target_dirs,
            method: method.map(str::to_string),
        }
    }

    /// Validated transfer method for this job. Leaves `self.method` untouched.
    pub fn resolved_method(&self) -> ResolvedMethod {
        TransferMethod::resolve(self.method.as_deref())
    }
}

fn deserialize_raw_method<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
