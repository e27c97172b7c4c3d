// Snapshot persistence: one JSON blob under a fixed namespace key

use crate::models::Response;
use crate::state::Selection;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Namespace key for the persisted blob. Kept wire-compatible with
/// earlier versions of the checklist, so existing saved data loads.
pub const NAMESPACE: &str = "coo-checklist-data";

/// The entire durable state, round-tripped as one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub user_selections: Selection,
    pub current_stage: String,
    pub responses: BTreeMap<String, Response>,
}

/// File-backed blob store for the snapshot
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// State directory: `$OPSCHECK_HOME` if set, else `$HOME/.opscheck`
    pub fn default_path() -> PathBuf {
        let dir = match std::env::var("OPSCHECK_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => {
                let home = std::env::var("HOME").expect("HOME environment variable not set");
                PathBuf::from(home).join(".opscheck")
            }
        };
        dir.join(format!("{}.json", NAMESPACE))
    }

    pub fn open_default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Store at an explicit path (for testing)
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the snapshot. A missing or malformed blob is not an error:
    /// the caller falls back to defaults and the problem is only logged.
    pub fn load(&self) -> Option<Snapshot> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("could not read saved state {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!(
                    "saved state {} is malformed, starting from defaults: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Write the snapshot synchronously. Called after every mutation.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write saved state: {}", self.path.display()))
    }
}
