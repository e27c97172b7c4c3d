use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recorded answers for one process: a score and a note per dimension
///
/// Created lazily on first interaction, never deleted. Entries keyed by
/// dimension ids the current catalog does not know are skipped on render
/// but kept on persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub scores: BTreeMap<String, u8>,
    #[serde(default)]
    pub notes: BTreeMap<String, String>,
}

impl Response {
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty() && self.notes.is_empty()
    }
}
