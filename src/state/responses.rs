use crate::models::Response;
use std::collections::BTreeMap;

/// All recorded answers, keyed by process id.
///
/// Entries are created lazily on first interaction and never deleted;
/// every write is last-write-wins per field. The whole map round-trips
/// through persistence as-is, so entries for process ids the current
/// catalog does not know survive a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseStore {
    responses: BTreeMap<String, Response>,
}

impl ResponseStore {
    pub fn from_map(responses: BTreeMap<String, Response>) -> Self {
        Self { responses }
    }

    pub fn into_map(self) -> BTreeMap<String, Response> {
        self.responses
    }

    pub fn as_map(&self) -> &BTreeMap<String, Response> {
        &self.responses
    }

    /// Current response for a process, or an empty default. Never fails.
    pub fn get(&self, process_id: &str) -> Response {
        self.responses.get(process_id).cloned().unwrap_or_default()
    }

    pub fn score(&self, process_id: &str, dimension_id: &str) -> Option<u8> {
        self.responses
            .get(process_id)
            .and_then(|r| r.scores.get(dimension_id))
            .copied()
    }

    pub fn note(&self, process_id: &str, dimension_id: &str) -> Option<&str> {
        self.responses
            .get(process_id)
            .and_then(|r| r.notes.get(dimension_id))
            .map(String::as_str)
    }

    pub fn set_score(&mut self, process_id: &str, dimension_id: &str, value: u8) {
        self.responses
            .entry(process_id.to_string())
            .or_default()
            .scores
            .insert(dimension_id.to_string(), value);
    }

    pub fn set_note(&mut self, process_id: &str, dimension_id: &str, text: &str) {
        self.responses
            .entry(process_id.to_string())
            .or_default()
            .notes
            .insert(dimension_id.to_string(), text.to_string());
    }

    /// Every recorded score across all processes and dimensions
    pub fn all_scores(&self) -> impl Iterator<Item = u8> + '_ {
        self.responses
            .values()
            .flat_map(|r| r.scores.values().copied())
    }
}
