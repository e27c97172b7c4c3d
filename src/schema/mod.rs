// Schema document loading (the two static catalogs)

use crate::models::{ProcessCatalog, StageCatalog};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PROCESSES_FILE: &str = "processes.json";
pub const STAGES_FILE: &str = "stages.json";

/// Fatal schema load failure. Initialization must not proceed past this:
/// no partial state, no partial output.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {name}: {source}")]
    Unreachable {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolve the schema data directory: `$OPSCHECK_DATA` if set, else `data`
pub fn default_data_dir() -> PathBuf {
    match std::env::var("OPSCHECK_DATA") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("data"),
    }
}

fn load_document<T: DeserializeOwned>(
    dir: &Path,
    name: &'static str,
) -> Result<T, LoadError> {
    let raw = std::fs::read_to_string(dir.join(name))
        .map_err(|source| LoadError::Unreachable { name, source })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse { name, source })
}

/// Load both catalogs from the data directory.
///
/// The two documents have no ordering dependency, so they are read on
/// separate scoped threads and joined; both must succeed.
pub fn load_catalogs(dir: &Path) -> Result<(ProcessCatalog, StageCatalog), LoadError> {
    let (processes, stages) = std::thread::scope(|scope| {
        let processes = scope.spawn(|| load_document::<ProcessCatalog>(dir, PROCESSES_FILE));
        let stages = scope.spawn(|| load_document::<StageCatalog>(dir, STAGES_FILE));
        (
            processes.join().expect("process catalog loader panicked"),
            stages.join().expect("stage catalog loader panicked"),
        )
    });
    Ok((processes?, stages?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PROCESSES_JSON: &str = r#"{
        "processes": [
            { "id": "P01", "title": "Payroll", "description": "Paying people",
              "stages": { "first-hires": "critical" } }
        ],
        "dimensions": {
            "reliability": { "label": "Reliability",
                             "options": ["broken", "shaky", "ok", "solid", "optimized"] }
        }
    }"#;

    const STAGES_JSON: &str = r#"{
        "stages": [
            { "id": "first-hires", "name": "First Hires", "shortName": "Hires",
              "description": "First employees join" }
        ],
        "employeeRanges": [
            { "value": "3-5", "label": "3-5 employees", "stage": "first-hires" }
        ],
        "revenueStages": [ { "value": "first-revenue", "label": "First revenue" } ],
        "fundingStages": [ { "value": "bootstrapped", "label": "Bootstrapped" } ]
    }"#;

    #[test]
    fn test_load_catalogs_success() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROCESSES_FILE), PROCESSES_JSON).unwrap();
        fs::write(dir.path().join(STAGES_FILE), STAGES_JSON).unwrap();

        let (processes, stages) = load_catalogs(dir.path()).unwrap();
        assert_eq!(processes.processes.len(), 1);
        assert_eq!(processes.dimensions[0].options.len(), 5);
        assert_eq!(stages.stages[0].id, "first-hires");
    }

    #[test]
    fn test_load_catalogs_missing_document() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROCESSES_FILE), PROCESSES_JSON).unwrap();

        let err = load_catalogs(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Unreachable { name, .. } if name == STAGES_FILE));
    }

    #[test]
    fn test_load_catalogs_malformed_document() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROCESSES_FILE), PROCESSES_JSON).unwrap();
        fs::write(dir.path().join(STAGES_FILE), "{ not json").unwrap();

        let err = load_catalogs(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { name, .. } if name == STAGES_FILE));
    }
}
