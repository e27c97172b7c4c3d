use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PROCESSES_JSON: &str = r#"{
    "processes": [
        { "id": "P01", "title": "Payroll", "description": "Paying people",
          "stages": { "first-hires": "critical" } },
        { "id": "P02", "title": "Procurement", "description": "Buying things",
          "stages": {} }
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
        { "value": "3-5", "label": "3-5", "stage": "first-hires" }
    ],
    "revenueStages": [ { "value": "first-revenue", "label": "First revenue" } ],
    "fundingStages": [ { "value": "bootstrapped", "label": "Bootstrapped" } ]
}"#;

fn setup_test_env() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("processes.json"), PROCESSES_JSON).unwrap();
    fs::write(data_dir.join("stages.json"), STAGES_JSON).unwrap();
    (temp_dir, data_dir)
}

fn opscheck(temp_dir: &TempDir, data_dir: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("opscheck").unwrap();
    cmd.env("OPSCHECK_HOME", temp_dir.path().join("state"));
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn test_toggle_future_reveals_section() {
    let (temp_dir, data_dir) = setup_test_env();

    opscheck(&temp_dir, &data_dir)
        .args(["toggle", "future"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coming Later (1) [Hide]"))
        .stdout(predicate::str::contains("Procurement"));
}

#[test]
fn test_toggle_critical_collapses_section() {
    let (temp_dir, data_dir) = setup_test_env();

    opscheck(&temp_dir, &data_dir)
        .args(["toggle", "critical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Critical Now (1) [Show]"))
        .stdout(predicate::str::contains("Payroll").not());
}

#[test]
fn test_toggle_is_session_local() {
    let (temp_dir, data_dir) = setup_test_env();

    opscheck(&temp_dir, &data_dir)
        .args(["toggle", "future"])
        .assert()
        .success();

    // Collapse state is not part of the persisted snapshot: a fresh
    // invocation starts with the future section collapsed again
    opscheck(&temp_dir, &data_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coming Later (1) [Show]"))
        .stdout(predicate::str::contains("Procurement").not());
}

#[test]
fn test_toggle_unknown_section_is_user_error() {
    let (temp_dir, data_dir) = setup_test_env();

    opscheck(&temp_dir, &data_dir)
        .args(["toggle", "urgent"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown section"));
}
