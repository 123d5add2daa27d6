//! Integration tests for the assimilate command.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn setup_workspace(temp: &TempDir) -> PathBuf {
    let workspace = temp.path().join("workspace");
    fs::create_dir_all(workspace.join("chronicle")).unwrap();
    workspace
}

fn cxw(temp: &TempDir, workspace: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cxw").unwrap();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("xdg"))
        .env_remove("CODEXWEAVE_CONFIG")
        .arg("--cwd")
        .arg(workspace);
    cmd
}

fn write_records(workspace: &Path, sha: &str, tree_paths: &[&str]) {
    let records = serde_json::json!({
        "org": "sovereign-codex",
        "repositories": [
            {
                "name": "tyme-core",
                "description": "Coherence engine for the hive",
                "language": "Python",
                "topics": ["resonance"],
                "readme": "# Tyme Core\n## Lattice Architecture\ncoherence lattice flame\n",
                "workflows": ["assimilate.yml"],
                "latest_commit": {
                    "sha": sha,
                    "message": "weave the lattice",
                    "date": "2025-05-01T00:00:00Z"
                },
                "created_at": "2024-01-01T00:00:00Z",
                "pushed_at": "2025-05-01T00:00:00Z",
                "tree_paths": tree_paths
            }
        ]
    });
    fs::write(
        workspace.join("chronicle/repo_records.json"),
        serde_json::to_string_pretty(&records).unwrap(),
    )
    .unwrap();
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn first_pass_writes_kernel_and_timeline() {
    let temp = TempDir::new().unwrap();
    let workspace = setup_workspace(&temp);
    write_records(&workspace, "abcdef0123456789", &["README.md", "engine.py"]);

    cxw(&temp, &workspace)
        .arg("assimilate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Codex kernel written to"))
        .stdout(predicate::str::contains("Archivist timeline written to"));

    let kernel = fs::read_to_string(workspace.join("chronicle/codex_kernel.md")).unwrap();
    assert!(kernel.contains("# Living Codex Kernel"));
    assert!(kernel.contains("## tyme-core"));
    assert!(kernel.contains("coherence"));
    assert!(kernel.contains("Lattice Architecture"));
    assert!(kernel.contains("abcdef0 @ 2025-05-01T00:00:00Z"));

    let timeline = read_json(&workspace.join("chronicle/archivist_timeline.json"));
    assert_eq!(timeline["org"], "sovereign-codex");
    let entry = &timeline["repositories"][0];
    assert_eq!(entry["name"], "tyme-core");
    assert_eq!(entry["new_commit"], true);
    assert_eq!(entry["added_files"], serde_json::json!(["README.md", "engine.py"]));
    assert_eq!(
        timeline["snapshot"]["tyme-core"]["commit"],
        "abcdef0123456789"
    );
}

#[test]
fn second_pass_diffs_against_prior_snapshot() {
    let temp = TempDir::new().unwrap();
    let workspace = setup_workspace(&temp);

    write_records(&workspace, "aaaa111122223333", &["engine.py", "old.py"]);
    cxw(&temp, &workspace).arg("assimilate").assert().success();

    write_records(&workspace, "bbbb444455556666", &["engine.py", "new.py"]);
    cxw(&temp, &workspace).arg("assimilate").assert().success();

    let timeline = read_json(&workspace.join("chronicle/archivist_timeline.json"));
    let entry = &timeline["repositories"][0];
    assert_eq!(entry["new_commit"], true);
    assert_eq!(entry["added_files"], serde_json::json!(["new.py"]));
    assert_eq!(entry["removed_files"], serde_json::json!(["old.py"]));
}

#[test]
fn unchanged_commit_reports_no_change() {
    let temp = TempDir::new().unwrap();
    let workspace = setup_workspace(&temp);

    write_records(&workspace, "cccc777788889999", &["engine.py"]);
    cxw(&temp, &workspace).arg("assimilate").assert().success();
    cxw(&temp, &workspace).arg("assimilate").assert().success();

    let timeline = read_json(&workspace.join("chronicle/archivist_timeline.json"));
    assert_eq!(timeline["repositories"][0]["new_commit"], false);

    let kernel = fs::read_to_string(workspace.join("chronicle/codex_kernel.md")).unwrap();
    assert!(kernel.contains("no change"));
}

#[test]
fn curious_lineage_section_survives_regeneration() {
    let temp = TempDir::new().unwrap();
    let workspace = setup_workspace(&temp);
    write_records(&workspace, "abcdef0123456789", &["README.md"]);

    cxw(&temp, &workspace).arg("assimilate").assert().success();

    // A hand-maintained section appended after the first pass.
    let kernel_path = workspace.join("chronicle/codex_kernel.md");
    let mut kernel = fs::read_to_string(&kernel_path).unwrap();
    kernel.push_str("\n## Curious Agent Lineage\n- hand-written observation\n");
    fs::write(&kernel_path, kernel).unwrap();

    cxw(&temp, &workspace).arg("assimilate").assert().success();

    let regenerated = fs::read_to_string(&kernel_path).unwrap();
    assert!(regenerated.contains("- hand-written observation"));
    assert!(regenerated.contains("## tyme-core"));
}

#[test]
fn missing_records_artifact_degrades_with_warning() {
    let temp = TempDir::new().unwrap();
    let workspace = setup_workspace(&temp);

    cxw(&temp, &workspace)
        .arg("assimilate")
        .assert()
        .success()
        .stderr(predicate::str::contains("not found"));

    let kernel = fs::read_to_string(workspace.join("chronicle/codex_kernel.md")).unwrap();
    assert!(kernel.contains("No repositories discovered."));
}

#[test]
fn malformed_records_artifact_is_fatal() {
    let temp = TempDir::new().unwrap();
    let workspace = setup_workspace(&temp);
    fs::write(workspace.join("chronicle/repo_records.json"), "{ broken").unwrap();

    cxw(&temp, &workspace)
        .arg("assimilate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn malformed_timeline_warns_and_continues() {
    let temp = TempDir::new().unwrap();
    let workspace = setup_workspace(&temp);
    write_records(&workspace, "abcdef0123456789", &["README.md"]);
    fs::write(
        workspace.join("chronicle/archivist_timeline.json"),
        "garbage",
    )
    .unwrap();

    cxw(&temp, &workspace)
        .arg("assimilate")
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be parsed"));

    let timeline = read_json(&workspace.join("chronicle/archivist_timeline.json"));
    assert_eq!(timeline["repositories"][0]["new_commit"], true);
}

#[test]
fn explicit_records_path_and_limit() {
    let temp = TempDir::new().unwrap();
    let workspace = setup_workspace(&temp);
    write_records(&workspace, "abcdef0123456789", &["README.md"]);
    let custom = workspace.join("fetched.json");
    fs::rename(workspace.join("chronicle/repo_records.json"), &custom).unwrap();

    cxw(&temp, &workspace)
        .args(["assimilate", "--records"])
        .arg(&custom)
        .args(["--limit", "2"])
        .assert()
        .success();

    let timeline = read_json(&workspace.join("chronicle/archivist_timeline.json"));
    assert_eq!(timeline["repositories"][0]["name"], "tyme-core");
}
