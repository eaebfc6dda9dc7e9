/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{DataDirBuilder, PerspectiveBuilder, file_names, index_path, read_index_json};
use predicates::prelude::*;
use serde_json::json;

fn cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_data-list-indexer"));
    cmd.env_remove("DATA_LIST_DIR");
    cmd
}

#[test]
fn test_cli_names_command() {
    let data_dir = DataDirBuilder::new().with_file("only.json", "{}").build();

    cmd()
        .arg("names")
        .arg("--dir")
        .arg(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 records"));

    assert_eq!(read_index_json(data_dir.path()), json!([{"id":"only","name":"only"}]));
}

#[test]
fn test_cli_names_uses_current_dir_by_default() {
    let data_dir = DataDirBuilder::new().with_file("here.json", "{}").build();

    cmd().current_dir(data_dir.path()).arg("names").assert().success();

    assert_eq!(read_index_json(data_dir.path()), json!([{"id":"here","name":"here"}]));
}

#[test]
fn test_cli_dir_from_environment() {
    let data_dir = DataDirBuilder::new().with_file("env.json", "{}").build();

    cmd().env("DATA_LIST_DIR", data_dir.path()).arg("names").assert().success();

    assert!(index_path(data_dir.path()).exists());
}

#[test]
fn test_cli_custom_output_name() {
    let data_dir = DataDirBuilder::new().with_file("a.json", "{}").build();

    cmd()
        .args(["names", "--output", "index.json", "--dir"])
        .arg(data_dir.path())
        .assert()
        .success();

    assert_eq!(file_names(data_dir.path()), vec!["a.json", "index.json"]);
}

#[test]
fn test_cli_rejects_output_outside_data_dir() {
    let data_dir = DataDirBuilder::new().with_file("a.json", "{}").build();

    cmd()
        .args(["names", "--output", "../dataList.json", "--dir"])
        .arg(data_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("plain file name"));
}

#[test]
fn test_cli_perspectives_command() {
    let data_dir = DataDirBuilder::new()
        .with_file("a.json", r#"{"perspectiveId":"p1","name":"Beta"}"#)
        .with_file("b.json", r#"{"perspectiveId":"p2","name":"Alpha"}"#)
        .build();

    cmd()
        .arg("perspectives")
        .arg("--dir")
        .arg(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 records"))
        .stderr(predicate::str::contains("2 renamed"));

    assert_eq!(file_names(data_dir.path()), vec!["dataList.json", "p1.json", "p2.json"]);
    assert_eq!(
        read_index_json(data_dir.path()),
        json!([{"id":"p2","name":"Alpha"},{"id":"p1","name":"Beta"}])
    );
}

#[test]
fn test_cli_perspectives_dry_run() {
    let data_dir = DataDirBuilder::new()
        .with_perspective("a.json", PerspectiveBuilder::new("p1", "Beta"))
        .build();

    cmd()
        .args(["perspectives", "--dry-run", "--dir"])
        .arg(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("rename a.json -> p1.json"))
        .stdout(predicate::str::contains("\"id\": \"p1\""));

    assert_eq!(file_names(data_dir.path()), vec!["a.json"]);
}

#[test]
fn test_cli_perspectives_aborts_on_bad_file() {
    let data_dir = DataDirBuilder::new()
        .with_perspective("a.json", PerspectiveBuilder::new("p1", "Beta"))
        .with_file("bad.json", r#"{"perspectiveId":"p2"}"#)
        .build();

    cmd()
        .arg("perspectives")
        .arg("--dir")
        .arg(data_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field `name`"));

    assert_eq!(file_names(data_dir.path()), vec!["a.json", "bad.json"]);
}

#[test]
fn test_cli_perspectives_skip_bad_file() {
    let data_dir = DataDirBuilder::new()
        .with_perspective("a.json", PerspectiveBuilder::new("p1", "Beta"))
        .with_perspective("b.json", PerspectiveBuilder::new("p2", "Alpha"))
        .with_file("bad.json", "oops")
        .build();

    cmd()
        .args(["perspectives", "--on-error", "skip", "--dir"])
        .arg(data_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Skipping bad.json"));

    assert_eq!(
        file_names(data_dir.path()),
        vec!["bad.json", "dataList.json", "p1.json", "p2.json"]
    );
}

#[test]
fn test_cli_check_clean_index() {
    let data_dir = DataDirBuilder::new()
        .with_perspective("a.json", PerspectiveBuilder::new("p1", "Beta"))
        .build();

    cmd().arg("perspectives").arg("--dir").arg(data_dir.path()).assert().success();

    cmd()
        .arg("check")
        .arg("--dir")
        .arg(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total records: 1"))
        .stdout(predicate::str::contains("Index is consistent"));
}

#[test]
fn test_cli_check_reports_problems() {
    let data_dir = DataDirBuilder::new()
        .with_file("dataList.json", r#"[{"id":"gone","name":"Gone"}]"#)
        .build();

    cmd()
        .arg("check")
        .arg("--dir")
        .arg(data_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Missing file: gone.json"));
}

#[test]
fn test_cli_no_command_shows_help_message() {
    cmd().assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dataList.json"))
        .stdout(predicate::str::contains("names"))
        .stdout(predicate::str::contains("perspectives"));
}

#[test]
fn test_cli_version_flag() {
    cmd().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    cmd().arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_missing_directory() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    cmd()
        .arg("names")
        .arg("--dir")
        .arg(temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read data directory"));
}
