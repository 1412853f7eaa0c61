//! End-to-end tests for the treestore binary

use super::test_utils::{reference_fixture, run_cli, stdout_of};
use std::fs;
use tempfile::TempDir;

fn fixture_arg() -> String {
    reference_fixture().to_string_lossy().into_owned()
}

#[test]
fn test_cli_parents_json() {
    let temp_dir = TempDir::new().unwrap();
    let data = fixture_arg();
    let output = run_cli(
        temp_dir.path(),
        &["--data", &data, "--format", "json", "parents", "8"],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let parsed: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let ids: Vec<i64> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 2, 1]);
}

#[test]
fn test_cli_children_text_table() {
    let temp_dir = TempDir::new().unwrap();
    let data = fixture_arg();
    let output = run_cli(temp_dir.path(), &["--data", &data, "children", "2"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    for id in ["4", "5", "6"] {
        assert!(stdout.contains(id), "missing child {} in:\n{}", id, stdout);
    }
    assert!(stdout.contains("Fields"));
}

#[test]
fn test_cli_item_not_found_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let data = fixture_arg();
    let output = run_cli(temp_dir.path(), &["--data", &data, "item", "9"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Item 9 not found");

    let output = run_cli(
        temp_dir.path(),
        &["--data", &data, "--format", "json", "item", "9"],
    );
    assert_eq!(stdout_of(&output), "null");
}

#[test]
fn test_cli_missing_child_fails() {
    let temp_dir = TempDir::new().unwrap();
    let data = fixture_arg();
    let output = run_cli(temp_dir.path(), &["--data", &data, "parents", "9"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Record 9 not found"));
}

#[test]
fn test_cli_without_dataset_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(temp_dir.path(), &["all"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No dataset configured"));
}

#[test]
fn test_cli_env_override_output_format() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("records.json"),
        r#"[{"id": 1, "parent": "root"}]"#,
    )
    .unwrap();

    let bin = env!("CARGO_BIN_EXE_treestore");
    let output = std::process::Command::new(bin)
        .current_dir(temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path().join(".xdg-config"))
        .env("TREESTORE__OUTPUT__FORMAT", "json")
        .env("TREESTORE__OUTPUT__PRETTY", "false")
        .env("TREESTORE__DATASET", "records.json")
        .arg("--workspace")
        .arg(temp_dir.path())
        .arg("all")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_of(&output), r#"[{"id":1,"parent":"root"}]"#);
}

#[test]
fn test_cli_verbose_logs_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let data = fixture_arg();
    let log_file = temp_dir.path().join("logs").join("treestore.log");
    let log_arg = log_file.to_string_lossy().into_owned();
    let output = run_cli(
        temp_dir.path(),
        &[
            "--data",
            &data,
            "--verbose",
            "--log-output",
            "file",
            "--log-file",
            &log_arg,
            "stats",
        ],
    );
    assert!(output.status.success());

    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("Treestore CLI starting"));
}

#[test]
fn test_cli_bad_log_level_fails() {
    let temp_dir = TempDir::new().unwrap();
    let data = fixture_arg();
    let output = run_cli(
        temp_dir.path(),
        &["--data", &data, "--verbose", "--log-level", "loud", "all"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid log level: loud"));
}

#[test]
fn test_cli_invalid_workspace_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("config")).unwrap();
    fs::write(
        temp_dir.path().join("config").join("config.toml"),
        "[output]\nroot_label = \"\"\n",
    )
    .unwrap();
    let data = fixture_arg();
    let output = run_cli(temp_dir.path(), &["--data", &data, "all"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Root label cannot be empty"));
}

#[test]
fn test_cli_verbose_reports_unloadable_config() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.toml");
    let missing_arg = missing.to_string_lossy().into_owned();
    let output = run_cli(temp_dir.path(), &["--config", &missing_arg, "--verbose", "all"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Failed to load configuration for logging"));
}
