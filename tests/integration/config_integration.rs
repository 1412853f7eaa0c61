//! Integration tests for layered configuration

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use treestore::cli::{Commands, RunContext};
use treestore::config::ConfigLoader;

#[test]
fn test_workspace_config_drives_queries() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path();
    fs::create_dir_all(workspace.join("config")).unwrap();
    fs::create_dir_all(workspace.join("data")).unwrap();
    fs::write(
        workspace.join("data").join("records.json"),
        r#"[{"id": 1, "parent": "root"}, {"id": 2, "parent": 1}]"#,
    )
    .unwrap();
    fs::write(
        workspace.join("config").join("config.toml"),
        r#"
dataset = "data/records.json"

[output]
format = "json"
pretty = false
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_layers(workspace, None).unwrap();
    assert_eq!(config.dataset, Some(PathBuf::from("data/records.json")));

    let ctx = RunContext::with_config(workspace.to_path_buf(), config);
    let out = ctx.execute(&Commands::Children { parent_id: 1 }).unwrap();
    assert_eq!(out, r#"[{"id":2,"parent":1}]"#);
}

#[test]
fn test_explicit_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(
        &config_file,
        r#"
[output]
root_label = "(none)"

[logging]
enabled = false
format = "json"
"#,
    )
    .unwrap();

    let ctx = RunContext::new(temp_dir.path().to_path_buf(), Some(config_file)).unwrap();
    assert_eq!(ctx.config().output.root_label, "(none)");
    assert!(!ctx.config().logging.enabled);

    let rendered = ctx.execute(&Commands::Config).unwrap();
    assert!(rendered.contains("root_label = \"(none)\""));
}

#[test]
fn test_missing_explicit_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = RunContext::new(
        temp_dir.path().to_path_buf(),
        Some(temp_dir.path().join("absent.toml")),
    );
    assert!(result.is_err());
}
