//! Integration tests for dataset loading

use std::fs;
use tempfile::TempDir;
use treestore::store::loader::{load_records, parse_records, read_records};
use treestore::{LoadError, Parent, TreeStore};

#[test]
fn test_sentinel_variants_all_mean_root() {
    let records = parse_records(
        r#"[
            {"id": 1, "parent": "root"},
            {"id": 2, "parent": "ROOT"},
            {"id": 3, "parent": null},
            {"id": 4, "parent": 3}
        ]"#,
    )
    .unwrap();
    let store = TreeStore::new(&records);
    assert_eq!(store.roots().len(), 3);
    assert_eq!(records[3].parent, Parent::Id(3));
}

#[test]
fn test_read_from_reader() {
    let input = br#"[{"id": 10, "parent": "root", "meta": {"depth": 0}}]"#;
    let records = read_records(&input[..]).unwrap();
    assert_eq!(records[0].fields["meta"]["depth"], 0);
}

#[test]
fn test_extra_fields_survive_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("records.json");
    fs::write(
        &path,
        r#"[{"id": 1, "parent": "root", "z": 1, "a": [true, null], "m": {"k": "v"}}]"#,
    )
    .unwrap();

    let records = load_records(&path).unwrap();
    let rendered = serde_json::to_string(&records).unwrap();
    assert_eq!(
        rendered,
        r#"[{"id":1,"parent":"root","z":1,"a":[true,null],"m":{"k":"v"}}]"#
    );
}

#[test]
fn test_bad_record_reports_index() {
    let err = parse_records(r#"[{"id": 1, "parent": "root"}, {"id": "x", "parent": 1}]"#)
        .unwrap_err();
    assert!(matches!(err, LoadError::InvalidRecord { index: 1, .. }));
    assert!(err.to_string().contains("index 1"));
}

#[test]
fn test_top_level_must_be_array() {
    let err = parse_records("42").unwrap_err();
    assert!(matches!(err, LoadError::NotAnArray("a number")));
}
