//! Queries against the reference dataset

use super::test_utils::{ids, reference_fixture, reference_records};
use treestore::store::loader::load_records;
use treestore::{StoreError, TreeStore};

#[test]
fn test_get_all_preserves_input() {
    let records = reference_records();
    let store = TreeStore::new(&records);
    assert_eq!(store.get_all(), records.as_slice());
}

#[test]
fn test_get_item_every_id() {
    let records = reference_records();
    let store = TreeStore::new(&records);
    for record in &records {
        assert_eq!(store.get_item(record.id), Some(record));
    }
    assert!(store.get_item(9).is_none());
}

#[test]
fn test_get_children_of_two() {
    let records = reference_records();
    let store = TreeStore::new(&records);
    assert_eq!(ids(&store.get_children(2)), vec![4, 5, 6]);
    assert_eq!(ids(&store.get_children(1)), vec![2, 3]);
    assert_eq!(ids(&store.get_children(4)), vec![7, 8]);
    assert!(store.get_children(8).is_empty());
}

#[test]
fn test_get_all_parents_of_eight() {
    let records = reference_records();
    let store = TreeStore::new(&records);
    assert_eq!(ids(&store.get_all_parents(8).unwrap()), vec![4, 2, 1]);
    assert_eq!(ids(&store.get_all_parents(7).unwrap()), vec![4, 2, 1]);
    assert_eq!(ids(&store.get_all_parents(3).unwrap()), vec![1]);
    assert!(store.get_all_parents(1).unwrap().is_empty());
}

#[test]
fn test_get_all_parents_unknown_child() {
    let records = reference_records();
    let store = TreeStore::new(&records);
    assert_eq!(
        store.get_all_parents(9).unwrap_err(),
        StoreError::MissingChild(9)
    );
}

#[test]
fn test_repeated_queries_are_identical() {
    let records = reference_records();
    let store = TreeStore::new(&records);
    assert_eq!(store.get_all_parents(8).unwrap(), store.get_all_parents(8).unwrap());
    assert_eq!(store.get_children(2), store.get_children(2));
    assert_eq!(store.get_item(5), store.get_item(5));
}

#[test]
fn test_fixture_matches_in_memory_dataset() {
    let loaded = load_records(reference_fixture()).unwrap();
    assert_eq!(loaded, reference_records());
}
