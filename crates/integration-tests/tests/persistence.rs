//! Persistence across store reopens, against real file storage.

use rust_decimal::Decimal;

use stockroom::{FileStorage, ItemStore, NewItem, StoreError};
use stockroom_core::Category;

fn new_item(name: &str, quantity: u32) -> NewItem {
    NewItem {
        name: name.to_string(),
        category: Category::Other,
        quantity,
        unit_price: Decimal::new(250, 2),
    }
}

#[test]
fn test_reopen_sees_persisted_list() {
    let dir = tempfile::tempdir().expect("tempdir");

    let added = {
        let mut store = ItemStore::open(FileStorage::new(dir.path())).expect("open");
        store.add(new_item("Crate", 3)).expect("add");
        store.add(new_item("Pallet", 40)).expect("add")
    };

    let store = ItemStore::open(FileStorage::new(dir.path())).expect("reopen");
    assert_eq!(store.len(), 2);
    let found = store.get(&added.id).expect("lookup");
    assert_eq!(found.name, "Pallet");
    assert_eq!(found.quantity, 40);
    assert_eq!(found.last_updated, added.last_updated);
}

#[test]
fn test_missing_data_file_opens_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ItemStore::open(FileStorage::new(dir.path())).expect("open");
    assert!(store.is_empty());
}

#[test]
fn test_delete_is_durable() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let mut store = ItemStore::open(FileStorage::new(dir.path())).expect("open");
        let added = store.add(new_item("Crate", 3)).expect("add");
        assert!(store.delete(&added.id).expect("delete"));
    }

    let store = ItemStore::open(FileStorage::new(dir.path())).expect("reopen");
    assert!(store.is_empty());
}

#[test]
fn test_tampered_data_file_is_typed_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("inventory.json"), "{ not json").expect("write");

    let result = ItemStore::open(FileStorage::new(dir.path()));
    assert!(matches!(result, Err(StoreError::Storage(_))));
}

#[test]
fn test_persisted_shape_matches_interchange_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ItemStore::open(FileStorage::new(dir.path())).expect("open");
    store.add(new_item("Crate", 3)).expect("add");

    let raw = std::fs::read_to_string(dir.path().join("inventory.json")).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let entry = value
        .as_array()
        .and_then(|items| items.first())
        .expect("one entry");
    assert_eq!(entry["name"], "Crate");
    assert_eq!(entry["category"], "Other");
    assert_eq!(entry["quantity"], 3);
    assert_eq!(entry["unitPrice"], 2.5);
    assert!(entry["lastUpdated"].is_string());
    assert!(entry["id"].is_string());
}
