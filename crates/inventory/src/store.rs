//! The canonical item list and its mutation entry points.
//!
//! [`ItemStore`] exclusively owns the in-memory list. Every mutation
//! rewrites the full list to the persistence slot synchronously, so the
//! slot always mirrors memory. There is no partial update and no
//! transaction; the store is single-threaded by construction.

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, instrument};

use stockroom_core::ItemId;

use crate::models::{Item, ItemPatch, NewItem};
use crate::storage::{self, Storage, StorageError};

/// Name of the persistence slot holding the item list.
pub const INVENTORY_SLOT: &str = "inventory";

/// Errors from item store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the persistence slot failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// No item with the given identifier.
    #[error("no item with id {0}")]
    NotFound(ItemId),
}

/// Owner of the canonical item list.
///
/// Construct with [`ItemStore::open`], which loads the persisted list (or
/// starts empty). All mutations go through [`add`](Self::add),
/// [`update`](Self::update) and [`delete`](Self::delete); consumers only
/// ever read a snapshot via [`items`](Self::items).
///
/// The store does not re-validate name uniqueness - that is the form
/// controllers' contract (see [`crate::forms`]).
#[derive(Debug)]
pub struct ItemStore<S: Storage> {
    items: Vec<Item>,
    storage: S,
}

impl<S: Storage> ItemStore<S> {
    /// Open the store, loading the persisted list if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read or parsed.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let items: Vec<Item> = storage::load_slot(&storage, INVENTORY_SLOT)?.unwrap_or_default();
        debug!(count = items.len(), "loaded inventory");
        Ok(Self { items, storage })
    }

    /// Add a new item, assigning a fresh identifier and timestamp.
    ///
    /// Returns the created record.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated list fails.
    #[instrument(skip(self, candidate), fields(name = %candidate.name))]
    pub fn add(&mut self, candidate: NewItem) -> Result<Item, StoreError> {
        let item = Item {
            id: ItemId::generate(),
            name: candidate.name,
            category: candidate.category,
            quantity: candidate.quantity,
            unit_price: candidate.unit_price,
            last_updated: Utc::now(),
        };
        self.items.push(item.clone());
        self.persist()?;
        debug!(id = %item.id, "item added");
        Ok(item)
    }

    /// Replace the fields of an existing item, refreshing its timestamp.
    ///
    /// List order is preserved and all other entries are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no item has the patch's id, or a
    /// storage error if persisting fails.
    #[instrument(skip(self, patch), fields(id = %patch.id))]
    pub fn update(&mut self, patch: ItemPatch) -> Result<Item, StoreError> {
        let updated = Item {
            id: patch.id,
            name: patch.name,
            category: patch.category,
            quantity: patch.quantity,
            unit_price: patch.unit_price,
            last_updated: Utc::now(),
        };
        let entry = self
            .items
            .iter_mut()
            .find(|item| item.id == updated.id)
            .ok_or_else(|| StoreError::NotFound(updated.id.clone()))?;
        *entry = updated.clone();
        self.persist()?;
        debug!(id = %updated.id, "item updated");
        Ok(updated)
    }

    /// Remove the item with the given identifier.
    ///
    /// Returns `true` if an item was removed. An absent id is a silent
    /// no-op returning `false`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated list fails.
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &ItemId) -> Result<bool, StoreError> {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        let removed = self.items.len() < before;
        self.persist()?;
        if removed {
            debug!(%id, "item deleted");
        }
        Ok(removed)
    }

    /// Snapshot of the canonical list, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by identifier.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Number of items in the inventory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        storage::save_slot(&mut self.storage, INVENTORY_SLOT, &self.items)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use stockroom_core::Category;

    use super::*;
    use crate::storage::MemoryStorage;

    fn new_item(name: &str, quantity: u32) -> NewItem {
        NewItem {
            name: name.to_string(),
            category: Category::Electronics,
            quantity,
            unit_price: Decimal::new(999, 2),
        }
    }

    fn open_empty() -> ItemStore<MemoryStorage> {
        ItemStore::open(MemoryStorage::new()).expect("open")
    }

    #[test]
    fn test_add_assigns_id_and_timestamp() {
        let mut store = open_empty();
        let added = store.add(new_item("Widget", 5)).expect("add");

        assert!(!added.id.as_str().is_empty());
        let found = store.get(&added.id).expect("lookup");
        assert_eq!(found.name, "Widget");
        assert_eq!(found.quantity, 5);
        assert_eq!(found.unit_price, Decimal::new(999, 2));
        assert_eq!(found.last_updated, added.last_updated);
    }

    #[test]
    fn test_update_preserves_id_and_bumps_timestamp() {
        let mut store = open_empty();
        let added = store.add(new_item("Widget", 5)).expect("add");
        let other = store.add(new_item("Gadget", 7)).expect("add");

        let updated = store
            .update(ItemPatch {
                id: added.id.clone(),
                name: "Widget".to_string(),
                category: Category::Electronics,
                quantity: 20,
                unit_price: added.unit_price,
            })
            .expect("update");

        assert_eq!(updated.id, added.id);
        assert_eq!(updated.quantity, 20);
        assert!(updated.last_updated >= added.last_updated);
        // other entries untouched, order preserved
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.items().first().map(|i| i.id.clone()), Some(added.id));
        assert_eq!(store.get(&other.id).map(|i| i.quantity), Some(7));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut store = open_empty();
        let result = store.update(ItemPatch {
            id: ItemId::from("missing"),
            name: "Ghost".to_string(),
            category: Category::Other,
            quantity: 1,
            unit_price: Decimal::ONE,
        });
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delete_present_and_absent() {
        let mut store = open_empty();
        let added = store.add(new_item("Widget", 5)).expect("add");
        store.add(new_item("Gadget", 7)).expect("add");

        assert!(store.delete(&added.id).expect("delete"));
        assert_eq!(store.len(), 1);

        assert!(!store.delete(&ItemId::from("missing")).expect("delete"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_mutations_are_mirrored_to_storage() {
        let mut store = open_empty();
        let added = store.add(new_item("Widget", 5)).expect("add");

        // Reopen from the same backing storage and see the same list.
        let reopened = ItemStore::open(store.storage.clone()).expect("reopen");
        assert_eq!(reopened.items(), store.items());
        assert!(reopened.get(&added.id).is_some());
    }

    #[test]
    fn test_open_with_malformed_slot_is_error() {
        let mut storage = MemoryStorage::new();
        storage.save(INVENTORY_SLOT, "not json").expect("seed");
        assert!(matches!(
            ItemStore::open(storage),
            Err(StoreError::Storage(_))
        ));
    }
}
