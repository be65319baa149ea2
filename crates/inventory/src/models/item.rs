//! Inventory item records and their input types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{Category, ItemId};

/// An inventory item.
///
/// Serializes with camelCase field names to match the persisted JSON
/// interchange format (`unitPrice`, `lastUpdated`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned once by the store at creation.
    pub id: ItemId,
    /// Display name, case-insensitively unique across the inventory.
    pub name: String,
    /// Item category.
    pub category: Category,
    /// Units on hand.
    pub quantity: u32,
    /// Price per unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Timestamp of creation or most recent mutation.
    pub last_updated: DateTime<Utc>,
}

impl Item {
    /// Quantity below which an item counts as low stock.
    pub const LOW_STOCK_THRESHOLD: u32 = 10;

    /// Whether the item should be highlighted as running low.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.quantity < Self::LOW_STOCK_THRESHOLD
    }
}

/// Input for creating a new item.
///
/// The store assigns the identifier and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    /// Display name.
    pub name: String,
    /// Item category.
    pub category: Category,
    /// Units on hand.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: Decimal,
}

/// Input for replacing an existing item's fields.
///
/// The identifier selects the entry to replace; the store refreshes the
/// timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPatch {
    /// Identifier of the item being edited.
    pub id: ItemId,
    /// Replacement name.
    pub name: String,
    /// Replacement category.
    pub category: Category,
    /// Replacement quantity.
    pub quantity: u32,
    /// Replacement unit price.
    pub unit_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Item {
        Item {
            id: ItemId::from("w-1"),
            name: "Widget".to_string(),
            category: Category::Electronics,
            quantity: 5,
            unit_price: Decimal::new(999, 2),
            last_updated: "2026-08-30T12:00:00Z".parse().expect("timestamp"),
        }
    }

    #[test]
    fn test_low_stock_threshold() {
        let mut item = widget();
        assert!(item.is_low_stock());
        item.quantity = 10;
        assert!(!item.is_low_stock());
    }

    #[test]
    fn test_serializes_to_interchange_format() {
        let json = serde_json::to_value(widget()).expect("serialize");
        assert_eq!(json["id"], "w-1");
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["category"], "Electronics");
        assert_eq!(json["quantity"], 5);
        assert_eq!(json["unitPrice"], 9.99);
        assert_eq!(json["lastUpdated"], "2026-08-30T12:00:00Z");
    }

    #[test]
    fn test_roundtrips_through_json() {
        let item = widget();
        let json = serde_json::to_string(&item).expect("serialize");
        let back: Item = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, item);
    }
}
