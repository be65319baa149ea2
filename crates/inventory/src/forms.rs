//! Add and edit form controllers.
//!
//! Forms hold raw text fields the way a UI collects them and validate
//! into typed store inputs. Validation order matches the user-facing
//! flow: required fields first, then the duplicate-name rule, then field
//! parsing. Parsing is strict full-string parsing; a trailing non-numeric
//! suffix is rejected rather than silently dropped.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use stockroom_core::Category;

use crate::models::{Item, ItemPatch, NewItem};

/// Validation errors reported inline by a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// One or more fields are empty or unselected.
    #[error("all fields are required")]
    MissingFields,

    /// Another item already uses this name (case-insensitive).
    #[error("an item named \"{0}\" already exists")]
    DuplicateName(String),

    /// The category is not one of the known categories.
    #[error("unknown category \"{0}\"")]
    InvalidCategory(String),

    /// The quantity is not a non-negative integer.
    #[error("quantity must be a non-negative integer, got \"{0}\"")]
    InvalidQuantity(String),

    /// The unit price is not a non-negative number.
    #[error("unit price must be a non-negative number, got \"{0}\"")]
    InvalidUnitPrice(String),
}

/// Raw fields of the add-item form.
#[derive(Debug, Clone, Default)]
pub struct AddItemForm {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit_price: String,
}

impl AddItemForm {
    /// Validate against the current inventory and produce a candidate
    /// record for the store.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingFields`] if any field is empty,
    /// [`FormError::DuplicateName`] if the name case-insensitively matches
    /// an existing item, or a parse error for the category, quantity or
    /// unit price.
    pub fn validate(&self, existing: &[Item]) -> Result<NewItem, FormError> {
        require_all(&[&self.name, &self.category, &self.quantity, &self.unit_price])?;

        if name_taken(&self.name, existing) {
            return Err(FormError::DuplicateName(self.name.clone()));
        }

        let (category, quantity, unit_price) =
            parse_fields(&self.category, &self.quantity, &self.unit_price)?;
        Ok(NewItem {
            name: self.name.clone(),
            category,
            quantity,
            unit_price,
        })
    }
}

/// Raw fields of the edit-item form.
///
/// Prefill from the item under edit with [`EditItemForm::prefill`], then
/// overwrite whichever fields the user changed.
#[derive(Debug, Clone, Default)]
pub struct EditItemForm {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit_price: String,
}

impl EditItemForm {
    /// Form populated with an item's current field values.
    #[must_use]
    pub fn prefill(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.to_string(),
            quantity: item.quantity.to_string(),
            unit_price: item.unit_price.to_string(),
        }
    }

    /// Validate against the current inventory and produce a replacement
    /// record for the store, preserving `original`'s identifier.
    ///
    /// The duplicate-name check is skipped when the name equals the
    /// edited item's own current name (case-insensitively); keeping your
    /// own name is always allowed.
    ///
    /// # Errors
    ///
    /// Same as [`AddItemForm::validate`].
    pub fn validate(&self, original: &Item, existing: &[Item]) -> Result<ItemPatch, FormError> {
        require_all(&[&self.name, &self.category, &self.quantity, &self.unit_price])?;

        let keeps_own_name = self.name.to_lowercase() == original.name.to_lowercase();
        if !keeps_own_name && name_taken(&self.name, existing) {
            return Err(FormError::DuplicateName(self.name.clone()));
        }

        let (category, quantity, unit_price) =
            parse_fields(&self.category, &self.quantity, &self.unit_price)?;
        Ok(ItemPatch {
            id: original.id.clone(),
            name: self.name.clone(),
            category,
            quantity,
            unit_price,
        })
    }
}

fn require_all(fields: &[&str]) -> Result<(), FormError> {
    if fields.iter().any(|f| f.is_empty()) {
        return Err(FormError::MissingFields);
    }
    Ok(())
}

fn name_taken(name: &str, existing: &[Item]) -> bool {
    let lowered = name.to_lowercase();
    existing.iter().any(|item| item.name.to_lowercase() == lowered)
}

fn parse_fields(
    category: &str,
    quantity: &str,
    unit_price: &str,
) -> Result<(Category, u32, Decimal), FormError> {
    let category = Category::from_str(category)
        .map_err(|_| FormError::InvalidCategory(category.to_string()))?;
    let quantity: u32 = quantity
        .parse()
        .map_err(|_| FormError::InvalidQuantity(quantity.to_string()))?;
    let unit_price = Decimal::from_str(unit_price)
        .map_err(|_| FormError::InvalidUnitPrice(unit_price.to_string()))?;
    if unit_price < Decimal::ZERO {
        return Err(FormError::InvalidUnitPrice(unit_price.to_string()));
    }
    Ok((category, quantity, unit_price))
}
