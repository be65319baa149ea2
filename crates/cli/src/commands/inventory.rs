//! Inventory commands: add, list, edit, delete.
//!
//! Each command opens the file-backed store under the resolved data
//! directory, performs one synchronous operation, and prints the result.

#![allow(clippy::print_stdout)]

use std::path::Path;

use thiserror::Error;

use stockroom::forms::{AddItemForm, EditItemForm, FormError};
use stockroom::view::{self, CategoryFilter, SortColumn, SortDirection, TablePage, TableQuery};
use stockroom::{FileStorage, ItemStore, StoreError};
use stockroom_core::ItemId;

/// Shown when the inventory has no items at all.
const EMPTY_INVENTORY: &str = "No items in inventory. Add some items to get started!";

/// Shown when filters match nothing (or the page is past the end).
const NO_MATCHES: &str = "No items found.";

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Item store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Form validation failed.
    #[error("{0}")]
    Form(#[from] FormError),

    /// No item with the given identifier.
    #[error("no item with id {0}")]
    UnknownItem(String),

    /// Unrecognized sort column.
    #[error("invalid sort column: {0} (expected name, category, quantity, unit-price or last-updated)")]
    InvalidSort(String),

    /// Unrecognized sort direction.
    #[error("invalid sort direction: {0} (expected asc or desc)")]
    InvalidDirection(String),

    /// Unrecognized category filter.
    #[error("invalid category: {0} (expected all, electronics, clothing, food or other)")]
    InvalidCategory(String),
}

fn open_store(data_dir: &Path) -> Result<ItemStore<FileStorage>, CliError> {
    Ok(ItemStore::open(FileStorage::new(data_dir))?)
}

/// Validate and add a new item.
///
/// # Errors
///
/// Returns an error if validation fails or the store cannot persist.
pub fn add(
    data_dir: &Path,
    name: &str,
    category: &str,
    quantity: &str,
    unit_price: &str,
) -> Result<(), CliError> {
    let mut store = open_store(data_dir)?;
    let form = AddItemForm {
        name: name.to_string(),
        category: category.to_string(),
        quantity: quantity.to_string(),
        unit_price: unit_price.to_string(),
    };
    let candidate = form.validate(store.items())?;
    let added = store.add(candidate)?;
    println!("{} has been added to the inventory (id {}).", added.name, added.id);
    Ok(())
}

/// Render the filtered/sorted/paginated table.
///
/// # Errors
///
/// Returns an error for unrecognized filter/sort arguments or if the
/// store cannot be read.
pub fn list(
    data_dir: &Path,
    search: &str,
    category: &str,
    sort: &str,
    direction: &str,
    page: usize,
) -> Result<(), CliError> {
    let store = open_store(data_dir)?;
    if store.is_empty() {
        println!("{EMPTY_INVENTORY}");
        return Ok(());
    }

    let query = TableQuery::new()
        .search(search)
        .category(parse_category_filter(category)?)
        .sort(parse_sort_column(sort)?, parse_direction(direction)?)
        .page(page);

    let projection = view::project(store.items(), &query);
    println!("{}", render_page(&projection));
    Ok(())
}

/// Update an existing item. Omitted fields keep their current values,
/// mirroring a prefilled edit form.
///
/// # Errors
///
/// Returns an error if the id is unknown, validation fails, or the store
/// cannot persist.
pub fn edit(
    data_dir: &Path,
    id: &str,
    name: Option<&str>,
    category: Option<&str>,
    quantity: Option<&str>,
    unit_price: Option<&str>,
) -> Result<(), CliError> {
    let mut store = open_store(data_dir)?;
    let item_id = ItemId::from(id);
    let original = store
        .get(&item_id)
        .ok_or_else(|| CliError::UnknownItem(id.to_string()))?
        .clone();

    let mut form = EditItemForm::prefill(&original);
    if let Some(name) = name {
        form.name = name.to_string();
    }
    if let Some(category) = category {
        form.category = category.to_string();
    }
    if let Some(quantity) = quantity {
        form.quantity = quantity.to_string();
    }
    if let Some(unit_price) = unit_price {
        form.unit_price = unit_price.to_string();
    }

    let patch = form.validate(&original, store.items())?;
    let updated = store.update(patch)?;
    println!("{} has been updated.", updated.name);
    Ok(())
}

/// Remove an item. An unknown id is reported but is not an error.
///
/// # Errors
///
/// Returns an error if the store cannot be read or persisted.
pub fn delete(data_dir: &Path, id: &str) -> Result<(), CliError> {
    let mut store = open_store(data_dir)?;
    if store.delete(&ItemId::from(id))? {
        println!("The item has been removed from the inventory.");
    } else {
        println!("No item with id {id}; nothing to delete.");
    }
    Ok(())
}

fn parse_category_filter(s: &str) -> Result<CategoryFilter, CliError> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(CategoryFilter::All);
    }
    s.parse()
        .map(CategoryFilter::Only)
        .map_err(|_| CliError::InvalidCategory(s.to_string()))
}

fn parse_sort_column(s: &str) -> Result<SortColumn, CliError> {
    match s.to_ascii_lowercase().as_str() {
        "name" => Ok(SortColumn::Name),
        "category" => Ok(SortColumn::Category),
        "quantity" => Ok(SortColumn::Quantity),
        "unit-price" | "unit_price" => Ok(SortColumn::UnitPrice),
        "last-updated" | "last_updated" => Ok(SortColumn::LastUpdated),
        _ => Err(CliError::InvalidSort(s.to_string())),
    }
}

fn parse_direction(s: &str) -> Result<SortDirection, CliError> {
    match s.to_ascii_lowercase().as_str() {
        "asc" | "ascending" => Ok(SortDirection::Ascending),
        "desc" | "descending" => Ok(SortDirection::Descending),
        _ => Err(CliError::InvalidDirection(s.to_string())),
    }
}

/// Render one table page as plain text, with a low-stock marker on the
/// quantity column and a "showing X to Y of Z" footer.
fn render_page(page: &TablePage) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:<12} {:>12} {:>10}  {:<19}  {}",
        "NAME", "CATEGORY", "QUANTITY", "UNIT PRICE", "LAST UPDATED", "ID"
    );

    if page.rows.is_empty() {
        let _ = writeln!(out, "{NO_MATCHES}");
    }
    for item in &page.rows {
        let quantity = if item.is_low_stock() {
            format!("{} [LOW]", item.quantity)
        } else {
            item.quantity.to_string()
        };
        let updated = item.last_updated.format("%Y-%m-%d %H:%M:%S").to_string();
        let price = format!("{:.2}", item.unit_price);
        let _ = writeln!(
            out,
            "{:<24} {:<12} {:>12} {:>10}  {:<19}  {}",
            item.name,
            item.category.as_str(),
            quantity,
            price,
            updated,
            item.id
        );
    }

    match page.display_range() {
        Some((start, end)) => {
            let _ = write!(
                out,
                "Showing {start} to {end} of {} items (page {} of {})",
                page.total,
                page.page,
                page.total_pages()
            );
        }
        None => {
            let _ = write!(
                out,
                "Showing 0 of {} items (page {} of {})",
                page.total,
                page.page,
                page.total_pages()
            );
        }
    }
    out
}
