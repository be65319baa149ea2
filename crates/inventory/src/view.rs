//! The table view pipeline: filter → search → sort → paginate.
//!
//! [`project`] derives a display projection from a snapshot of the
//! canonical list. It never mutates the list; it clones the rows that
//! survive filtering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use stockroom_core::Category;

use crate::models::Item;

/// Fixed number of rows per page.
pub const PAGE_SIZE: usize = 10;

/// Column the table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    #[default]
    Name,
    Category,
    Quantity,
    UnitPrice,
    LastUpdated,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Category filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn matches(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == category,
        }
    }
}

/// Current search/filter/sort/page state of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    /// Free-text search term, matched case-insensitively against names.
    /// Empty matches everything.
    pub search: String,
    /// Category filter.
    pub category: CategoryFilter,
    /// Sort column.
    pub sort_column: SortColumn,
    /// Sort direction.
    pub direction: SortDirection,
    /// 1-based page number. Not clamped: a page past the end yields an
    /// empty window with the true totals.
    pub page: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            sort_column: SortColumn::default(),
            direction: SortDirection::default(),
            page: 1,
        }
    }
}

impl TableQuery {
    /// Default query: no filters, sorted by name ascending, page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    #[must_use]
    pub fn search(mut self, term: &str) -> Self {
        self.search = term.to_string();
        self
    }

    /// Set the category filter.
    #[must_use]
    pub const fn category(mut self, filter: CategoryFilter) -> Self {
        self.category = filter;
        self
    }

    /// Set the sort column and direction.
    #[must_use]
    pub const fn sort(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.sort_column = column;
        self.direction = direction;
        self
    }

    /// Set the 1-based page number.
    #[must_use]
    pub const fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// One page of the projected table.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    /// Rows in this page's window, in sorted order.
    pub rows: Vec<Item>,
    /// Total number of items after filtering (all pages).
    pub total: usize,
    /// The 1-based page number this window was cut for.
    pub page: usize,
}

impl TablePage {
    /// Number of pages needed for the filtered set.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total.div_ceil(PAGE_SIZE)
    }

    /// 1-based display range for "showing X to Y of Z", or `None` when the
    /// window is empty.
    #[must_use]
    pub fn display_range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let start = self.page.saturating_sub(1).saturating_mul(PAGE_SIZE) + 1;
        Some((start, start + self.rows.len() - 1))
    }
}

/// Derive the filtered, sorted, paginated projection of `items`.
///
/// Steps, in order: category filter, case-insensitive substring search on
/// the name, three-way sort on the chosen column (negated when
/// descending, no secondary key), then a window of [`PAGE_SIZE`] rows at
/// `(page - 1) * PAGE_SIZE`.
#[must_use]
pub fn project(items: &[Item], query: &TableQuery) -> TablePage {
    let needle = query.search.to_lowercase();
    let mut rows: Vec<Item> = items
        .iter()
        .filter(|item| query.category.matches(item))
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let ord = compare(a, b, query.sort_column);
        match query.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    let total = rows.len();
    let start = query.page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    let rows = rows.into_iter().skip(start).take(PAGE_SIZE).collect();

    TablePage {
        rows,
        total,
        page: query.page,
    }
}

fn compare(a: &Item, b: &Item, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Category => a.category.as_str().cmp(b.category.as_str()),
        SortColumn::Quantity => a.quantity.cmp(&b.quantity),
        SortColumn::UnitPrice => a.unit_price.cmp(&b.unit_price),
        SortColumn::LastUpdated => a.last_updated.cmp(&b.last_updated),
    }
}
