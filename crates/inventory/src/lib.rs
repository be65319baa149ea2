//! Stockroom - a local inventory tracker.
//!
//! The library is a thin CRUD pipeline over a single list of items:
//! form controllers validate user input into candidate records, the
//! [`store::ItemStore`] owns the canonical list and mirrors every mutation
//! to a persistence slot, and the [`view`] module derives the filtered,
//! sorted, paginated projection a front end displays.
//!
//! # Modules
//!
//! - [`models`] - The [`models::Item`] record and its input types
//! - [`storage`] - Named-slot persistence adapter (file-backed or in-memory)
//! - [`store`] - The canonical item list and its mutation entry points
//! - [`view`] - Filter → search → sort → paginate projection
//! - [`forms`] - Add/edit form controllers and validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod forms;
pub mod models;
pub mod storage;
pub mod store;
pub mod view;

pub use models::{Item, ItemPatch, NewItem};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{ItemStore, StoreError};
pub use view::{CategoryFilter, SortColumn, SortDirection, TablePage, TableQuery};
