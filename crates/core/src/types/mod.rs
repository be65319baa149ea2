//! Core type definitions.

pub mod category;
pub mod id;

pub use category::{Category, ParseCategoryError};
pub use id::ItemId;
