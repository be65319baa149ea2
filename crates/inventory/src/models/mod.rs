//! Domain models for the inventory.

pub mod item;

pub use item::{Item, ItemPatch, NewItem};
