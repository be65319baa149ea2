//! Stockroom Core - Shared types library.
//!
//! This crate provides common types used across all Stockroom components:
//! - `inventory` - The domain library (store, view pipeline, forms)
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Item identifiers and the category enumeration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
