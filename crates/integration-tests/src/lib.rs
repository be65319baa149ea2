//! Integration tests for Stockroom.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stockroom-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `inventory_flow` - The full add → view → edit → delete user flow
//! - `persistence` - Store state surviving a reopen on the same data dir
//!
//! Tests run against real file-backed storage in a temporary directory;
//! no external services are required.
