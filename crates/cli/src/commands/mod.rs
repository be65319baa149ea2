//! CLI command implementations.

pub mod inventory;

pub use inventory::CliError;
