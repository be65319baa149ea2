//! Named-slot persistence adapter.
//!
//! The inventory persists as a single named slot holding a JSON payload.
//! [`Storage`] abstracts the key-value backend; [`FileStorage`] keeps one
//! file per slot under a root directory, [`MemoryStorage`] backs tests.
//! A missing slot reads as `None` - an empty inventory, not an error.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from reading or writing a persistence slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying read or write failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Slot payload could not be serialized or deserialized.
    #[error("malformed slot payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// A durable key-value store of named slots.
pub trait Storage {
    /// Read the raw payload of a slot.
    ///
    /// Returns `Ok(None)` when the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    fn load(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw payload of a slot, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    fn save(&mut self, slot: &str, payload: &str) -> Result<(), StorageError>;
}

/// Serialize a value into a slot as JSON.
///
/// # Errors
///
/// Returns an error if serialization or the backend write fails.
pub fn save_slot<T, S>(storage: &mut S, slot: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: Storage,
{
    let payload = serde_json::to_string(value)?;
    storage.save(slot, &payload)
}

/// Deserialize a slot's JSON payload, if the slot exists.
///
/// # Errors
///
/// Returns an error if the backend read fails or the payload is not valid
/// JSON for `T`.
pub fn load_slot<T, S>(storage: &S, slot: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: Storage,
{
    match storage.load(slot)? {
        Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
        None => Ok(None),
    }
}

/// File-backed storage: one `<slot>.json` file per slot under a root
/// directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `root`. The directory is created on first
    /// write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory holding the slot files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{slot}.json"))
    }
}

impl Storage for FileStorage {
    fn load(&self, slot: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, slot: &str, payload: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.slot_path(slot), payload)?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, slot: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(slot).cloned())
    }

    fn save(&mut self, slot: &str, payload: &str) -> Result<(), StorageError> {
        self.slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }
}
