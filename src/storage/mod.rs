//! Persistence adapter: whole-state blob read/write behind a trait.

pub mod json_backend;

use std::sync::Mutex;

use crate::errors::StoreError;

pub use json_backend::JsonFileStore;

/// Abstraction over backends that persist the full application state as a
/// single serialized blob under one fixed key.
pub trait StateStore: Send + Sync {
    /// Returns the stored blob, or `None` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>, StoreError>;
    /// Replaces the stored blob wholesale.
    fn write(&self, blob: &str) -> Result<(), StoreError>;
}

/// In-memory backend for tests and session-only embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }
}

impl StateStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        let guard = self.blob.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(guard.clone())
    }

    fn write(&self, blob: &str) -> Result<(), StoreError> {
        let mut guard = self.blob.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(blob.to_string());
        Ok(())
    }
}
