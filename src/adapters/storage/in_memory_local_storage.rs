//! In-Memory Local Storage Adapter
//!
//! Stores values in a HashMap. Useful for testing and development, and can
//! be told to reject writes to a key to exercise failure paths.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::ports::{LocalStorage, StorageError};

#[derive(Debug, Default)]
struct Inner {
    items: HashMap<String, String>,
    failing_keys: HashSet<String>,
}

/// In-memory local storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocalStorage {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key.
    pub fn with_item(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.items.insert(key.into(), value.into());
        }
        self
    }

    /// Makes every later `set_item` for `key` fail.
    pub fn fail_writes_for(self, key: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_keys.insert(key.into());
        }
        self
    }

    /// Direct read for assertions, bypassing the port.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.read().ok()?.items.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> StorageError {
    StorageError::Io("storage lock poisoned".to_string())
}

impl LocalStorage for InMemoryLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if inner.failing_keys.contains(key) {
            return Err(StorageError::WriteRejected(key.to_string()));
        }
        inner.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.items.remove(key);
        Ok(())
    }
}
