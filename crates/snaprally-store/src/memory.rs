//! In-memory store backend.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] backed by a shared in-process map.
///
/// Nothing survives a process exit, which is exactly what tests and
/// demos want. Cloning is cheap and every clone sees the same data —
/// hand one store to the session store, the reaction cache, and the
/// owner-event list and they share a "device", the way the real client
/// shares one platform store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored. Test convenience.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Returns `true` if no keys are stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================
