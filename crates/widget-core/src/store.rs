//! Document Store
//!
//! Key-value persistence seam. The browser build backs it with localStorage;
//! tests use [`MemoryStore`].

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Origin-scoped string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// A persisted widget document
pub trait Document: Serialize + DeserializeOwned + Default + Clone {
    /// Re-establish invariants on a freshly parsed document.
    /// `None` means the document must be discarded.
    fn restore(self) -> Option<Self> {
        Some(self)
    }
}

/// Load the document under `key`. Absent, unreadable or malformed data yields the default.
pub fn load_document<D: Document, S: KeyValueStore + ?Sized>(store: &S, key: &str) -> D {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return D::default(),
        Err(e) => {
            log::warn!("could not read `{}`: {}", key, e);
            return D::default();
        }
    };

    match serde_json::from_str::<D>(&raw) {
        Ok(doc) => doc.restore().unwrap_or_else(|| {
            log::warn!("discarding outdated document under `{}`", key);
            D::default()
        }),
        Err(e) => {
            log::warn!("discarding malformed document under `{}`: {}", key, e);
            D::default()
        }
    }
}

/// Serialize and write the document under `key`
pub fn save_document<D: Document, S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    doc: &D,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(doc)?;
    store.set(key, &raw)
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
