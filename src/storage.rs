//! Browser Storage
//!
//! localStorage-backed [`KeyValueStore`]. The handle is looked up on every call
//! so the store stays a plain `Copy` value.

use crate::commands::js_error;
use widget_core::{KeyValueStore, StoreError};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|e| StoreError::Unavailable(js_error(e)))?
        .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: js_error(e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: js_error(e),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        local_storage()?.remove_item(key).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: js_error(e),
        })
    }
}
