//! Browser `localStorage` backend for best scores.

use crate::error::StoreError;
use crate::store::ScoreStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Scores kept in the page origin's `localStorage`.
///
/// Private browsing and disabled storage surface as `StoreError::Unavailable`,
/// which the session treats as "no best score yet".
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    pub fn is_available() -> bool {
        local_storage().is_some()
    }

    pub fn remove(&self, key: &str) {
        if let Some(s) = local_storage() {
            let _ = s.remove_item(key);
        }
    }
}

impl ScoreStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage.get_item(key).map_err(|_| StoreError::Unavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::Unavailable)
    }
}
