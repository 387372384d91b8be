//! # Browser `localStorage` store
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the web platform.
//! Values live in `window.localStorage`, which the browser scopes to the page
//! origin and keeps across reloads.
//!
//! The struct is zero-sized and looks up the storage object on every call.
//! When storage is unavailable (private browsing, sandboxed iframes) reads
//! return `None` and writes are dropped, so the client degrades to a
//! session that lasts until the next reload.

use web_sys::Storage;

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed store for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!("localStorage rejected write for {}", key);
                }
            }
            None => tracing::warn!("localStorage unavailable, {} not persisted", key),
        }
    }

    fn remove(&self, key: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(key).is_err() {
                    tracing::warn!("localStorage rejected removal of {}", key);
                }
            }
            None => tracing::warn!("localStorage unavailable, {} not removed", key),
        }
    }
}
