//! # Key-value store trait
//!
//! [`KeyValueStore`] is the seam between the API client and whatever durable
//! storage the platform offers. It mirrors the browser `localStorage` API:
//! string keys, string values, and no error reporting on the read path.
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`crate::MemoryStore`] | any | `HashMap` behind a mutex, lost on drop |
//! | [`crate::FileStore`] | native | one file per key under a base directory |
//! | `LocalStorageStore` | wasm32 + `web` | `window.localStorage`, scoped to the origin |
//!
//! Writes are best-effort. A store that cannot persist a value logs the
//! failure and carries on; the in-memory copy held by the caller stays valid
//! for the rest of the page lifetime.

/// String key-value storage shared between the client and the UI.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);

    /// Whether a value is stored under `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
