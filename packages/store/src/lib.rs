//! Durable key-value storage for client session state.
//!
//! The client persists a single bearer token between reloads. Each platform
//! gets its own [`KeyValueStore`]: browser `localStorage` on the web, a
//! directory of small files on native targets, and an in-memory map for tests.

pub mod kv;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use kv::KeyValueStore;
