//! # Filesystem-backed key-value store
//!
//! [`FileStore`] keeps each key in its own file under a base directory. It is
//! used on native targets so a login survives an app restart.
//!
//! ```text
//! <base_dir>/
//! └── access_token     # file containing the raw value
//! ```
//!
//! Keys are used verbatim as file names, so callers stick to simple
//! identifiers such as `access_token`.

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed store for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let content = std::fs::read_to_string(self.key_path(key)).ok()?;
        Some(content.trim_end_matches('\n').to_string())
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::warn!("Failed to persist {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove {}: {}", key, e),
        }
    }
}
