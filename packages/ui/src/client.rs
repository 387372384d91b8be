//! Shared client constructors for all platforms.
//!
//! Returns an [`api::Session`] whose token lives in the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Native**: filesystem via [`store::FileStore`]
//! - anything else: [`store::MemoryStore`], so a reload signs the user out

use std::sync::Arc;

use api::{ApiClient, ApiConfig, Session};
use store::KeyValueStore;

/// Create the platform-appropriate token store.
pub fn make_store() -> Arc<dyn KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Arc::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("taskboard");
        Arc::new(store::FileStore::new(base))
    }
}

/// Create a session against the configured API, with any persisted token
/// already loaded.
pub fn make_session() -> Session {
    let config = ApiConfig::from_env().unwrap_or_else(|e| {
        tracing::error!("{}; using {}", e, api::config::DEFAULT_API_URL);
        ApiConfig::default()
    });
    tracing::info!("Using API at {}", config.base_url());
    Session::new(ApiClient::new(config, make_store()))
}
