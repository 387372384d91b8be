//! API endpoint configuration.
//!
//! The base URL is resolved by [`ApiConfig::from_env`] in this order:
//!
//! 1. `TASKBOARD_API_URL` in the process environment (native builds only,
//!    after loading a `.env` file if present);
//! 2. `TASKBOARD_API_URL` captured at build time, which is how the browser
//!    build gets configured;
//! 3. [`DEFAULT_API_URL`].

use crate::error::ApiError;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "TASKBOARD_API_URL";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Where the REST API lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and normalize a base URL. Trailing slashes are dropped so
    /// endpoint paths can always start with `/`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/').to_string();
        let url = reqwest::Url::parse(&trimmed).map_err(|e| ApiError::Config {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Config {
                url: raw,
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }
        Ok(Self { base_url: trimmed })
    }

    /// Resolve the base URL from the environment.
    pub fn from_env() -> Result<Self, ApiError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(API_URL_ENV) {
                if !url.trim().is_empty() {
                    return Self::new(url);
                }
            }
        }

        match option_env!("TASKBOARD_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/projects/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
