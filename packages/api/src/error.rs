//! Client error type.
//!
//! Every failure the client can hit collapses into [`ApiError`], whose
//! `Display` is the human-readable message views put in their error banner.
//! For HTTP errors that message is the server's `detail` string when it sent
//! one, or `HTTP <status>` otherwise.

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid API URL {url}: {reason}")]
    Config { url: String, reason: String },
}

impl ApiError {
    /// Build an HTTP error from a status code and the raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = detail_message(body).unwrap_or_else(|| format!("HTTP {status}"));
        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// The `detail` field of an error body, when it is a plain string.
/// Validation errors carry a list there instead and fall back to the status.
fn detail_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}
