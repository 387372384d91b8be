//! # User model
//!
//! [`User`] is the identity returned by `/users/me`, `/users/{id}` and
//! `/users/register`, and embedded as a project's `owner`. Only `id` and
//! `username` are guaranteed; accounts created before the email migration
//! have no email, and `name` is nullable server-side.
//!
//! [`User::display_name`] returns the name or falls back to the username.

use serde::{Deserialize, Serialize};

/// User information as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Get display name, falling back to the username if name is not set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}
