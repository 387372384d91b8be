//! # Session state machine
//!
//! [`AuthState`] starts as `Unknown` while the persisted token (if any) is
//! being checked, then settles on `Authenticated` or `Anonymous`:
//!
//! ```text
//!            restore: token valid            login / register ok
//! Unknown ──────────────────────▶ Authenticated ◀───────────────── Anonymous
//!    │                                 │                               ▲
//!    │ restore: no token / invalid     │ logout                        │
//!    └─────────────────────────────────┴───────────────────────────────┘
//! ```
//!
//! [`Session`] performs the transitions against an [`ApiClient`] but does not
//! hold the state itself: each call returns the new state and the UI stores
//! it in a signal. A failed login or registration returns the error and
//! leaves the token untouched.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Credentials, Registration, User};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// The persisted session has not been checked yet.
    #[default]
    Unknown,
    Authenticated(User),
    Anonymous,
}

impl AuthState {
    /// The signed-in user. `None` while loading or when anonymous.
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Unknown)
    }
}

/// Drives [`AuthState`] transitions through the API.
#[derive(Debug, Clone)]
pub struct Session {
    client: ApiClient,
}

impl Session {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Resolve the initial state from the persisted token.
    ///
    /// A token the server rejects is removed without surfacing an error.
    pub async fn restore(&self) -> AuthState {
        if self.client.token().is_none() {
            return AuthState::Anonymous;
        }

        match self.client.current_user().await {
            Ok(user) => {
                tracing::info!("Restored session for {}", user.username);
                AuthState::Authenticated(user)
            }
            Err(e) => {
                tracing::warn!("Discarding stored session: {}", e);
                self.client.clear_token();
                AuthState::Anonymous
            }
        }
    }

    /// Log in and keep the issued token.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthState, ApiError> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.client.login(&credentials).await?;
        self.client.set_token(&response.access_token);
        tracing::info!("Logged in as {}", response.username);
        Ok(AuthState::Authenticated(response.user()))
    }

    /// Create an account, then log in with the same credentials to obtain a
    /// token, since registration itself does not issue one.
    pub async fn register(&self, registration: &Registration) -> Result<AuthState, ApiError> {
        let created = self.client.register(registration).await?;
        let response = self.client.login(&registration.credentials()).await?;
        self.client.set_token(&response.access_token);
        tracing::info!("Registered {}", created.username);

        let mut user = response.user();
        user.name = user.name.or(created.name);
        user.email = created.email;
        Ok(AuthState::Authenticated(user))
    }

    /// Drop the token. Always succeeds.
    pub fn logout(&self) -> AuthState {
        self.client.clear_token();
        AuthState::Anonymous
    }
}
