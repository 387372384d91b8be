//! # REST client
//!
//! [`ApiClient`] is the single façade the views use to talk to the server. It
//! holds the bearer token (in memory, mirrored into a [`KeyValueStore`] under
//! [`ACCESS_TOKEN_KEY`]) and maps each endpoint to a typed async method.
//!
//! ## Request contract
//!
//! Every request is sent as `application/json` to `base_url + path`, with
//! `Authorization: Bearer <token>` attached whenever a token is set. The
//! response is handled by [`ApiClient::request`]:
//!
//! | Response | Result |
//! |----------|--------|
//! | `204 No Content` | `Ok(None)`, the body is never parsed |
//! | other 2xx | `Ok(Some(T))` parsed from the JSON body |
//! | non-2xx | [`ApiError::Http`] with the server `detail` or `HTTP <status>` |
//! | network failure | [`ApiError::Transport`] |
//! | unparseable body | [`ApiError::Decode`] |
//!
//! There is no retry, timeout or caching: one call is one request.
//!
//! ## Endpoints
//!
//! Updates use `PUT` and tasks live under `/projects/{id}/tasks/`, matching
//! the routes the server exposes.

use std::sync::{Arc, Mutex};

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::KeyValueStore;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    Credentials, LoginResponse, Member, MemberUpdate, NewMember, NewProject, NewTask, Project,
    ProjectUpdate, Registration, Task, TaskUpdate, User, UserUpdate,
};

/// Storage key of the persisted bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Typed HTTP client for the task management API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Arc<Mutex<Option<String>>>,
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url())
            .field("authenticated", &self.token().is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a client, picking up any token persisted in `storage`.
    pub fn new(config: ApiConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let token = storage.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty());
        Self {
            http: reqwest::Client::new(),
            config,
            token: Arc::new(Mutex::new(token)),
            storage,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    /// Use `token` for subsequent requests and persist it.
    pub fn set_token(&self, token: &str) {
        if let Ok(mut current) = self.token.lock() {
            *current = Some(token.to_string());
        }
        self.storage.set(ACCESS_TOKEN_KEY, token);
    }

    /// Forget the token in memory and in storage.
    pub fn clear_token(&self) {
        if let Ok(mut current) = self.token.lock() {
            *current = None;
        }
        self.storage.remove(ACCESS_TOKEN_KEY);
    }

    /// Send one request and decode the response.
    ///
    /// Returns `Ok(None)` for `204 No Content`.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.url(path);
        tracing::debug!("{} {}", method, path);

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, path, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response.text().await?;

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &text);
            tracing::debug!("{} {} -> {}: {}", method, path, status.as_u16(), err);
            return Err(err);
        }

        Ok(Some(serde_json::from_str(&text)?))
    }

    async fn fetch<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(method, path, body)
            .await?
            .ok_or_else(|| ApiError::Decode(format!("empty response from {path}")))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch::<T, ()>(Method::GET, path, None).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request::<serde_json::Value, ()>(Method::DELETE, path, None)
            .await
            .map(|_| ())
    }

    // Users

    /// Create an account. The server answers with the new user and no token.
    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        self.fetch(Method::POST, "/users/register", Some(registration))
            .await
    }

    /// Exchange credentials for a token. The caller decides whether to keep it.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.fetch(Method::POST, "/users/login", Some(credentials))
            .await
    }

    /// The user the current token belongs to.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch::<User, ()>(Method::POST, "/users/me", None).await
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User, ApiError> {
        self.get(&format!("/users/{user_id}")).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/users/").await
    }

    pub async fn update_user(&self, user_id: i64, update: &UserUpdate) -> Result<User, ApiError> {
        self.fetch(Method::PUT, &format!("/users/{user_id}"), Some(update))
            .await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/users/{user_id}")).await
    }

    // Projects

    pub async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        self.fetch(Method::POST, "/projects/", Some(project)).await
    }

    /// List projects, optionally only those `user_id` is a member of.
    pub async fn list_projects(&self, user_id: Option<i64>) -> Result<Vec<Project>, ApiError> {
        match user_id {
            Some(id) => self.get(&format!("/projects/?user_id={id}")).await,
            None => self.get("/projects/").await,
        }
    }

    /// Fetch one project with its members and tasks embedded.
    pub async fn get_project(&self, project_id: i64) -> Result<Project, ApiError> {
        self.get(&format!("/projects/{project_id}")).await
    }

    pub async fn update_project(
        &self,
        project_id: i64,
        update: &ProjectUpdate,
    ) -> Result<Project, ApiError> {
        self.fetch(Method::PUT, &format!("/projects/{project_id}"), Some(update))
            .await
    }

    pub async fn delete_project(&self, project_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/projects/{project_id}")).await
    }

    // Members

    pub async fn add_member(&self, project_id: i64, member: &NewMember) -> Result<Member, ApiError> {
        self.fetch(
            Method::POST,
            &format!("/projects/{project_id}/members"),
            Some(member),
        )
        .await
    }

    pub async fn list_members(&self, project_id: i64) -> Result<Vec<Member>, ApiError> {
        self.get(&format!("/projects/{project_id}/members")).await
    }

    pub async fn update_member(
        &self,
        project_id: i64,
        member_id: i64,
        update: &MemberUpdate,
    ) -> Result<Member, ApiError> {
        self.fetch(
            Method::PUT,
            &format!("/projects/{project_id}/members/{member_id}"),
            Some(update),
        )
        .await
    }

    pub async fn remove_member(&self, project_id: i64, member_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/projects/{project_id}/members/{member_id}"))
            .await
    }

    // Tasks

    pub async fn create_task(&self, project_id: i64, task: &NewTask) -> Result<Task, ApiError> {
        self.fetch(
            Method::POST,
            &format!("/projects/{project_id}/tasks/"),
            Some(task),
        )
        .await
    }

    pub async fn list_tasks(&self, project_id: i64) -> Result<Vec<Task>, ApiError> {
        self.get(&format!("/projects/{project_id}/tasks/")).await
    }

    pub async fn update_task(
        &self,
        project_id: i64,
        task_id: i64,
        update: &TaskUpdate,
    ) -> Result<Task, ApiError> {
        self.fetch(
            Method::PUT,
            &format!("/projects/{project_id}/tasks/{task_id}"),
            Some(update),
        )
        .await
    }

    pub async fn delete_task(&self, project_id: i64, task_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/projects/{project_id}/tasks/{task_id}"))
            .await
    }
}
