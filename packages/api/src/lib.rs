//! # API crate — REST client for the task management server
//!
//! Everything the frontend needs to talk to the server, with no UI types:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: bearer-token HTTP façade with one typed method per endpoint |
//! | [`config`] | [`ApiConfig`]: base URL resolution from the environment |
//! | [`error`] | [`ApiError`]: transport, HTTP and decode failures with a display message |
//! | [`models`] | Users, projects, members, tasks and request payloads |
//! | [`session`] | [`Session`] and [`AuthState`]: the login state machine |
//!
//! The crate builds for `wasm32` (requests go through the browser's `fetch`)
//! and for native targets, where the tests run against an in-process server.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use client::{ApiClient, ACCESS_TOKEN_KEY};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    Credentials, LoginResponse, Member, MemberUpdate, NewMember, NewProject, NewTask, Project,
    ProjectRole, ProjectUpdate, Registration, Task, TaskStatus, TaskUpdate, User, UserUpdate,
};
pub use session::{AuthState, Session};
