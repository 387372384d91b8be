//! This crate contains all shared UI for the workspace: session and project
//! state providers, board logic, and the dashboard and project views.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_session, make_store};

pub mod board;
pub mod forms;

pub mod components;
pub use components::{ConfirmDialog, ErrorBanner, LoadingState};

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_auth, use_client, use_session, AuthProvider, LogoutButton};

mod projects;
pub use projects::{use_projects, ProjectCollection, ProjectProvider};

mod new_task_dialog;
pub use new_task_dialog::NewTaskDialog;

/// Stylesheet shared by every view in this crate.
pub const UI_CSS: Asset = asset!("/assets/ui.css");
