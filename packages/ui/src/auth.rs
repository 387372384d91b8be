//! Authentication context and hooks for the UI.

use api::{ApiClient, AuthState, Session};
use dioxus::prelude::*;

use crate::projects::use_projects;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the session that performs login, registration and logout.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Get the API client shared by every view.
pub fn use_client() -> ApiClient {
    use_session().client().clone()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_context_provider(crate::make_session);
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    // Check the persisted token once on mount
    let _ = use_resource(move || {
        let session = session.clone();
        async move {
            auth_state.set(session.restore().await);
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_logged_out: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let mut projects = use_projects();
    let session = use_session();

    let onclick = move |_| {
        auth_state.set(session.logout());
        projects.write().clear();
        on_logged_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
