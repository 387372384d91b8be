use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::LogoutButton;

/// Page header with the app title, the signed-in user and a logout button.
#[component]
pub fn Navbar(on_logged_out: EventHandler<()>, children: Element) -> Element {
    let auth = use_auth();
    let user = auth().user().cloned();

    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-inner",
                div { class: "navbar-title", {children} }
                if let Some(user) = user {
                    div {
                        class: "navbar-user",
                        span { class: "navbar-welcome", "Welcome, {user.display_name()}" }
                        LogoutButton {
                            class: "btn btn-danger",
                            on_logged_out: on_logged_out,
                        }
                    }
                }
            }
        }
    }
}
