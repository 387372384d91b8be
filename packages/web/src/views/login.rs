use dioxus::prelude::*;
use ui::use_auth;
use ui::views::LoginForm;

use crate::Route;

/// Login page. Signed-in users are sent on to the dashboard.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // If already logged in, redirect to the dashboard
    use_effect(move || {
        if auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        div {
            class: "auth-container",
            LoginForm {
                on_authenticated: move |_| {
                    nav.replace(Route::Dashboard {});
                },
                on_register: move |_| {
                    nav.push(Route::Register {});
                },
            }
        }
    }
}
