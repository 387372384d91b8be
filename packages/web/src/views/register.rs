use dioxus::prelude::*;
use ui::use_auth;
use ui::views::RegisterForm;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        div {
            class: "auth-container",
            RegisterForm {
                on_authenticated: move |_| {
                    nav.replace(Route::Dashboard {});
                },
                on_login: move |_| {
                    nav.push(Route::Login {});
                },
            }
        }
    }
}
