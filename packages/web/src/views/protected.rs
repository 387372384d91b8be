//! Route guard for pages that need a signed-in user.

use dioxus::prelude::*;
use ui::{use_auth, LoadingState};

use crate::Route;

/// Layout that renders its child route only for authenticated users.
#[component]
pub fn Protected() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if !state.is_loading() && !state.is_authenticated() {
            tracing::debug!("no session, redirecting to login");
            nav.replace(Route::Login {});
        }
    });

    let state = auth();
    if state.is_loading() {
        return rsx! {
            LoadingState { message: "Loading..." }
        };
    }
    if !state.is_authenticated() {
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
