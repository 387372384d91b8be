use dioxus::prelude::*;

use crate::Route;

/// Unknown paths fall back to the login page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();

    use_effect(move || {
        nav.replace(Route::Login {});
    });

    tracing::debug!("unknown route /{}", segments.join("/"));
    rsx! {}
}
