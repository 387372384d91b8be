use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{use_auth, AuthProvider, LoadingState, ProjectProvider};
use views::{Dashboard, Login, NotFound, ProjectDetail, Protected, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Protected)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/projects/:project_id")]
        ProjectDetail { project_id: i64 },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        AuthProvider {
            ProjectProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Send `/` to the dashboard or the login page once the session is known.
#[component]
fn Root() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if state.is_authenticated() {
            nav.replace(Route::Dashboard {});
        } else if !state.is_loading() {
            nav.replace(Route::Login {});
        }
    });

    rsx! {
        LoadingState { message: "Loading..." }
    }
}
