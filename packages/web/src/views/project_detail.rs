use dioxus::prelude::*;
use ui::views::ProjectDetailView;

use crate::Route;

#[component]
pub fn ProjectDetail(project_id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        ProjectDetailView {
            project_id,
            on_back: move |_| {
                nav.push(Route::Dashboard {});
            },
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
