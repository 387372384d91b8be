//! Small building blocks shared by the views.

use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Inline error banner. Renders nothing when `message` is `None`.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div {
                class: "error-banner",
                role: "alert",
                "{message}"
            }
        }
    }
}

/// Centered placeholder text for loading and empty states.
#[component]
pub fn LoadingState(message: String) -> Element {
    rsx! {
        div {
            class: "placeholder",
            p { "{message}" }
        }
    }
}

/// Modal asking the user to confirm a destructive action.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title: "Are you sure?",
            on_close: move |_| on_cancel.call(()),
            p { class: "modal-text", "{message}" }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
