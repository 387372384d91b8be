use dioxus::prelude::*;

use crate::forms::validate_login;
use crate::{use_auth, use_session, ErrorBanner};

/// Username and password sign-in form.
#[component]
pub fn LoginForm(on_authenticated: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    let mut auth_state = use_auth();
    let session = use_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(e) = validate_login(&username(), &password()) {
            error.set(Some(e));
            return;
        }
        let session = session.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match session.login(username().trim(), &password()).await {
                Ok(state) => {
                    auth_state.set(state);
                    password.set(String::new());
                    on_authenticated.call(());
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { class: "auth-title", "Taskboard" }
            p { class: "auth-subtitle", "Sign in to your account" }

            form {
                onsubmit: handle_submit,

                ErrorBanner { message: error() }

                div {
                    class: "form-field",
                    label { r#for: "login-username", "Username" }
                    input {
                        id: "login-username",
                        r#type: "text",
                        autocomplete: "username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign In" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_register.call(());
                    },
                    "Register"
                }
            }
        }
    }
}
