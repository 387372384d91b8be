use api::Registration;
use dioxus::prelude::*;

use crate::forms::{non_empty, validate_registration};
use crate::{use_auth, use_session, ErrorBanner};

/// Account creation form. A successful registration also signs the new user
/// in.
#[component]
pub fn RegisterForm(on_authenticated: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let mut auth_state = use_auth();
    let session = use_session();
    let mut username = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(e) = validate_registration(
            &username(),
            &name(),
            &email(),
            &password(),
            &confirm_password(),
        ) {
            error.set(Some(e));
            return;
        }
        let registration = Registration {
            username: username().trim().to_string(),
            name: name().trim().to_string(),
            password: password(),
            email: non_empty(&email()),
        };
        let session = session.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match session.register(&registration).await {
                Ok(state) => {
                    auth_state.set(state);
                    on_authenticated.call(());
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { class: "auth-title", "Create an account" }

            form {
                onsubmit: handle_submit,

                ErrorBanner { message: error() }

                div {
                    class: "form-field",
                    label { r#for: "register-username", "Username" }
                    input {
                        id: "register-username",
                        r#type: "text",
                        autocomplete: "username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "register-name", "Full Name" }
                    input {
                        id: "register-name",
                        r#type: "text",
                        autocomplete: "name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "register-email", "Email (optional)" }
                    input {
                        id: "register-email",
                        r#type: "email",
                        autocomplete: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "register-password", "Password" }
                    input {
                        id: "register-password",
                        r#type: "password",
                        autocomplete: "new-password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "register-confirm", "Confirm Password" }
                    input {
                        id: "register-confirm",
                        r#type: "password",
                        autocomplete: "new-password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_login.call(());
                    },
                    "Sign in"
                }
            }
        }
    }
}
