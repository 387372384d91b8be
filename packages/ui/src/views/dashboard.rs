use api::{NewProject, Project};
use dioxus::prelude::*;

use crate::forms::non_empty;
use crate::icons::FaPlus;
use crate::Icon;
use crate::views::ModalOverlay;
use crate::{use_auth, use_client, use_projects, ErrorBanner, LoadingState, Navbar};

/// List of the signed-in user's projects with a create-project modal.
///
/// Routing stays with the platform crate: opening a project and signing out
/// are reported through the event handlers.
#[component]
pub fn DashboardView(on_open_project: EventHandler<i64>, on_signed_out: EventHandler<()>) -> Element {
    let auth = use_auth();
    let client = use_client();
    let mut shared = use_projects();

    let mut projects = use_signal(Vec::<Project>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut show_create = use_signal(|| false);
    let mut creating = use_signal(|| false);
    let mut create_error = use_signal(|| Option::<String>::None);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);

    // Anonymous visitors are sent back to sign in
    use_effect(move || {
        let state = auth();
        if !state.is_loading() && !state.is_authenticated() {
            on_signed_out.call(());
        }
    });

    // Reload whenever the signed-in user changes
    let load_client = client.clone();
    let _loader = use_resource(move || {
        let client = load_client.clone();
        let user_id = auth().user().map(|u| u.id);
        async move {
            let Some(user_id) = user_id else {
                return;
            };
            loading.set(true);
            match client.list_projects(Some(user_id)).await {
                Ok(list) => {
                    tracing::debug!("loaded {} projects", list.len());
                    shared.write().set_projects(list.clone());
                    projects.set(list);
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to load projects: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let mut close_create = move || {
        show_create.set(false);
        create_error.set(None);
        name.set(String::new());
        description.set(String::new());
    };

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(project_name) = non_empty(&name()) else {
            create_error.set(Some("Project name is required".to_string()));
            return;
        };
        let body = NewProject {
            name: project_name,
            description: non_empty(&description()),
        };
        let client = client.clone();
        spawn(async move {
            creating.set(true);
            create_error.set(None);
            match client.create_project(&body).await {
                Ok(project) => {
                    tracing::info!("created project {}", project.id);
                    shared.write().add(project.clone());
                    projects.write().push(project);
                    close_create();
                }
                Err(e) => {
                    tracing::error!("Failed to create project: {}", e);
                    create_error.set(Some(e.to_string()));
                }
            }
            creating.set(false);
        });
    };

    if auth().is_loading() {
        return rsx! {
            LoadingState { message: "Loading..." }
        };
    }

    rsx! {
        div {
            class: "page",

            Navbar {
                on_logged_out: move |_| on_signed_out.call(()),
                span { class: "navbar-brand", "Taskboard" }
            }

            main {
                class: "page-content",

                div {
                    class: "page-header",
                    h1 { "My Projects" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create.set(true),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " Create New Project"
                    }
                }

                ErrorBanner { message: error() }

                if loading() {
                    LoadingState { message: "Loading projects..." }
                } else if projects.read().is_empty() {
                    LoadingState { message: "You don't have any projects yet. Create one to get started!" }
                } else {
                    div {
                        class: "project-grid",
                        for project in projects() {
                            ProjectCard {
                                key: "{project.id}",
                                project: project.clone(),
                                on_open: move |id| on_open_project.call(id),
                            }
                        }
                    }
                }
            }

            if show_create() {
                ModalOverlay {
                    title: "Create New Project",
                    on_close: move |_| close_create(),

                    form {
                        onsubmit: handle_create,

                        ErrorBanner { message: create_error() }

                        div {
                            class: "form-field",
                            label { r#for: "project-name", "Project Name" }
                            input {
                                id: "project-name",
                                r#type: "text",
                                placeholder: "Enter project name",
                                value: name(),
                                oninput: move |evt: FormEvent| name.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "project-description", "Description (optional)" }
                            textarea {
                                id: "project-description",
                                rows: 4,
                                placeholder: "Enter project description",
                                value: description(),
                                oninput: move |evt: FormEvent| description.set(evt.value()),
                            }
                        }

                        div {
                            class: "modal-actions",
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: creating(),
                                if creating() { "Creating..." } else { "Create" }
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| close_create(),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One clickable project summary on the dashboard.
#[component]
fn ProjectCard(project: Project, on_open: EventHandler<i64>) -> Element {
    let id = project.id;
    let owner = project.owner_label();

    rsx! {
        div {
            class: "project-card",
            onclick: move |_| on_open.call(id),

            h3 { class: "project-card-title", "{project.display_name()}" }

            if let Some(description) = &project.description {
                p { class: "project-card-description", "{description}" }
            }

            div {
                class: "project-card-meta",
                if let Some(owner) = owner {
                    span { "Owner: {owner}" }
                }
                span { "{project.member_total()} members" }
                span { "{project.task_total()} tasks" }
            }
        }
    }
}
