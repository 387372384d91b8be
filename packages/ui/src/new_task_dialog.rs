use api::{Member, NewTask};
use dioxus::prelude::*;

use crate::forms::{non_empty, parse_id};
use crate::views::ModalOverlay;
use crate::ErrorBanner;

/// Modal form for adding a task to a project.
///
/// The assignee is picked from the project's members; an empty choice leaves
/// the task unassigned.
#[component]
pub fn NewTaskDialog(
    project_id: i64,
    members: Vec<Member>,
    #[props(default)] submitting: bool,
    #[props(default)] error: Option<String>,
    on_create: EventHandler<NewTask>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut assignee = use_signal(String::new);
    let mut local_error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        local_error.set(None);

        let Some(t) = non_empty(&title()) else {
            local_error.set(Some("Task title is required".to_string()));
            return;
        };
        let assignee_id = match parse_id(&assignee()) {
            Ok(id) => id,
            Err(e) => {
                local_error.set(Some(e));
                return;
            }
        };

        let mut task = NewTask::new(project_id, t);
        task.description = non_empty(&description());
        task.assignee_id = assignee_id;
        on_create.call(task);
    };

    rsx! {
        ModalOverlay {
            title: "Create New Task",
            on_close: move |_| on_cancel.call(()),

            form {
                onsubmit: handle_submit,

                ErrorBanner { message: local_error().or(error) }

                div {
                    class: "form-field",
                    label { r#for: "new-task-title", "Task Title" }
                    input {
                        id: "new-task-title",
                        r#type: "text",
                        placeholder: "Enter task title",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "new-task-description", "Description (optional)" }
                    textarea {
                        id: "new-task-description",
                        rows: 4,
                        placeholder: "Enter task description",
                        value: description(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "new-task-assignee", "Assign To (optional)" }
                    select {
                        id: "new-task-assignee",
                        value: assignee(),
                        onchange: move |evt| assignee.set(evt.value()),
                        option { value: "", "Unassigned" }
                        for member in &members {
                            option {
                                key: "{member.id}",
                                value: "{member.account_id()}",
                                "{member.display_name()}"
                            }
                        }
                    }
                }

                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Creating..." } else { "Create" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
