use api::{Member, NewTask, Task, TaskStatus, TaskUpdate};
use dioxus::prelude::*;

use crate::board::{self, advance_label, assignee_name, LoadedBoard};
use crate::icons::{FaArrowLeft, FaPlus, FaTrashCan};
use crate::Icon;
use crate::views::MembersPanel;
use crate::{
    use_auth, use_client, use_projects, ConfirmDialog, ErrorBanner, LoadingState, Navbar,
    NewTaskDialog,
};

/// Board view of one project.
///
/// Loads the project with its members and tasks every time `project_id`
/// changes. Task and member controls are only rendered for the owner.
#[component]
pub fn ProjectDetailView(
    project_id: i64,
    on_back: EventHandler<()>,
    on_signed_out: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let client = use_client();
    let mut shared = use_projects();

    // Route props are not reactive on their own
    let mut current_id = use_signal(|| project_id);
    use_effect(use_reactive((&project_id,), move |(id,)| {
        if *current_id.peek() != id {
            current_id.set(id);
        }
    }));

    let mut loaded = use_signal(LoadedBoard::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut show_new_task = use_signal(|| false);
    let mut creating = use_signal(|| false);
    let mut create_error = use_signal(|| Option::<String>::None);
    let mut pending_delete = use_signal(|| Option::<Task>::None);

    let load_client = client.clone();
    let _loader = use_resource(move || {
        let client = load_client.clone();
        let id = current_id();
        async move {
            // Nothing from a previous project stays on screen
            loaded.write().retain_for(id);
            show_new_task.set(false);
            pending_delete.set(None);
            loading.set(true);
            error.set(None);
            match client.get_project(id).await {
                Ok(project) => {
                    shared.write().select(Some(project.clone()));
                    loaded.set(LoadedBoard::from_project(project));
                }
                Err(e) => {
                    tracing::error!("Failed to load project {}: {}", id, e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let create_client = client.clone();
    let handle_create_task = move |new_task: NewTask| {
        let Some(id) = loaded.peek().project_id() else {
            return;
        };
        let client = create_client.clone();
        spawn(async move {
            creating.set(true);
            create_error.set(None);
            match client.create_task(id, &new_task).await {
                Ok(task) => {
                    tracing::info!("created task {} in project {}", task.id, id);
                    if loaded.peek().shows(id) {
                        loaded.write().tasks.push(task);
                    }
                    show_new_task.set(false);
                }
                Err(e) => {
                    tracing::error!("Failed to create task: {}", e);
                    create_error.set(Some(e.to_string()));
                }
            }
            creating.set(false);
        });
    };

    let advance_client = client.clone();
    let handle_advance = move |task: Task| {
        let Some(next) = task.status.next() else {
            return;
        };
        let Some(id) = loaded.peek().project_id() else {
            return;
        };
        let client = advance_client.clone();
        spawn(async move {
            match client
                .update_task(id, task.id, &TaskUpdate::status(next))
                .await
            {
                Ok(updated) => {
                    if loaded.peek().shows(id) {
                        board::replace_task(&mut loaded.write().tasks, updated);
                    }
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to move task {}: {}", task.id, e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let delete_client = client.clone();
    let handle_confirm_delete = move |_: ()| {
        let Some(task) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let Some(id) = loaded.peek().project_id() else {
            return;
        };
        let client = delete_client.clone();
        spawn(async move {
            match client.delete_task(id, task.id).await {
                Ok(()) => {
                    if loaded.peek().shows(id) {
                        board::remove_task(&mut loaded.write().tasks, task.id);
                    }
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to delete task {}: {}", task.id, e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let board_state = loaded();
    let content = match board_state.project {
        None if loading() => rsx! {
            LoadingState { message: "Loading project..." }
        },
        None => rsx! {
            ErrorBanner { message: error().or(Some("Project not found".to_string())) }
            button {
                class: "btn btn-secondary",
                onclick: move |_| on_back.call(()),
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                " Back to Projects"
            }
        },
        Some(current) => {
            let is_owner = board::can_manage(auth().user(), Some(&current));
            let member_list = board_state.members;
            let columns = board::columns(&board_state.tasks);

            rsx! {
                button {
                    class: "btn btn-link",
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    " Back to Projects"
                }

                div {
                    class: "page-header",
                    div {
                        h1 { "{current.display_name()}" }
                        if let Some(description) = &current.description {
                            p { class: "project-description", "{description}" }
                        }
                    }
                    if is_owner {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_new_task.set(true),
                            Icon { icon: FaPlus, width: 12, height: 12 }
                            " Add Task"
                        }
                    }
                }

                ErrorBanner { message: error() }

                div {
                    class: "board",
                    for (status, column) in columns {
                        BoardColumn {
                            key: "{status}",
                            status,
                            tasks: column,
                            members: member_list.clone(),
                            can_manage: is_owner,
                            on_advance: handle_advance.clone(),
                            on_delete: move |task| pending_delete.set(Some(task)),
                        }
                    }
                }

                MembersPanel {
                    project_id: current.id,
                    owner_id: current.owner_id,
                    members: member_list.clone(),
                    can_manage: is_owner,
                    on_change: move |list| {
                        if loaded.peek().shows(current.id) {
                            loaded.write().members = list;
                        }
                    },
                }

                if show_new_task() {
                    NewTaskDialog {
                        project_id: current.id,
                        members: member_list.clone(),
                        submitting: creating(),
                        error: create_error(),
                        on_create: handle_create_task.clone(),
                        on_cancel: move |_| {
                            show_new_task.set(false);
                            create_error.set(None);
                        },
                    }
                }

                if let Some(task) = pending_delete() {
                    ConfirmDialog {
                        message: format!("Delete task \"{}\"? This cannot be undone.", task.title),
                        on_confirm: handle_confirm_delete.clone(),
                        on_cancel: move |_| pending_delete.set(None),
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",

            Navbar {
                on_logged_out: move |_| on_signed_out.call(()),
                a {
                    class: "navbar-brand",
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_back.call(());
                    },
                    "Taskboard"
                }
            }

            main {
                class: "page-content",
                {content}
            }
        }
    }
}

/// One status column of the board.
#[component]
fn BoardColumn(
    status: TaskStatus,
    tasks: Vec<Task>,
    members: Vec<Member>,
    can_manage: bool,
    on_advance: EventHandler<Task>,
    on_delete: EventHandler<Task>,
) -> Element {
    let count = tasks.len();

    rsx! {
        section {
            class: "board-column",
            h2 {
                class: "board-column-title",
                "{status}"
                span { class: "board-column-count", "{count}" }
            }
            if count == 0 {
                p { class: "board-column-empty", "No tasks" }
            }
            for task in tasks {
                TaskCard {
                    key: "{task.id}",
                    assignee: assignee_name(&members, &task),
                    task,
                    can_manage,
                    on_advance,
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn TaskCard(
    task: Task,
    assignee: Option<String>,
    can_manage: bool,
    on_advance: EventHandler<Task>,
    on_delete: EventHandler<Task>,
) -> Element {
    let move_label = advance_label(&task);
    let advance_task = task.clone();
    let delete_task = task.clone();

    rsx! {
        div {
            class: "task-card",
            h3 { class: "task-card-title", "{task.title}" }
            if let Some(description) = &task.description {
                p { class: "task-card-description", "{description}" }
            }
            if let Some(assignee) = assignee {
                p { class: "task-card-assignee", "Assigned to: {assignee}" }
            }
            if can_manage {
                div {
                    class: "task-card-actions",
                    if let Some(label) = move_label {
                        button {
                            class: "btn btn-small",
                            onclick: move |_| on_advance.call(advance_task.clone()),
                            "{label}"
                        }
                    }
                    button {
                        class: "btn btn-small btn-danger",
                        title: "Delete task",
                        onclick: move |_| on_delete.call(delete_task.clone()),
                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                        " Delete"
                    }
                }
            }
        }
    }
}
