use api::{Member, NewMember, ProjectRole};
use dioxus::prelude::*;

use crate::forms::parse_id;
use crate::{use_client, ErrorBanner};

/// Member list of a project. The owner can add members by user id and
/// remove anyone but themselves.
#[component]
pub fn MembersPanel(
    project_id: i64,
    owner_id: i64,
    members: Vec<Member>,
    can_manage: bool,
    on_change: EventHandler<Vec<Member>>,
) -> Element {
    let client = use_client();
    let mut new_user_id = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let add_client = client.clone();
    let add_members = members.clone();
    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let user_id = match parse_id(&new_user_id()) {
            Ok(Some(id)) => id,
            Ok(None) => {
                error.set(Some("Enter a user id".to_string()));
                return;
            }
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        if add_members.iter().any(|m| m.account_id() == user_id) {
            error.set(Some(format!("User #{user_id} is already a member")));
            return;
        }

        let client = add_client.clone();
        let mut list = add_members.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match client.add_member(project_id, &NewMember::member(user_id)).await {
                Ok(mut member) => {
                    // Membership rows come back without the user's name
                    if member.username.is_none() {
                        match client.get_user(user_id).await {
                            Ok(user) => {
                                member.username = Some(user.username);
                                member.name = user.name;
                            }
                            Err(e) => tracing::warn!("Could not look up user {}: {}", user_id, e),
                        }
                    }
                    list.push(member);
                    on_change.call(list);
                    new_user_id.set(String::new());
                }
                Err(e) => {
                    tracing::error!("Failed to add member: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    };

    let remove_client = client.clone();
    let remove_members = members.clone();
    let handle_remove = move |member: Member| {
        let client = remove_client.clone();
        let mut list = remove_members.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match client.remove_member(project_id, member.id).await {
                Ok(()) => {
                    list.retain(|m| m.id != member.id);
                    on_change.call(list);
                }
                Err(e) => {
                    tracing::error!("Failed to remove member {}: {}", member.id, e);
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    };

    let count = members.len();

    rsx! {
        section {
            class: "members-panel",
            h2 { "Members ({count})" }

            ErrorBanner { message: error() }

            ul {
                class: "member-list",
                for member in members {
                    li {
                        key: "{member.id}",
                        class: "member-row",
                        span { class: "member-name", "{member.display_name()}" }
                        span { class: "role-badge role-{member.role.as_str()}", "{member.role.as_str()}" }
                        if can_manage && member.role != ProjectRole::Owner && member.account_id() != owner_id {
                            button {
                                class: "btn btn-small btn-danger",
                                disabled: busy(),
                                onclick: {
                                    let handle_remove = handle_remove.clone();
                                    let member = member.clone();
                                    move |_| handle_remove(member.clone())
                                },
                                "Remove"
                            }
                        }
                    }
                }
            }

            if can_manage {
                form {
                    class: "member-add",
                    onsubmit: handle_add,
                    input {
                        r#type: "text",
                        inputmode: "numeric",
                        placeholder: "User id",
                        value: new_user_id(),
                        oninput: move |evt: FormEvent| new_user_id.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary btn-small",
                        r#type: "submit",
                        disabled: busy(),
                        "Add Member"
                    }
                }
            }
        }
    }
}
