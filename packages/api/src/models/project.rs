//! # Projects and memberships
//!
//! The server returns two shapes for a project:
//!
//! - the **list** shape from `GET /projects/`, which carries counts and the
//!   owner's name but may omit the project name entirely;
//! - the **detail** shape from `GET /projects/{id}`, which embeds the owner,
//!   the members and the tasks.
//!
//! [`Project`] accepts both. Missing or `null` collections deserialize as
//! empty vectors, and a missing name as an empty string.

use serde::{Deserialize, Serialize};

use super::{null_as_default, Task, User};

/// Role of a user within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectRole {
    Owner,
    Admin,
    #[default]
    Member,
}

impl ProjectRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectRole::Owner => "owner",
            ProjectRole::Admin => "admin",
            ProjectRole::Member => "member",
        }
    }
}

/// A user's membership in a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: ProjectRole,
    #[serde(default)]
    pub joined_at: Option<String>,
}

impl Member {
    /// Id of the member's user account.
    ///
    /// Membership rows carry a separate `user_id`; embedded member summaries
    /// are the user record itself, so their `id` is the user id.
    pub fn account_id(&self) -> i64 {
        self.user_id.unwrap_or(self.id)
    }

    pub fn display_name(&self) -> String {
        match (&self.name, &self.username) {
            (Some(name), _) if !name.trim().is_empty() => name.clone(),
            (_, Some(username)) => username.clone(),
            _ => format!("User #{}", self.account_id()),
        }
    }
}

/// A project as returned by the list or detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner_id: i64,
    #[serde(default)]
    pub owner: Option<User>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<Member>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub task_count: Option<u32>,
    #[serde(default)]
    pub member_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Project {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Untitled Project"
        } else {
            &self.name
        }
    }

    /// Whether `user_id` owns this project. Only used to gate UI controls;
    /// the server enforces the real permission.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }

    pub fn owner_label(&self) -> Option<String> {
        self.owner_name
            .clone()
            .or_else(|| self.owner.as_ref().map(|o| o.display_name().to_string()))
    }

    /// Member count from the list endpoint, or the embedded members.
    pub fn member_total(&self) -> u32 {
        self.member_count.unwrap_or(self.members.len() as u32)
    }

    /// Task count from the list endpoint, or the embedded tasks.
    pub fn task_total(&self) -> u32 {
        self.task_count.unwrap_or(self.tasks.len() as u32)
    }
}
