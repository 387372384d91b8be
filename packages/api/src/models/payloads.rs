//! Request bodies and the login response.
//!
//! Update payloads skip `None` fields so the server only touches what the
//! caller set.

use serde::{Deserialize, Serialize};

use super::{ProjectRole, TaskStatus, User};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Registration {
    pub username: String,
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Registration {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Body of a successful `POST /users/login`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl LoginResponse {
    /// The identity the server issued the token for.
    pub fn user(&self) -> User {
        User {
            id: self.user_id,
            username: self.username.clone(),
            name: self.name.clone(),
            email: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewMember {
    pub user_id: i64,
    pub role: ProjectRole,
}

impl NewMember {
    pub fn member(user_id: i64) -> Self {
        Self {
            user_id,
            role: ProjectRole::Member,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MemberUpdate {
    pub role: ProjectRole,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub project_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
    pub status: TaskStatus,
}

impl NewTask {
    pub fn new(project_id: i64, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            project_id,
            assignee_id: None,
            status: TaskStatus::ToDo,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
}

impl TaskUpdate {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
