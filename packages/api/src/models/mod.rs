//! Data models exchanged with the task management API.

mod payloads;
mod project;
mod task;
mod user;

pub use payloads::{
    Credentials, LoginResponse, MemberUpdate, NewMember, NewProject, NewTask, ProjectUpdate,
    Registration, TaskUpdate, UserUpdate,
};
pub use project::{Member, Project, ProjectRole};
pub use task::{Task, TaskStatus};
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
