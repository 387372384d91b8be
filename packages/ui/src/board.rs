//! Kanban board logic, independent of rendering.
//!
//! The project view keeps its tasks in a flat list and derives the three
//! columns from it on every render. Mutating controls are only offered to
//! the project owner, and a task can only move one step forward.

use api::{Member, Project, Task, TaskStatus, User};

/// The project a board is showing, with the tasks and members it edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedBoard {
    pub project: Option<Project>,
    pub tasks: Vec<Task>,
    pub members: Vec<Member>,
}

impl LoadedBoard {
    pub fn from_project(project: Project) -> Self {
        Self {
            tasks: project.tasks.clone(),
            members: project.members.clone(),
            project: Some(project),
        }
    }

    pub fn project_id(&self) -> Option<i64> {
        self.project.as_ref().map(|p| p.id)
    }

    /// Whether the board is showing `project_id`.
    pub fn shows(&self, project_id: i64) -> bool {
        self.project_id() == Some(project_id)
    }

    /// Drop everything unless the board already shows `project_id`.
    pub fn retain_for(&mut self, project_id: i64) {
        if !self.shows(project_id) {
            *self = Self::default();
        }
    }
}

/// Whether `user` may see the task and member controls of `project`.
pub fn can_manage(user: Option<&User>, project: Option<&Project>) -> bool {
    match (user, project) {
        (Some(user), Some(project)) => project.is_owned_by(user.id),
        _ => false,
    }
}

/// Tasks grouped by status, one entry per column in workflow order.
/// Columns keep the order tasks have in `tasks`.
pub fn columns(tasks: &[Task]) -> Vec<(TaskStatus, Vec<Task>)> {
    TaskStatus::ALL
        .iter()
        .map(|status| {
            let column = tasks.iter().filter(|t| t.status == *status).cloned().collect();
            (*status, column)
        })
        .collect()
}

/// Label of the move button for a task, or `None` when it is done.
pub fn advance_label(task: &Task) -> Option<String> {
    task.status.next().map(|next| format!("Move to {next} →"))
}

/// Replace the task with the same id. Returns whether one was found.
pub fn replace_task(tasks: &mut [Task], updated: Task) -> bool {
    match tasks.iter_mut().find(|t| t.id == updated.id) {
        Some(existing) => {
            *existing = updated;
            true
        }
        None => false,
    }
}

/// Drop the task with `id`. Returns whether one was removed.
pub fn remove_task(tasks: &mut Vec<Task>, id: i64) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}

/// Name of the member a task is assigned to.
pub fn assignee_name(members: &[Member], task: &Task) -> Option<String> {
    let assignee = task.assignee_id?;
    Some(
        members
            .iter()
            .find(|m| m.account_id() == assignee)
            .map(|m| m.display_name())
            .unwrap_or_else(|| format!("User #{assignee}")),
    )
}
