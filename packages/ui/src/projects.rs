//! # Shared project collection
//!
//! [`ProjectCollection`] is the in-memory list of projects the dashboard
//! loaded, plus the project currently open in the detail view. It is a plain
//! container: nothing is persisted, and the dashboard rebuilds it from a full
//! fetch every time it is shown.
//!
//! | Operation | Effect on the list | Effect on the selection |
//! |-----------|--------------------|-------------------------|
//! | [`set_projects`](ProjectCollection::set_projects) | replaced | refreshed by id, or cleared if gone |
//! | [`add`](ProjectCollection::add) | appended, no dedup | unchanged |
//! | [`update`](ProjectCollection::update) | entries with the same id replaced | refreshed if it has the same id |
//! | [`remove`](ProjectCollection::remove) | entries with the id dropped | cleared if it has the id |
//!
//! `add` does not check for an existing id; callers only add what the server
//! just created.

use api::Project;
use dioxus::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCollection {
    projects: Vec<Project>,
    selected: Option<Project>,
}

impl ProjectCollection {
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn get(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Replace the whole list, e.g. after a fresh fetch.
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        if let Some(selected) = &self.selected {
            self.selected = self.get(selected.id).cloned();
        }
    }

    pub fn add(&mut self, project: Project) {
        self.projects.push(project);
    }

    pub fn update(&mut self, project: Project) {
        for existing in self.projects.iter_mut().filter(|p| p.id == project.id) {
            *existing = project.clone();
        }
        if self.selected.as_ref().is_some_and(|s| s.id == project.id) {
            self.selected = Some(project);
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.projects.retain(|p| p.id != id);
        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = None;
        }
    }

    pub fn select(&mut self, project: Option<Project>) {
        self.selected = project;
    }

    /// Forget everything, e.g. on logout.
    pub fn clear(&mut self) {
        self.projects.clear();
        self.selected = None;
    }
}

/// Get the shared project collection.
pub fn use_projects() -> Signal<ProjectCollection> {
    use_context::<Signal<ProjectCollection>>()
}

/// Provider component for the shared project collection.
#[component]
pub fn ProjectProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(ProjectCollection::default()));

    rsx! {
        {children}
    }
}
