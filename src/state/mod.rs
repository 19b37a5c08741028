//! Reducer for the project → canvas → item tree.
//!
//! Every transition clones the current tree, edits the clone and hands it back;
//! an action whose preconditions fail yields no new state at all.

use crate::model::template;
use crate::model::{AppState, Canvas, CanvasType, Language, Project};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

pub mod store;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddProject {
        name: String,
    },
    SelectProject {
        project_id: Option<String>,
    },
    UpdateProjectName {
        project_id: String,
        name: String,
    },
    DeleteProject {
        project_id: String,
    },
    AddCanvas {
        name: String,
        canvas_type: CanvasType,
    },
    SelectCanvas {
        canvas_id: Option<String>,
    },
    UpdateCanvasName {
        canvas_id: String,
        name: String,
    },
    DeleteCanvas {
        canvas_id: String,
    },
    UpdateCanvasItem {
        item_id: String,
        content: String,
    },
    SetLanguage {
        language: Language,
    },
    /// Replaces the whole tree, e.g. after re-reading the durable slot.
    Hydrate(Box<AppState>),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddProject { .. } => "add_project",
            Self::SelectProject { .. } => "select_project",
            Self::UpdateProjectName { .. } => "update_project_name",
            Self::DeleteProject { .. } => "delete_project",
            Self::AddCanvas { .. } => "add_canvas",
            Self::SelectCanvas { .. } => "select_canvas",
            Self::UpdateCanvasName { .. } => "update_canvas_name",
            Self::DeleteCanvas { .. } => "delete_canvas",
            Self::UpdateCanvasItem { .. } => "update_canvas_item",
            Self::SetLanguage { .. } => "set_language",
            Self::Hydrate(_) => "hydrate",
        }
    }
}

/// Next state for `action`, or a copy of `state` when the action does not apply.
/// The store goes through [`apply`] directly since it needs to know about
/// rejection; this form drives the engine in tests.
#[cfg(test)]
pub fn reduce(state: &AppState, action: Action) -> AppState {
    apply(state, action, Utc::now()).unwrap_or_else(|| state.clone())
}

/// Applies `action` at time `now`. `None` means the action was rejected and
/// `state` stands.
pub fn apply(state: &AppState, action: Action, now: DateTime<Utc>) -> Option<AppState> {
    match action {
        Action::AddProject { name } => {
            let name = clean_name(&name)?;
            let project = Project {
                id: Uuid::new_v4().to_string(),
                name,
                canvases: Vec::new(),
                created_at: now,
            };
            let mut next = state.clone();
            next.current_project_id = Some(project.id.clone());
            next.current_canvas_id = None;
            next.projects.push(project);
            Some(next)
        }
        Action::SelectProject { project_id } => {
            if let Some(project_id) = project_id.as_deref() {
                state.find_project(project_id)?;
            }
            let mut next = state.clone();
            next.current_project_id = project_id;
            next.current_canvas_id = None;
            Some(next)
        }
        Action::UpdateProjectName { project_id, name } => {
            let name = clean_name(&name)?;
            let index = project_index(state, &project_id)?;
            let mut next = state.clone();
            next.projects[index].name = name;
            Some(next)
        }
        Action::DeleteProject { project_id } => {
            let index = project_index(state, &project_id)?;
            let mut next = state.clone();
            next.projects.remove(index);
            if state.current_project_id.as_deref() == Some(project_id.as_str()) {
                next.current_project_id = None;
                next.current_canvas_id = None;
            }
            Some(next)
        }
        Action::AddCanvas { name, canvas_type } => {
            let project_index = current_project_index(state)?;
            let name = clean_name(&name)?;
            let canvas = Canvas {
                id: Uuid::new_v4().to_string(),
                name,
                canvas_type,
                items: template::instantiate(canvas_type),
                created_at: now,
                updated_at: now,
            };
            let mut next = state.clone();
            next.current_canvas_id = Some(canvas.id.clone());
            next.projects[project_index].canvases.push(canvas);
            Some(next)
        }
        Action::SelectCanvas { canvas_id } => {
            if let Some(canvas_id) = canvas_id.as_deref() {
                state.current_project()?.canvas(canvas_id)?;
            }
            let mut next = state.clone();
            next.current_canvas_id = canvas_id;
            Some(next)
        }
        Action::UpdateCanvasName { canvas_id, name } => {
            let name = clean_name(&name)?;
            let (project_index, canvas_index) = current_canvas_index(state, &canvas_id)?;
            let mut next = state.clone();
            next.projects[project_index].canvases[canvas_index].name = name;
            Some(next)
        }
        Action::DeleteCanvas { canvas_id } => {
            let (project_index, canvas_index) = current_canvas_index(state, &canvas_id)?;
            let mut next = state.clone();
            next.projects[project_index].canvases.remove(canvas_index);
            if state.current_canvas_id.as_deref() == Some(canvas_id.as_str()) {
                next.current_canvas_id = None;
            }
            Some(next)
        }
        Action::UpdateCanvasItem { item_id, content } => {
            let selected_canvas = state.current_canvas_id.as_deref()?;
            let (project_index, canvas_index) = current_canvas_index(state, selected_canvas)?;
            let item_index = state.projects[project_index].canvases[canvas_index]
                .items
                .iter()
                .position(|item| item.id == item_id)?;

            let mut next = state.clone();
            let canvas = &mut next.projects[project_index].canvases[canvas_index];
            canvas.items[item_index].content = content;
            canvas.updated_at = advance(canvas.updated_at, now);
            Some(next)
        }
        Action::SetLanguage { language } => {
            let mut next = state.clone();
            next.language = language;
            Some(next)
        }
        Action::Hydrate(loaded) => Some(loaded.normalized()),
    }
}

fn clean_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn project_index(state: &AppState, project_id: &str) -> Option<usize> {
    state
        .projects
        .iter()
        .position(|project| project.id == project_id)
}

fn current_project_index(state: &AppState) -> Option<usize> {
    project_index(state, state.current_project_id.as_deref()?)
}

fn current_canvas_index(state: &AppState, canvas_id: &str) -> Option<(usize, usize)> {
    let project_index = current_project_index(state)?;
    let canvas_index = state.projects[project_index]
        .canvases
        .iter()
        .position(|canvas| canvas.id == canvas_id)?;
    Some((project_index, canvas_index))
}

/// `updatedAt` never stands still or goes backwards, even when two edits land
/// inside one clock tick.
fn advance(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}
