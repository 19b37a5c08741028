pub mod ai_panel;
pub mod board;
pub mod dialogs;
pub mod header;
pub mod sidebar;

use crate::model::{AppState, CanvasType};
use crate::state::Action;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    None,
    NewProject {
        name: String,
    },
    RenameProject {
        project_id: String,
        name: String,
    },
    DeleteProject {
        project_id: String,
        name: String,
    },
    NewCanvas {
        name: String,
        canvas_type: CanvasType,
    },
    RenameCanvas {
        canvas_id: String,
        name: String,
    },
    DeleteCanvas {
        canvas_id: String,
        name: String,
    },
    EditItem {
        item_id: String,
        draft: String,
    },
}

impl Dialog {
    /// The action a confirmed dialog dispatches.
    pub fn confirm_action(&self) -> Option<Action> {
        match self {
            Self::None => None,
            Self::NewProject { name } => Some(Action::AddProject {
                name: name.trim().to_string(),
            }),
            Self::RenameProject { project_id, name } => Some(Action::UpdateProjectName {
                project_id: project_id.clone(),
                name: name.trim().to_string(),
            }),
            Self::DeleteProject { project_id, .. } => Some(Action::DeleteProject {
                project_id: project_id.clone(),
            }),
            Self::NewCanvas { name, canvas_type } => Some(Action::AddCanvas {
                name: name.trim().to_string(),
                canvas_type: *canvas_type,
            }),
            Self::RenameCanvas { canvas_id, name } => Some(Action::UpdateCanvasName {
                canvas_id: canvas_id.clone(),
                name: name.trim().to_string(),
            }),
            Self::DeleteCanvas { canvas_id, .. } => Some(Action::DeleteCanvas {
                canvas_id: canvas_id.clone(),
            }),
            Self::EditItem { item_id, draft } => Some(Action::UpdateCanvasItem {
                item_id: item_id.clone(),
                content: draft.clone(),
            }),
        }
    }

    /// Whether the entity this dialog works on still exists in `state`.
    pub fn is_valid_for(&self, state: &AppState) -> bool {
        match self {
            Self::None | Self::NewProject { .. } => true,
            Self::RenameProject { project_id, .. } | Self::DeleteProject { project_id, .. } => {
                state.find_project(project_id).is_some()
            }
            Self::NewCanvas { .. } => state.current_project().is_some(),
            Self::RenameCanvas { canvas_id, .. } | Self::DeleteCanvas { canvas_id, .. } => state
                .find_canvas(canvas_id)
                .is_some_and(|(project, _)| {
                    state.current_project_id.as_deref() == Some(project.id.as_str())
                }),
            Self::EditItem { item_id, .. } => state
                .current_canvas()
                .and_then(|canvas| canvas.item(item_id))
                .is_some(),
        }
    }
}

pub struct ViewState {
    pub sidebar_open: bool,
    pub ai_panel_open: bool,
    pub dialog: Dialog,
    pub search_query: String,
    pub chat_input: String,
    pub saved_until: Option<Instant>,
    pub save_failed: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            ai_panel_open: false,
            dialog: Dialog::None,
            search_query: String::new(),
            chat_input: String::new(),
            saved_until: None,
            save_failed: false,
        }
    }
}

/// What the views asked for during one frame; applied once rendering is done.
#[derive(Debug, Default)]
pub struct FrameOutput {
    pub actions: Vec<Action>,
    pub question: Option<String>,
    pub save_requested: bool,
    pub reload_requested: bool,
}

#[cfg(test)]
mod tests {
    use super::Dialog;
    use crate::model::{AppState, CanvasType};
    use crate::state::{reduce, Action};

    #[test]
    fn confirm_trims_names() {
        let dialog = Dialog::NewCanvas {
            name: "  Market  ".into(),
            canvas_type: CanvasType::Pest,
        };
        assert_eq!(
            dialog.confirm_action(),
            Some(Action::AddCanvas {
                name: "Market".into(),
                canvas_type: CanvasType::Pest,
            })
        );
        assert_eq!(Dialog::None.confirm_action(), None);
    }

    #[test]
    fn edit_dialog_keeps_content_verbatim() {
        let dialog = Dialog::EditItem {
            item_id: "i-1".into(),
            draft: "  <p>kept</p>\n".into(),
        };
        assert_eq!(
            dialog.confirm_action(),
            Some(Action::UpdateCanvasItem {
                item_id: "i-1".into(),
                content: "  <p>kept</p>\n".into(),
            })
        );
    }

    #[test]
    fn dialogs_on_deleted_entities_become_invalid() {
        let state = reduce(&AppState::default(), Action::AddProject { name: "Acme".into() });
        let state = reduce(
            &state,
            Action::AddCanvas {
                name: "Q1".into(),
                canvas_type: CanvasType::Stp,
            },
        );
        let canvas = state.current_canvas().expect("canvas").clone();
        let edit = Dialog::EditItem {
            item_id: canvas.items[0].id.clone(),
            draft: String::new(),
        };
        let rename = Dialog::RenameCanvas {
            canvas_id: canvas.id.clone(),
            name: "Q2".into(),
        };
        assert!(edit.is_valid_for(&state));
        assert!(rename.is_valid_for(&state));

        let other = reduce(&state, Action::AddProject { name: "Globex".into() });
        assert!(!rename.is_valid_for(&other));
        assert!(!edit.is_valid_for(&other));

        let state = reduce(&state, Action::DeleteCanvas { canvas_id: canvas.id });
        assert!(!edit.is_valid_for(&state));
        assert!(!rename.is_valid_for(&state));
        assert!(Dialog::NewProject { name: String::new() }.is_valid_for(&state));
    }
}
