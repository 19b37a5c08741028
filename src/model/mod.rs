use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod template;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh")]
    Zh,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Key of the language's own display name in the translation table.
    pub fn name_key(&self) -> &'static str {
        match self {
            Self::En => "english",
            Self::Zh => "traditionalChinese",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasType {
    #[serde(rename = "Business Model Canvas")]
    Bmc,
    #[serde(rename = "PEST Analysis")]
    Pest,
    #[serde(rename = "SWOT Analysis")]
    Swot,
    #[serde(rename = "STP Analysis")]
    Stp,
}

impl CanvasType {
    pub const ALL: [CanvasType; 4] = [
        CanvasType::Bmc,
        CanvasType::Pest,
        CanvasType::Swot,
        CanvasType::Stp,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bmc => "Business Model Canvas",
            Self::Pest => "PEST Analysis",
            Self::Swot => "SWOT Analysis",
            Self::Stp => "STP Analysis",
        }
    }
}

impl fmt::Display for CanvasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasItem {
    pub id: String,
    pub title_key: String,
    pub placeholder_key: String,
    pub guide_key: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Canvas {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub canvas_type: CanvasType,
    pub items: Vec<CanvasItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Canvas {
    pub fn item(&self, item_id: &str) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub canvases: Vec<Canvas>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn canvas(&self, canvas_id: &str) -> Option<&Canvas> {
        self.canvases.iter().find(|canvas| canvas.id == canvas_id)
    }
}

/// The whole persisted tree. Only ever replaced, never edited in place by views.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub projects: Vec<Project>,
    #[serde(default)]
    pub current_project_id: Option<String>,
    #[serde(default)]
    pub current_canvas_id: Option<String>,
    #[serde(default)]
    pub language: Language,
}

impl AppState {
    pub fn find_project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == project_id)
    }

    /// Global canvas lookup returning the owning project alongside.
    pub fn find_canvas(&self, canvas_id: &str) -> Option<(&Project, &Canvas)> {
        self.projects.iter().find_map(|project| {
            project
                .canvas(canvas_id)
                .map(|canvas| (project, canvas))
        })
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current_project_id
            .as_deref()
            .and_then(|project_id| self.find_project(project_id))
    }

    pub fn current_canvas(&self) -> Option<&Canvas> {
        let canvas_id = self.current_canvas_id.as_deref()?;
        self.current_project()?.canvas(canvas_id)
    }

    pub fn canvas_count(&self) -> usize {
        self.projects
            .iter()
            .map(|project| project.canvases.len())
            .sum()
    }

    /// Drops selections that point at nothing, so a loaded tree satisfies the
    /// selection invariants before any view reads it.
    pub fn normalized(mut self) -> Self {
        if self.current_project().is_none() {
            self.current_project_id = None;
        }
        if self.current_canvas().is_none() {
            self.current_canvas_id = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{AppState, Canvas, CanvasType, Language, Project};
    use chrono::Utc;

    fn project_with_canvas(project_id: &str, canvas_id: &str) -> Project {
        let now = Utc::now();
        Project {
            id: project_id.to_string(),
            name: format!("Project {project_id}"),
            canvases: vec![Canvas {
                id: canvas_id.to_string(),
                name: format!("Canvas {canvas_id}"),
                canvas_type: CanvasType::Swot,
                items: Vec::new(),
                created_at: now,
                updated_at: now,
            }],
            created_at: now,
        }
    }

    #[test]
    fn normalized_clears_dangling_selections() {
        let state = AppState {
            projects: vec![project_with_canvas("p1", "c1")],
            current_project_id: Some("missing".to_string()),
            current_canvas_id: Some("c1".to_string()),
            language: Language::En,
        }
        .normalized();

        assert!(state.current_project_id.is_none());
        assert!(state.current_canvas_id.is_none());
    }

    #[test]
    fn normalized_clears_canvas_from_other_project() {
        let state = AppState {
            projects: vec![
                project_with_canvas("p1", "c1"),
                project_with_canvas("p2", "c2"),
            ],
            current_project_id: Some("p1".to_string()),
            current_canvas_id: Some("c2".to_string()),
            language: Language::En,
        }
        .normalized();

        assert_eq!(state.current_project_id.as_deref(), Some("p1"));
        assert!(state.current_canvas_id.is_none());
    }

    #[test]
    fn find_canvas_searches_every_project() {
        let state = AppState {
            projects: vec![
                project_with_canvas("p1", "c1"),
                project_with_canvas("p2", "c2"),
            ],
            ..AppState::default()
        };

        let (project, canvas) = state.find_canvas("c2").expect("canvas should be found");
        assert_eq!(project.id, "p2");
        assert_eq!(canvas.id, "c2");
        assert_eq!(state.canvas_count(), 2);
    }

    #[test]
    fn serialized_state_uses_storage_field_names() {
        let state = AppState {
            projects: vec![project_with_canvas("p1", "c1")],
            current_project_id: Some("p1".to_string()),
            current_canvas_id: Some("c1".to_string()),
            language: Language::Zh,
        };

        let json = serde_json::to_value(&state).expect("state should serialize");
        assert_eq!(json["currentProjectId"], "p1");
        assert_eq!(json["currentCanvasId"], "c1");
        assert_eq!(json["language"], "zh");
        assert_eq!(json["projects"][0]["canvases"][0]["type"], "SWOT Analysis");
        assert!(json["projects"][0]["createdAt"].is_string());
    }
}
