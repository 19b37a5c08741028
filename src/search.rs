use crate::model::{AppState, CanvasType};
use crate::state::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTarget {
    Project,
    Canvas {
        project_id: String,
        project_name: String,
        canvas_type: CanvasType,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub id: String,
    pub name: String,
    pub target: SearchTarget,
    folded_name: String,
}

impl SearchEntry {
    /// Actions that bring this entry on screen.
    pub fn selection_actions(&self) -> Vec<Action> {
        match &self.target {
            SearchTarget::Project => vec![Action::SelectProject {
                project_id: Some(self.id.clone()),
            }],
            SearchTarget::Canvas { project_id, .. } => vec![
                Action::SelectProject {
                    project_id: Some(project_id.clone()),
                },
                Action::SelectCanvas {
                    canvas_id: Some(self.id.clone()),
                },
            ],
        }
    }
}

/// Read-only name index over every project and canvas, in tree order.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn build(state: &AppState) -> Self {
        let mut entries = Vec::with_capacity(state.projects.len() + state.canvas_count());
        for project in &state.projects {
            entries.push(SearchEntry {
                id: project.id.clone(),
                name: project.name.clone(),
                target: SearchTarget::Project,
                folded_name: project.name.to_lowercase(),
            });
            for canvas in &project.canvases {
                entries.push(SearchEntry {
                    id: canvas.id.clone(),
                    name: canvas.name.clone(),
                    target: SearchTarget::Canvas {
                        project_id: project.id.clone(),
                        project_name: project.name.clone(),
                        canvas_type: canvas.canvas_type,
                    },
                    folded_name: canvas.name.to_lowercase(),
                });
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Case-insensitive substring match on names. A blank query matches nothing.
    pub fn query(&self, query: &str) -> Vec<&SearchEntry> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.folded_name.contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchIndex, SearchTarget};
    use crate::model::{AppState, CanvasType};
    use crate::state::{reduce, Action};

    fn sample_state() -> AppState {
        let mut state = AppState::default();
        let script = vec![
            Action::AddProject {
                name: "Acme Retail".into(),
            },
            Action::AddCanvas {
                name: "Retail SWOT".into(),
                canvas_type: CanvasType::Swot,
            },
            Action::AddProject {
                name: "Globex".into(),
            },
            Action::AddCanvas {
                name: "Market entry".into(),
                canvas_type: CanvasType::Stp,
            },
        ];
        for action in script {
            state = reduce(&state, action);
        }
        state
    }

    #[test]
    fn index_covers_projects_and_canvases() {
        let index = SearchIndex::build(&sample_state());
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let index = SearchIndex::build(&sample_state());
        let names: Vec<&str> = index
            .query("RETAIL")
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["Acme Retail", "Retail SWOT"]);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let index = SearchIndex::build(&sample_state());
        assert!(index.query("").is_empty());
        assert!(index.query("   ").is_empty());
    }

    #[test]
    fn canvas_hit_carries_parent_project() {
        let index = SearchIndex::build(&sample_state());
        let hits = index.query("market");
        assert_eq!(hits.len(), 1);
        match &hits[0].target {
            SearchTarget::Canvas {
                project_name,
                canvas_type,
                ..
            } => {
                assert_eq!(project_name, "Globex");
                assert_eq!(*canvas_type, CanvasType::Stp);
            }
            SearchTarget::Project => panic!("expected a canvas hit"),
        }
    }

    #[test]
    fn selecting_a_canvas_hit_switches_project_then_canvas() {
        let state = sample_state();
        let index = SearchIndex::build(&state);
        let hit = index.query("swot")[0].clone();

        let state = hit
            .selection_actions()
            .into_iter()
            .fold(state, |state, action| reduce(&state, action));
        let project = state.current_project().expect("project should be selected");
        assert_eq!(project.name, "Acme Retail");
        let canvas = state.current_canvas().expect("canvas should be selected");
        assert_eq!(canvas.name, "Retail SWOT");
    }

    #[test]
    fn selecting_a_project_hit_clears_canvas() {
        let state = sample_state();
        let index = SearchIndex::build(&state);
        let hit = index.query("acme")[0].clone();

        let state = hit
            .selection_actions()
            .into_iter()
            .fold(state, |state, action| reduce(&state, action));
        assert_eq!(state.current_project().map(|p| p.name.as_str()), Some("Acme Retail"));
        assert!(state.current_canvas_id.is_none());
    }
}
