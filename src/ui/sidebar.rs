use super::{Dialog, FrameOutput, ViewState};
use crate::i18n::Translator;
use crate::model::{AppState, CanvasType};
use crate::state::Action;
use crate::theme::Theme;
use eframe::egui::{self, RichText, ScrollArea};

pub fn show(
    ctx: &egui::Context,
    theme: &Theme,
    state: &AppState,
    t: &Translator,
    view: &mut ViewState,
    diagnostics: &[String],
    out: &mut FrameOutput,
) {
    egui::SidePanel::left("sidebar")
        .resizable(true)
        .default_width(260.0)
        .min_width(200.0)
        .show(ctx, |ui| {
            ui.add_space(theme.spacing / 2.0);
            section_heading(ui, t.t("projects"), t.t("newProject"), || {
                view.dialog = Dialog::NewProject {
                    name: String::new(),
                };
            });

            ScrollArea::vertical()
                .id_salt("sidebar_tree")
                .max_height((ui.available_height() - 140.0).max(160.0))
                .show(ui, |ui| {
                    project_list(ui, theme, state, t, view, out);
                    if let Some(project) = state.current_project() {
                        ui.separator();
                        section_heading(ui, t.t("canvases"), t.t("newCanvas"), || {
                            view.dialog = Dialog::NewCanvas {
                                name: String::new(),
                                canvas_type: CanvasType::Bmc,
                            };
                        });
                        canvas_list(ui, theme, state, t, view, out);
                        if project.canvases.is_empty() {
                            ui.label(RichText::new(t.t("selectCanvasToView")).color(theme.text_muted));
                        }
                    }
                });

            ui.separator();
            egui::CollapsingHeader::new(t.t("diagnostics"))
                .default_open(false)
                .show(ui, |ui| {
                    ScrollArea::vertical()
                        .id_salt("diagnostics_log")
                        .max_height(90.0)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for entry in diagnostics {
                                ui.label(RichText::new(entry.as_str()).small());
                            }
                        });
                });
        });
}

fn section_heading(ui: &mut egui::Ui, title: &str, add_hint: &str, on_add: impl FnOnce()) {
    ui.horizontal(|ui| {
        ui.strong(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("+").on_hover_text(add_hint).clicked() {
                on_add();
            }
        });
    });
}

fn project_list(
    ui: &mut egui::Ui,
    theme: &Theme,
    state: &AppState,
    t: &Translator,
    view: &mut ViewState,
    out: &mut FrameOutput,
) {
    for project in &state.projects {
        let selected = state.current_project_id.as_deref() == Some(project.id.as_str());
        let (select, edit, delete) = tree_row(ui, theme, t, selected, &project.name, None);
        if select && !selected {
            out.actions.push(Action::SelectProject {
                project_id: Some(project.id.clone()),
            });
        }
        if edit {
            view.dialog = Dialog::RenameProject {
                project_id: project.id.clone(),
                name: project.name.clone(),
            };
        }
        if delete {
            view.dialog = Dialog::DeleteProject {
                project_id: project.id.clone(),
                name: project.name.clone(),
            };
        }
    }
}

fn canvas_list(
    ui: &mut egui::Ui,
    theme: &Theme,
    state: &AppState,
    t: &Translator,
    view: &mut ViewState,
    out: &mut FrameOutput,
) {
    let Some(project) = state.current_project() else {
        return;
    };
    for canvas in &project.canvases {
        let selected = state.current_canvas_id.as_deref() == Some(canvas.id.as_str());
        let (select, edit, delete) = tree_row(
            ui,
            theme,
            t,
            selected,
            &canvas.name,
            Some(canvas.canvas_type.display_name()),
        );
        if select && !selected {
            out.actions.push(Action::SelectCanvas {
                canvas_id: Some(canvas.id.clone()),
            });
        }
        if edit {
            view.dialog = Dialog::RenameCanvas {
                canvas_id: canvas.id.clone(),
                name: canvas.name.clone(),
            };
        }
        if delete {
            view.dialog = Dialog::DeleteCanvas {
                canvas_id: canvas.id.clone(),
                name: canvas.name.clone(),
            };
        }
    }
}

/// One selectable row with edit and delete controls; returns which were clicked.
fn tree_row(
    ui: &mut egui::Ui,
    theme: &Theme,
    t: &Translator,
    selected: bool,
    name: &str,
    detail: Option<&str>,
) -> (bool, bool, bool) {
    let mut clicked = (false, false, false);
    ui.horizontal(|ui| {
        clicked.0 = ui.selectable_label(selected, name).clicked();
        if let Some(detail) = detail {
            ui.label(RichText::new(detail).small().color(theme.text_muted));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            clicked.2 = ui
                .small_button(RichText::new("✖").color(theme.danger))
                .on_hover_text(t.t("delete"))
                .clicked();
            clicked.1 = ui.small_button("✏").on_hover_text(t.t("edit")).clicked();
        });
    });
    clicked
}
