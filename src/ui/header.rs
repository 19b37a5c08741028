use super::{FrameOutput, ViewState};
use crate::i18n::Translator;
use crate::model::{AppState, Language};
use crate::search::{SearchIndex, SearchTarget};
use crate::state::Action;
use crate::theme::Theme;
use eframe::egui::{self, RichText};
use std::time::Instant;

const MAX_SEARCH_RESULTS: usize = 8;

pub fn show(
    ctx: &egui::Context,
    theme: &Theme,
    state: &AppState,
    t: &Translator,
    view: &mut ViewState,
    search: &SearchIndex,
    out: &mut FrameOutput,
) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let toggle_hint = if view.sidebar_open {
                t.t("collapseSidebar")
            } else {
                t.t("expandSidebar")
            };
            if ui.button("☰").on_hover_text(toggle_hint).clicked() {
                view.sidebar_open = !view.sidebar_open;
            }

            ui.strong(t.t("appTitle"));
            if let Some(project) = state.current_project() {
                ui.separator();
                ui.label(RichText::new(&project.name).color(theme.text_muted));
                if let Some(canvas) = state.current_canvas() {
                    ui.label(RichText::new("/").color(theme.text_muted));
                    ui.label(canvas.name.as_str());
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let ai_label = RichText::new(t.t("aiAssistant"));
                if ui
                    .selectable_label(view.ai_panel_open, ai_label)
                    .clicked()
                {
                    view.ai_panel_open = !view.ai_panel_open;
                }

                if ui.button(t.t("reload")).clicked() {
                    out.reload_requested = true;
                }

                let flashing = view
                    .saved_until
                    .is_some_and(|until| Instant::now() < until);
                if flashing {
                    ui.add_enabled(
                        false,
                        egui::Button::new(RichText::new(t.t("saved")).color(theme.success)),
                    );
                } else if ui.add(theme.primary_button(t.t("saveChanges"))).clicked() {
                    out.save_requested = true;
                }
                if view.save_failed {
                    ui.label(RichText::new(t.t("saveFailed")).color(theme.danger));
                }

                language_selector(ui, t, out);

                ui.add(
                    egui::TextEdit::singleline(&mut view.search_query)
                        .hint_text(t.t("searchPlaceholder"))
                        .desired_width(240.0),
                );
            });
        });

        search_results(ui, theme, t, view, search, out);
        ui.add_space(4.0);
    });
}

fn language_selector(ui: &mut egui::Ui, t: &Translator, out: &mut FrameOutput) {
    let current = t.language();
    let mut selected = current;
    egui::ComboBox::from_id_salt("language_selector")
        .selected_text(t.t(current.name_key()))
        .show_ui(ui, |ui| {
            for language in Language::ALL {
                ui.selectable_value(&mut selected, language, t.t(language.name_key()));
            }
        })
        .response
        .on_hover_text(t.t("language"));

    if selected != current {
        out.actions.push(Action::SetLanguage { language: selected });
    }
}

fn search_results(
    ui: &mut egui::Ui,
    theme: &Theme,
    t: &Translator,
    view: &mut ViewState,
    search: &SearchIndex,
    out: &mut FrameOutput,
) {
    if view.search_query.trim().is_empty() {
        return;
    }

    let results = search.query(&view.search_query);
    ui.separator();
    if results.is_empty() {
        ui.label(RichText::new("-").color(theme.text_muted));
        return;
    }

    let mut picked = None;
    for entry in results.into_iter().take(MAX_SEARCH_RESULTS) {
        let detail = match &entry.target {
            SearchTarget::Project => t.t("project").to_string(),
            SearchTarget::Canvas {
                project_name,
                canvas_type,
                ..
            } => format!("{} · {} · {}", t.t("canvas"), canvas_type, project_name),
        };
        ui.horizontal(|ui| {
            if ui.link(entry.name.as_str()).clicked() {
                picked = Some(entry.selection_actions());
            }
            ui.label(RichText::new(detail).small().color(theme.text_muted));
        });
    }

    if let Some(actions) = picked {
        out.actions.extend(actions);
        view.search_query.clear();
    }
}
