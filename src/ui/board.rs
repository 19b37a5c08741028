use super::{Dialog, ViewState};
use crate::i18n::Translator;
use crate::model::template::board_layout;
use crate::model::{AppState, Canvas, CanvasItem};
use crate::text::plain_text;
use crate::theme::Theme;
use eframe::egui::{self, RichText, ScrollArea};

const PREVIEW_CHARS: usize = 280;

pub fn show(
    ctx: &egui::Context,
    theme: &Theme,
    state: &AppState,
    t: &Translator,
    view: &mut ViewState,
) {
    egui::CentralPanel::default()
        .frame(theme.page_frame())
        .show(ctx, |ui| {
            let Some(project) = state.current_project() else {
                empty_notice(ui, theme, t.t("noProjectSelected"), t.t("selectOrCreateProject"));
                return;
            };
            let Some(canvas) = state.current_canvas() else {
                empty_notice(ui, theme, &project.name, t.t("selectCanvasToView"));
                return;
            };

            ui.horizontal(|ui| {
                ui.heading(canvas.name.as_str());
                ui.label(
                    RichText::new(canvas.canvas_type.display_name()).color(theme.text_muted),
                );
            });
            ui.add_space(theme.spacing / 2.0);

            ScrollArea::vertical()
                .id_salt("canvas_board")
                .auto_shrink([false, false])
                .show(ui, |ui| board(ui, theme, canvas, t, view));
        });
}

fn empty_notice(ui: &mut egui::Ui, theme: &Theme, title: &str, body: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.heading(title);
        ui.label(RichText::new(body).color(theme.text_muted));
    });
}

fn board(ui: &mut egui::Ui, theme: &Theme, canvas: &Canvas, t: &Translator, view: &mut ViewState) {
    for row in board_layout(canvas.canvas_type) {
        ui.columns(row.len(), |columns| {
            for (column, stack) in columns.iter_mut().zip(row.iter()) {
                for &index in stack.iter() {
                    if let Some(item) = canvas.items.get(index) {
                        if card(column, theme, item, t) {
                            view.dialog = Dialog::EditItem {
                                item_id: item.id.clone(),
                                draft: item.content.clone(),
                            };
                        }
                    }
                }
            }
        });
        ui.add_space(theme.spacing / 2.0);
    }
}

/// Renders one section card; returns true when its edit control was clicked.
fn card(ui: &mut egui::Ui, theme: &Theme, item: &CanvasItem, t: &Translator) -> bool {
    let mut edit = false;
    theme.card_frame().show(ui, |ui| {
        ui.set_min_height(theme.card_min_height);
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.strong(t.t(&item.title_key));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                edit = ui.small_button(t.t("edit")).clicked();
            });
        });
        ui.separator();

        let preview = preview_text(&item.content);
        if preview.is_empty() {
            ui.label(
                RichText::new(t.t(&item.placeholder_key))
                    .italics()
                    .color(theme.text_muted),
            );
        } else {
            ui.label(preview);
        }
    });
    edit
}

fn preview_text(content: &str) -> String {
    let text = plain_text(content);
    let text = text.trim();
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(PREVIEW_CHARS).collect();
    clipped.push('…');
    clipped
}
