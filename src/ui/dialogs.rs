use super::{Dialog, FrameOutput};
use crate::i18n::Translator;
use crate::model::{AppState, CanvasType};
use crate::text::guide_lines;
use crate::theme::Theme;
use eframe::egui::{self, RichText, ScrollArea};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Open,
    Cancel,
    Confirm,
}

pub fn show(
    ctx: &egui::Context,
    theme: &Theme,
    state: &AppState,
    t: &Translator,
    dialog: &mut Dialog,
    out: &mut FrameOutput,
) {
    let outcome = match dialog {
        Dialog::None => return,
        Dialog::NewProject { name } => name_form(
            ctx,
            theme,
            t,
            NameForm {
                title: t.t("newProject"),
                label: t.t("projectName"),
                hint: t.t("enterProjectName"),
                confirm: t.t("create"),
            },
            name,
            None,
        ),
        Dialog::RenameProject { name, .. } => name_form(
            ctx,
            theme,
            t,
            NameForm {
                title: t.t("editProject"),
                label: t.t("projectName"),
                hint: t.t("enterProjectName"),
                confirm: t.t("update"),
            },
            name,
            None,
        ),
        Dialog::NewCanvas { name, canvas_type } => name_form(
            ctx,
            theme,
            t,
            NameForm {
                title: t.t("newCanvas"),
                label: t.t("canvasName"),
                hint: t.t("enterCanvasName"),
                confirm: t.t("create"),
            },
            name,
            Some(canvas_type),
        ),
        Dialog::RenameCanvas { name, .. } => name_form(
            ctx,
            theme,
            t,
            NameForm {
                title: t.t("editCanvas"),
                label: t.t("canvasName"),
                hint: t.t("enterCanvasName"),
                confirm: t.t("update"),
            },
            name,
            None,
        ),
        Dialog::DeleteProject { name, .. } => confirm_delete(
            ctx,
            theme,
            t,
            t.t("deleteProject"),
            name,
            t.t("deleteProjectConfirm"),
        ),
        Dialog::DeleteCanvas { name, .. } => confirm_delete(
            ctx,
            theme,
            t,
            t.t("deleteCanvas"),
            name,
            t.t("deleteCanvasConfirm"),
        ),
        Dialog::EditItem { item_id, draft } => {
            let item_id = item_id.clone();
            item_editor(ctx, theme, state, t, &item_id, draft)
        }
    };

    match outcome {
        Outcome::Open => {}
        Outcome::Cancel => *dialog = Dialog::None,
        Outcome::Confirm => {
            if let Some(action) = dialog.confirm_action() {
                out.actions.push(action);
            }
            *dialog = Dialog::None;
        }
    }
}

struct NameForm<'a> {
    title: &'a str,
    label: &'a str,
    hint: &'a str,
    confirm: &'a str,
}

fn modal<R>(
    ctx: &egui::Context,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> Option<R> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, add_contents)
        .and_then(|response| response.inner)
}

fn name_form(
    ctx: &egui::Context,
    theme: &Theme,
    t: &Translator,
    form: NameForm<'_>,
    name: &mut String,
    canvas_type: Option<&mut CanvasType>,
) -> Outcome {
    let cancel_pressed = ctx.input(|input| input.key_pressed(egui::Key::Escape));
    let outcome = modal(ctx, form.title, |ui| {
        ui.set_min_width(360.0);
        ui.label(form.label);
        let response = ui.add(
            egui::TextEdit::singleline(name)
                .hint_text(form.hint)
                .desired_width(f32::INFINITY),
        );
        if !response.has_focus() && name.is_empty() {
            response.request_focus();
        }
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if let Some(canvas_type) = canvas_type {
            ui.add_space(4.0);
            ui.label(t.t("canvasType"));
            egui::ComboBox::from_id_salt("new_canvas_type")
                .selected_text(canvas_type.display_name())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for option in CanvasType::ALL {
                        ui.selectable_value(canvas_type, option, option.display_name());
                    }
                });
        }

        ui.add_space(theme.spacing / 2.0);
        let valid = !name.trim().is_empty();
        let mut outcome = Outcome::Open;
        ui.horizontal(|ui| {
            if ui.button(t.t("cancel")).clicked() {
                outcome = Outcome::Cancel;
            }
            if ui
                .add_enabled(valid, theme.primary_button(form.confirm))
                .clicked()
            {
                outcome = Outcome::Confirm;
            }
        });
        if submitted && valid {
            outcome = Outcome::Confirm;
        }
        outcome
    });

    match outcome {
        Some(outcome) if outcome != Outcome::Open => outcome,
        _ if cancel_pressed => Outcome::Cancel,
        _ => Outcome::Open,
    }
}

fn confirm_delete(
    ctx: &egui::Context,
    theme: &Theme,
    t: &Translator,
    title: &str,
    name: &str,
    warning: &str,
) -> Outcome {
    let cancel_pressed = ctx.input(|input| input.key_pressed(egui::Key::Escape));
    let outcome = modal(ctx, title, |ui| {
        ui.set_max_width(380.0);
        ui.strong(name);
        ui.label(RichText::new(warning).color(theme.text_muted));
        ui.add_space(theme.spacing / 2.0);

        let mut outcome = Outcome::Open;
        ui.horizontal(|ui| {
            if ui.button(t.t("cancel")).clicked() {
                outcome = Outcome::Cancel;
            }
            if ui.add(theme.danger_button(t.t("delete"))).clicked() {
                outcome = Outcome::Confirm;
            }
        });
        outcome
    });

    match outcome {
        Some(outcome) if outcome != Outcome::Open => outcome,
        _ if cancel_pressed => Outcome::Cancel,
        _ => Outcome::Open,
    }
}

fn item_editor(
    ctx: &egui::Context,
    theme: &Theme,
    state: &AppState,
    t: &Translator,
    item_id: &str,
    draft: &mut String,
) -> Outcome {
    let Some(item) = state
        .current_canvas()
        .and_then(|canvas| canvas.item(item_id))
    else {
        return Outcome::Cancel;
    };

    let title = format!("{}: {}", t.t("editItemTitle"), t.t(&item.title_key));
    let mut outcome = Outcome::Open;
    egui::Window::new(title)
        .id(egui::Id::new("item_editor"))
        .collapsible(false)
        .resizable(true)
        .default_size([820.0, 480.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.columns(2, |columns| {
                let [editor, guide] = columns else {
                    return;
                };
                ScrollArea::vertical()
                    .id_salt("item_editor_text")
                    .max_height(360.0)
                    .show(editor, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(draft)
                                .hint_text(t.t(&item.placeholder_key))
                                .desired_rows(16)
                                .desired_width(f32::INFINITY),
                        );
                    });

                guide.strong(t.t("guidedQuestions"));
                guide.separator();
                ScrollArea::vertical()
                    .id_salt("item_editor_guide")
                    .max_height(340.0)
                    .show(guide, |ui| {
                        for line in guide_lines(t.t(&item.guide_key)) {
                            ui.label(RichText::new(format!("• {line}")).color(theme.text_muted));
                        }
                    });
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button(t.t("cancel")).clicked() {
                    outcome = Outcome::Cancel;
                }
                if ui.add(theme.primary_button(t.t("save"))).clicked() {
                    outcome = Outcome::Confirm;
                }
            });
        });

    if outcome == Outcome::Open && ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
        Outcome::Cancel
    } else {
        outcome
    }
}
