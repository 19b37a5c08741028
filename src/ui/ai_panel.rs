use super::{FrameOutput, ViewState};
use crate::ai::conversation::{Conversation, Sender};
use crate::i18n::Translator;
use crate::theme::Theme;
use eframe::egui::{self, RichText, ScrollArea};

pub fn show(
    ctx: &egui::Context,
    theme: &Theme,
    t: &Translator,
    conversation: &Conversation,
    view: &mut ViewState,
    out: &mut FrameOutput,
) {
    egui::SidePanel::right("ai_panel")
        .resizable(true)
        .default_width(360.0)
        .min_width(280.0)
        .frame(egui::Frame::new().fill(theme.surface_muted))
        .show(ctx, |ui| {
            egui::TopBottomPanel::top("ai_panel_header")
                .frame(theme.composer_frame())
                .show_inside(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.strong(t.t("aiAssistant"));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✖").on_hover_text(t.t("close")).clicked() {
                                view.ai_panel_open = false;
                            }
                        });
                    });
                });

            egui::TopBottomPanel::bottom("ai_panel_composer")
                .frame(theme.composer_frame())
                .show_inside(ui, |ui| composer(ui, theme, t, conversation, view, out));

            egui::CentralPanel::default()
                .frame(egui::Frame::new().inner_margin(egui::Margin::same(theme.spacing as i8)))
                .show_inside(ui, |ui| transcript(ui, theme, t, conversation));
        });
}

fn transcript(ui: &mut egui::Ui, theme: &Theme, t: &Translator, conversation: &Conversation) {
    ScrollArea::vertical()
        .id_salt("ai_transcript")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            let bubble_width = ui.available_width() * 0.85;
            for message in conversation.messages() {
                let from_user = message.sender == Sender::User;
                let layout = if from_user {
                    egui::Layout::right_to_left(egui::Align::TOP)
                } else {
                    egui::Layout::left_to_right(egui::Align::TOP)
                };
                ui.with_layout(layout, |ui| {
                    ui.set_max_width(bubble_width.max(120.0));
                    theme.bubble_frame(from_user).show(ui, |ui| {
                        let text = RichText::new(message.text.as_str());
                        let text = if from_user {
                            text.color(theme.text_on_accent)
                        } else {
                            text
                        };
                        ui.add(egui::Label::new(text).wrap());
                    });
                });
            }

            if conversation.is_busy() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new(t.t("aiThinking")).color(theme.text_muted));
                });
            }
        });
}

fn composer(
    ui: &mut egui::Ui,
    theme: &Theme,
    t: &Translator,
    conversation: &Conversation,
    view: &mut ViewState,
    out: &mut FrameOutput,
) {
    let input_enabled = !conversation.is_busy();
    let mut send_now = false;
    ui.horizontal(|ui| {
        let send_width = 72.0;
        let response = ui.add_enabled(
            input_enabled,
            egui::TextEdit::singleline(&mut view.chat_input)
                .hint_text(t.t("askYourQuestion"))
                .desired_width((ui.available_width() - send_width).max(80.0)),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send_now = true;
        }

        let clicked = ui
            .add_enabled(
                input_enabled && !view.chat_input.trim().is_empty(),
                theme.primary_button(t.t("send")),
            )
            .clicked();
        send_now |= clicked;
    });

    if send_now && input_enabled && !view.chat_input.trim().is_empty() {
        out.question = Some(std::mem::take(&mut view.chat_input));
    }
}
