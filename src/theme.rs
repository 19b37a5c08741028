use eframe::egui::{self, Color32, CornerRadius, FontId, Frame, Margin, Stroke, TextStyle};

#[derive(Debug, Clone)]
pub struct Theme {
    pub page: Color32,
    pub surface: Color32,
    pub surface_muted: Color32,
    pub border: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub danger: Color32,
    pub success: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub text_on_accent: Color32,
    pub user_bubble: Color32,
    pub ai_bubble: Color32,
    pub spacing: f32,
    pub radius: u8,
    pub card_min_height: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            page: Color32::from_rgb(0xF1, 0xF5, 0xF9),
            surface: Color32::WHITE,
            surface_muted: Color32::from_rgb(0xF8, 0xFA, 0xFC),
            border: Color32::from_rgb(0xE2, 0xE8, 0xF0),
            accent: Color32::from_rgb(0x4F, 0x46, 0xE5),
            accent_soft: Color32::from_rgb(0xE0, 0xE7, 0xFF),
            danger: Color32::from_rgb(0xDC, 0x26, 0x26),
            success: Color32::from_rgb(0x16, 0xA3, 0x4A),
            text_primary: Color32::from_rgb(0x0F, 0x17, 0x2A),
            text_muted: Color32::from_rgb(0x64, 0x74, 0x8B),
            text_on_accent: Color32::WHITE,
            user_bubble: Color32::from_rgb(0x4F, 0x46, 0xE5),
            ai_bubble: Color32::WHITE,
            spacing: 12.0,
            radius: 8,
            card_min_height: 140.0,
        }
    }
}

impl Theme {
    pub fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = self.surface;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.surface_muted;
        visuals.override_text_color = Some(self.text_primary);
        visuals.selection.bg_fill = self.accent_soft;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(self.radius);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(self.radius);
        visuals.widgets.active.corner_radius = CornerRadius::same(self.radius);
        visuals.window_corner_radius = CornerRadius::same(self.radius);
        visuals.window_stroke = Stroke::new(1.0, self.border);

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.text_styles.insert(TextStyle::Heading, FontId::proportional(18.0));
        style.text_styles.insert(TextStyle::Body, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Button, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Small, FontId::proportional(12.0));
        ctx.set_style(style);
    }

    pub fn page_frame(&self) -> Frame {
        Frame::new()
            .fill(self.page)
            .inner_margin(Margin::same(self.spacing as i8))
    }

    pub fn card_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface)
            .inner_margin(Margin::same(self.spacing as i8))
            .corner_radius(CornerRadius::same(self.radius))
            .stroke(Stroke::new(1.0, self.border))
    }

    pub fn bubble_frame(&self, from_user: bool) -> Frame {
        let (fill, stroke) = if from_user {
            (self.user_bubble, Stroke::NONE)
        } else {
            (self.ai_bubble, Stroke::new(1.0, self.border))
        };
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::symmetric(10, 8))
            .corner_radius(CornerRadius::same(self.radius))
            .stroke(stroke)
    }

    pub fn composer_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface)
            .inner_margin(Margin::symmetric(self.spacing as i8, 10))
            .stroke(Stroke::new(1.0, self.border))
    }

    pub fn primary_button(&self, label: &str) -> egui::Button<'static> {
        egui::Button::new(egui::RichText::new(label.to_string()).color(self.text_on_accent))
            .fill(self.accent)
    }

    pub fn danger_button(&self, label: &str) -> egui::Button<'static> {
        egui::Button::new(egui::RichText::new(label.to_string()).color(self.text_on_accent))
            .fill(self.danger)
    }
}
