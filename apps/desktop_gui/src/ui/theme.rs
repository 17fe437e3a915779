//! Fixed dark theme shared by every page.

use std::collections::BTreeMap;

use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Backgrounds:
    pub app_background: egui::Color32,
    pub panel_background: egui::Color32,
    pub card_background: egui::Color32,
    pub card_hover: egui::Color32,

    // Text:
    pub title_text: egui::Color32,
    pub body_text: egui::Color32,
    pub muted_text: egui::Color32,
    pub hint_text: egui::Color32,

    // Accent and strokes:
    pub accent: egui::Color32,
    pub on_accent_text: egui::Color32,
    pub stroke: egui::Color32,
    pub stroke_active: egui::Color32,

    // Outcome banners:
    pub success_fill: egui::Color32,
    pub success_stroke: egui::Color32,
    pub error_fill: egui::Color32,
    pub error_stroke: egui::Color32,
}

pub fn palette() -> Palette {
    Palette {
        // Backgrounds:
        app_background: egui::Color32::from_rgb(15, 23, 42),
        panel_background: egui::Color32::from_rgb(11, 17, 32),
        card_background: egui::Color32::from_rgb(30, 41, 59),
        card_hover: egui::Color32::from_rgb(51, 65, 85),
        // Text:
        title_text: egui::Color32::from_rgb(241, 245, 249),
        body_text: egui::Color32::from_rgb(203, 213, 225),
        muted_text: egui::Color32::from_rgb(148, 163, 184),
        hint_text: egui::Color32::from_rgb(100, 116, 139),
        // Accent and strokes:
        accent: egui::Color32::from_rgb(74, 222, 128),
        on_accent_text: egui::Color32::from_rgb(15, 23, 42),
        stroke: egui::Color32::from_rgb(51, 65, 85),
        stroke_active: egui::Color32::from_rgb(100, 116, 139),
        // Outcome banners:
        success_fill: egui::Color32::from_rgb(22, 78, 49),
        success_stroke: egui::Color32::from_rgb(74, 222, 128),
        error_fill: egui::Color32::from_rgb(111, 53, 53),
        error_stroke: egui::Color32::from_rgb(175, 96, 96),
    }
}

pub fn lighten(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

fn visuals(palette: &Palette) -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = None;
    visuals.window_fill = palette.panel_background;
    visuals.panel_fill = palette.app_background;
    visuals.extreme_bg_color = palette.card_background;
    visuals.faint_bg_color = lighten(palette.app_background, 0.04);

    visuals.hyperlink_color = palette.accent;
    visuals.window_corner_radius = egui::CornerRadius::same(10);
    visuals.menu_corner_radius = egui::CornerRadius::same(8);
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.55);
    visuals.widgets.active.bg_fill = palette.accent;
    visuals.widgets.hovered.bg_fill = palette.accent.gamma_multiply(0.85);

    visuals.window_stroke = egui::Stroke::new(1.0, palette.stroke);
    visuals.widgets.noninteractive.bg_fill = palette.panel_background;
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.stroke);
    visuals.widgets.inactive.bg_fill = palette.card_background;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.stroke);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.stroke_active);
    visuals
}

fn text_styles() -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    if let Some(font) = styles.get_mut(&egui::TextStyle::Heading) {
        font.size = 24.0;
    }
    styles
}

pub fn apply(ctx: &egui::Context) {
    let palette = palette();
    let mut style = (*ctx.style()).clone();
    style.visuals = visuals(&palette);
    style.text_styles = text_styles();

    // Make text inputs reliably clickable and visible:
    style.visuals.widgets.inactive.bg_stroke =
        egui::Stroke::new(1.0, style.visuals.widgets.noninteractive.bg_stroke.color);
    style.visuals.widgets.hovered.bg_stroke =
        egui::Stroke::new(1.0, style.visuals.widgets.hovered.bg_stroke.color);
    style.visuals.widgets.active.bg_stroke =
        egui::Stroke::new(1.2, style.visuals.selection.bg_fill.gamma_multiply(0.9));

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);
    ctx.set_style(style);
}
