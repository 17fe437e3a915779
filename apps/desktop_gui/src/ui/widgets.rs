//! Small presentation widgets shared across pages.

use eframe::egui;
use shared::domain::{KpiEntry, KpiIcon, Project};

use crate::ui::theme::Palette;

/// Glyphs for the closed KPI icon set. Unknown keys share the trend glyph so
/// new data never renders an empty tile.
pub fn kpi_glyph(icon: KpiIcon) -> &'static str {
    match icon {
        KpiIcon::Revenue => "💰",
        KpiIcon::Orders => "🧾",
        KpiIcon::Pizzas => "🍕",
        KpiIcon::Avg | KpiIcon::Unknown => "📈",
    }
}

pub fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(rect);
    add(&mut child);
}

pub fn icon_btn(icon: &str, color: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(icon).color(color))
        .min_size(egui::vec2(24.0, 24.0))
        .stroke(egui::Stroke::NONE)
        .fill(egui::Color32::TRANSPARENT)
}

pub fn category_pill(
    ui: &mut egui::Ui,
    palette: &Palette,
    label: &str,
    selected: bool,
) -> egui::Response {
    let text = if selected {
        egui::RichText::new(label).strong().color(palette.on_accent_text)
    } else {
        egui::RichText::new(label).color(palette.muted_text)
    };
    let mut pill = egui::Button::new(text)
        .corner_radius(egui::CornerRadius::same(14))
        .min_size(egui::vec2(0.0, 26.0));
    pill = if selected {
        pill.fill(palette.accent).stroke(egui::Stroke::NONE)
    } else {
        pill.fill(palette.card_background)
            .stroke(egui::Stroke::new(1.0, palette.stroke))
    };
    ui.add(pill)
}

pub fn tool_tag(ui: &mut egui::Ui, palette: &Palette, label: &str) {
    egui::Frame::new()
        .fill(palette.card_hover)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(label).small().color(palette.body_text));
        });
}

pub fn kpi_tile(ui: &mut egui::Ui, palette: &Palette, entry: &KpiEntry) {
    egui::Frame::new()
        .fill(palette.card_background)
        .stroke(egui::Stroke::new(1.0, palette.stroke))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(kpi_glyph(entry.icon)).size(20.0));
                ui.label(
                    egui::RichText::new(&entry.value)
                        .strong()
                        .size(18.0)
                        .color(palette.title_text),
                );
                ui.label(egui::RichText::new(&entry.label).small().color(palette.muted_text));
            });
        });
}

fn card_sense(coming_soon: bool) -> egui::Sense {
    if coming_soon {
        egui::Sense::hover()
    } else {
        egui::Sense::click()
    }
}

/// A catalog entry card. Coming-soon projects render but do not react to
/// clicks, matching how the site lists unpublished work.
pub fn project_card(ui: &mut egui::Ui, palette: &Palette, project: &Project) -> egui::Response {
    let desired = egui::vec2(ui.available_width(), 168.0);
    let (rect, response) = ui.allocate_exact_size(desired, card_sense(project.coming_soon));

    if ui.is_rect_visible(rect) {
        let hovered = !project.coming_soon && ui.rect_contains_pointer(rect);
        let fill = if hovered {
            palette.card_hover
        } else {
            palette.card_background
        };
        let stroke = if hovered {
            egui::Stroke::new(1.0, palette.accent)
        } else {
            egui::Stroke::new(1.0, palette.stroke)
        };
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(10), fill);
        ui.painter().rect_stroke(
            rect,
            egui::CornerRadius::same(10),
            stroke,
            egui::StrokeKind::Middle,
        );

        ui_in_rect(ui, rect.shrink(12.0), |ui| {
            ui.label(egui::RichText::new(&project.category).small().color(palette.accent));
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&project.title)
                        .strong()
                        .size(16.0)
                        .color(palette.title_text),
                );
                if project.coming_soon {
                    ui.label(
                        egui::RichText::new("Coming soon")
                            .small()
                            .italics()
                            .color(palette.hint_text),
                    );
                }
            });
            ui.label(
                egui::RichText::new(truncate_text(&project.description, 140))
                    .small()
                    .color(palette.muted_text),
            );
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for tool in &project.tools {
                    tool_tag(ui, palette, tool);
                }
            });
        });
    }

    response
}

/// Character-boundary-safe stand-in for the site's three-line clamp.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
