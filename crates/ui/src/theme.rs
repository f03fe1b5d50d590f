use bevy_egui::{egui, EguiContexts};

/// Header green used by the summary table and primary buttons.
pub const HEADER_GREEN: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);
/// Background of the highlighted maximum cell.
pub const HIGHLIGHT_GREEN: egui::Color32 = egui::Color32::from_rgb(144, 238, 144);
pub const CELL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(249, 249, 249);
pub const TEXT_DARK: egui::Color32 = egui::Color32::from_rgb(51, 51, 51);
pub const COLOR_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 40, 40);

pub fn apply_worksheet_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Light worksheet look
    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = egui::Color32::from_rgb(252, 252, 250);
    style.visuals.window_fill = egui::Color32::WHITE;
    style.visuals.faint_bg_color = egui::Color32::from_rgb(240, 243, 240);

    // Selection highlight
    style.visuals.selection.bg_fill = HEADER_GREEN;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    style.visuals.widgets.active.bg_fill = HEADER_GREEN;
    style.visuals.widgets.active.weak_bg_fill = HEADER_GREEN;

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(4);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    // Roomier form rows
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.slider_width = 220.0;

    ctx.set_style(style);
}
