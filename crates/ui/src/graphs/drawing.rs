//! Painter-based categorical bar charts with value annotations.

use bevy_egui::egui;

use worksheet::summary::BarChart;

use crate::theme::TEXT_DARK;

pub(crate) const CHART_WIDTH: f32 = 520.0;
pub(crate) const CHART_HEIGHT: f32 = 260.0;

const TITLE_SPACE: f32 = 26.0;
const LABEL_SPACE: f32 = 40.0;
const ANNOTATION_SPACE: f32 = 16.0;
const SIDE_MARGIN: f32 = 48.0;
const BAR_FILL_FRACTION: f32 = 0.6;

/// Height of a bar for `value`, scaled so `max` fills `available`.
pub(crate) fn bar_height(value: f64, max: f64, available: f32) -> f32 {
    if max <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    ((value / max) as f32 * available).min(available)
}

/// Horizontal span `(left, right)` of bar `index` of `count` across `[min_x, min_x + width]`.
pub(crate) fn bar_span(index: usize, count: usize, min_x: f32, width: f32) -> (f32, f32) {
    let slot = width / count.max(1) as f32;
    let bar_width = slot * BAR_FILL_FRACTION;
    let center = min_x + slot * (index as f32 + 0.5);
    (center - bar_width / 2.0, center + bar_width / 2.0)
}

pub(crate) fn to_color32(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

pub fn draw_bar_chart(ui: &mut egui::Ui, chart: &BarChart) {
    ui.strong(&chart.heading);

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(CHART_WIDTH, CHART_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, egui::Color32::WHITE);

    painter.text(
        egui::pos2(rect.center().x, rect.min.y + 4.0),
        egui::Align2::CENTER_TOP,
        &chart.title,
        egui::FontId::proportional(14.0),
        TEXT_DARK,
    );

    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + SIDE_MARGIN, rect.min.y + TITLE_SPACE),
        egui::pos2(rect.max.x - SIDE_MARGIN / 2.0, rect.max.y - LABEL_SPACE),
    );

    // Axes
    let axis = egui::Stroke::new(1.0, egui::Color32::from_gray(120));
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_top(), plot.left_bottom()], axis);

    painter.text(
        egui::pos2(rect.min.x + 2.0, plot.min.y),
        egui::Align2::LEFT_TOP,
        &chart.y_label,
        egui::FontId::proportional(10.0),
        TEXT_DARK,
    );
    painter.text(
        egui::pos2(plot.center().x, rect.max.y - 2.0),
        egui::Align2::CENTER_BOTTOM,
        &chart.x_label,
        egui::FontId::proportional(11.0),
        TEXT_DARK,
    );

    let max = chart.max_value();
    let available = plot.height() - ANNOTATION_SPACE;
    let count = chart.bars.len();

    for (index, bar) in chart.bars.iter().enumerate() {
        let (left, right) = bar_span(index, count, plot.min.x, plot.width());
        let height = bar_height(bar.value, max, available);
        let bar_rect = egui::Rect::from_min_max(
            egui::pos2(left, plot.max.y - height),
            egui::pos2(right, plot.max.y),
        );
        painter.rect_filled(bar_rect, 0.0, to_color32(chart.bar_color(index)));

        painter.text(
            egui::pos2(bar_rect.center().x, bar_rect.min.y - 2.0),
            egui::Align2::CENTER_BOTTOM,
            bar.annotation(),
            egui::FontId::proportional(11.0),
            TEXT_DARK,
        );
        painter.text(
            egui::pos2(bar_rect.center().x, plot.max.y + 4.0),
            egui::Align2::CENTER_TOP,
            &bar.label,
            egui::FontId::proportional(10.0),
            TEXT_DARK,
        );
    }
}
