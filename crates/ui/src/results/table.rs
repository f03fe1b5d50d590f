use bevy_egui::egui;

use worksheet::summary::table::{SummaryTable, TABLE_CAPTION};

use crate::theme::{CELL_BACKGROUND, HEADER_GREEN, HIGHLIGHT_GREEN, TEXT_DARK};

const HEADERS: [&str; 3] = ["Category", "Value", "Comment"];

pub fn render_summary_table(ui: &mut egui::Ui, table: &SummaryTable) {
    ui.label(egui::RichText::new(TABLE_CAPTION).strong().size(16.0));
    ui.add_space(4.0);

    let highlight = table.max_value_indices();

    egui::Grid::new("summary_table")
        .num_columns(HEADERS.len())
        .spacing(egui::vec2(16.0, 6.0))
        .show(ui, |ui| {
            for header in HEADERS {
                ui.label(
                    egui::RichText::new(header)
                        .strong()
                        .color(egui::Color32::WHITE)
                        .background_color(HEADER_GREEN),
                );
            }
            ui.end_row();

            for (index, row) in table.rows.iter().enumerate() {
                let value_background = if highlight.contains(&index) {
                    HIGHLIGHT_GREEN
                } else {
                    CELL_BACKGROUND
                };
                ui.label(egui::RichText::new(&row.category).color(TEXT_DARK));
                ui.label(
                    egui::RichText::new(row.formatted_value())
                        .color(TEXT_DARK)
                        .background_color(value_background),
                );
                ui.label(egui::RichText::new(&row.comment).color(TEXT_DARK));
                ui.end_row();
            }
        });
}
