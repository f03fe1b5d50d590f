use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use worksheet::summary::SummaryState;

use super::table::render_summary_table;
use crate::graphs::draw_bar_chart;
use crate::theme::COLOR_ERROR;

pub fn results_window_ui(mut contexts: EguiContexts, mut state: ResMut<SummaryState>) {
    if state.is_empty() {
        return;
    }

    let mut open = true;
    egui::Window::new("Summary of Calculations")
        .open(&mut open)
        .default_width(640.0)
        .resizable(true)
        .vscroll(true)
        .show(contexts.ctx_mut(), |ui| {
            if let Some(err) = &state.error {
                ui.colored_label(COLOR_ERROR, err.to_string());
                return;
            }
            let Some(summary) = &state.latest else {
                return;
            };

            render_summary_table(ui, &summary.table);
            ui.separator();

            ui.heading("Visual Representation of Results");
            for chart in [
                &summary.energy_chart,
                &summary.commute_chart,
                &summary.material_chart,
            ] {
                draw_bar_chart(ui, chart);
                ui.add_space(8.0);
            }
        });

    if !open {
        state.dismiss();
    }
}
