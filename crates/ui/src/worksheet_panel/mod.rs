//! Central worksheet panel: the four input sections, the derived values
//! shown under each of them and the confirmation button.

mod commute;
mod equipment;
mod factory;
mod materials;
mod ui_system;

#[cfg(test)]
mod tests;

pub use ui_system::worksheet_panel_ui;

use bevy_egui::egui;

use worksheet::config::{STEP_DEFAULT, STEP_FINE};

/// Number of decimals a drag value shows for a given step size.
pub(crate) fn step_decimals(step: f64) -> usize {
    if step <= STEP_FINE {
        2
    } else if step <= STEP_DEFAULT {
        1
    } else {
        0
    }
}

/// A labelled non-negative number field.
pub(crate) fn number_input(ui: &mut egui::Ui, label: &str, value: &mut f64, step: f64) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(
            egui::DragValue::new(value)
                .speed(step)
                .range(0.0..=f64::MAX)
                .fixed_decimals(step_decimals(step)),
        );
    });
}

/// A 0-100 % slider bound to a ratio in `0.0..=1.0`.
pub(crate) fn percent_slider(ui: &mut egui::Ui, label: &str, ratio: &mut f64) {
    let mut percent = ratio_to_percent(*ratio);
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::Slider::new(&mut percent, 0..=100).suffix("%"));
    });
    *ratio = percent_to_ratio(percent);
}

pub(crate) fn ratio_to_percent(ratio: f64) -> u32 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u32
}

pub(crate) fn percent_to_ratio(percent: u32) -> f64 {
    f64::from(percent) / 100.0
}
