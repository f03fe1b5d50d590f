use bevy_egui::egui;

use worksheet::config::STEP_FINE;
use worksheet::materials::{MaterialInputs, MaterialKind};

use super::number_input;

pub fn render_materials_section(ui: &mut egui::Ui, inputs: &mut MaterialInputs) {
    ui.heading("Material Input for Emissions Calculation");
    ui.strong("Material Inputs (per 10m²)");

    for kind in MaterialKind::ALL {
        let line = inputs.get_mut(kind);
        number_input(
            ui,
            &format!("{} (kg):", kind.input_label()),
            &mut line.quantity_kg,
            STEP_FINE,
        );
        ui.horizontal(|ui| {
            ui.label(format!("{} Comment:", kind.label()));
            ui.text_edit_singleline(&mut line.comment);
        });
    }
}

/// Summary lines of the ledger as last stored in the session.
pub fn render_materials_summary(ui: &mut egui::Ui, ledger: &MaterialInputs) {
    ui.add_space(4.0);
    ui.strong("Material Inputs Summary per 10m²");
    for kind in MaterialKind::ALL {
        ui.label(ledger.summary_line(kind));
    }
}
