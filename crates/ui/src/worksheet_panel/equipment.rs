use bevy_egui::egui;

use worksheet::config::STEP_DEFAULT;
use worksheet::equipment::{EquipmentDraft, EquipmentKind, EquipmentRegistry};

use super::number_input;

/// Renders the equipment form. Returns `true` when "Add Equipment" was clicked.
pub fn render_equipment_form(ui: &mut egui::Ui, draft: &mut EquipmentDraft) -> bool {
    ui.heading("Energy Consumption Calculator for Equipment");
    ui.strong("Add Equipment");

    ui.horizontal(|ui| {
        ui.label("Select Equipment:");
        egui::ComboBox::from_id_salt("equipment_kind")
            .selected_text(draft.kind.label())
            .width(220.0)
            .show_ui(ui, |ui| {
                for kind in EquipmentKind::ALL {
                    ui.selectable_value(&mut draft.kind, kind, kind.label());
                }
            });
    });

    match draft.kind {
        EquipmentKind::Powered(_) => {
            number_input(ui, "Power (kW):", &mut draft.power_kw, STEP_DEFAULT);
            number_input(
                ui,
                "Time per 10m² (minutes):",
                &mut draft.minutes_per_10sqm,
                STEP_DEFAULT,
            );
        }
        EquipmentKind::ForkliftTransport => {
            number_input(ui, "Weight per 10m² (kg):", &mut draft.weight_kg, STEP_DEFAULT);
            number_input(
                ui,
                "Transport Distance per 10m² (m):",
                &mut draft.distance_m,
                STEP_DEFAULT,
            );
        }
    }

    ui.button("Add Equipment").clicked()
}

/// Lists added equipment with per-item energy and the running total.
pub fn render_equipment_list(ui: &mut egui::Ui, registry: &EquipmentRegistry) {
    if registry.is_empty() {
        return;
    }

    ui.add_space(6.0);
    ui.strong("Equipment List");
    for (index, entry) in registry.entries().iter().enumerate() {
        ui.label(format!("{}. {}", index + 1, entry.describe()));
        ui.label(format!(
            "    Energy Consumption for 10m²: {:.*} kWh",
            entry.energy_decimals(),
            entry.energy_kwh()
        ));
    }

    ui.add_space(4.0);
    ui.strong("Total Energy Consumption for Equipment");
    ui.label(format!("Total Energy: {:.2} kWh", registry.total_energy()));
}
