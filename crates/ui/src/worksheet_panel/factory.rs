use bevy_egui::egui;

use worksheet::config::{STEP_DEFAULT, STEP_FINE, STEP_WHOLE};
use worksheet::factory::{FactoryEnergy, FactoryParameters};
use worksheet::worksheet_error::WorksheetError;

use super::number_input;
use crate::theme::COLOR_ERROR;

pub fn render_factory_section(
    ui: &mut egui::Ui,
    params: &mut FactoryParameters,
    energy: Option<&Result<FactoryEnergy, WorksheetError>>,
) {
    ui.heading("Factory Energy Emission Calculator");

    number_input(
        ui,
        "Building Energy Standard (GJ/m²/year):",
        &mut params.building_energy_standard,
        STEP_FINE,
    );
    number_input(
        ui,
        "Lighting Standard (kWh/m²/year):",
        &mut params.lighting_standard,
        STEP_DEFAULT,
    );
    number_input(
        ui,
        "Building Area (m²):",
        &mut params.building_area_m2,
        STEP_WHOLE,
    );
    number_input(
        ui,
        "Annual Production (m²):",
        &mut params.annual_production_m2,
        STEP_WHOLE,
    );

    match energy {
        Some(Ok(energy)) => {
            ui.strong("Factory Energy Emissions per 10m²");
            ui.label(format!(
                "Heating Energy Consumption for 10m²: {:.4} GJ",
                energy.heating_gj
            ));
            ui.label(format!(
                "Lighting Energy Consumption for 10m²: {:.4} kWh",
                energy.lighting_kwh
            ));
        }
        Some(Err(err)) => {
            ui.colored_label(COLOR_ERROR, err.to_string());
        }
        None => {}
    }
}
