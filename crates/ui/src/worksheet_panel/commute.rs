use bevy_egui::egui;

use worksheet::commute::{CommuteDistances, CommuteParameters};
use worksheet::config::STEP_DEFAULT;

use super::{number_input, percent_slider};

pub fn render_commute_section(
    ui: &mut egui::Ui,
    params: &mut CommuteParameters,
    distances: Option<CommuteDistances>,
) {
    ui.heading("Commute Emission Calculator for Workers");

    number_input(
        ui,
        "Commute Distance (one way, km):",
        &mut params.one_way_km,
        STEP_DEFAULT,
    );
    percent_slider(ui, "Percentage of Workers Using Car:", &mut params.car_ratio);
    percent_slider(
        ui,
        "Percentage of Workers Using Public Transport:",
        &mut params.public_transport_ratio,
    );
    number_input(
        ui,
        "Number of Workers per 10m² (including management):",
        &mut params.workers_per_10sqm,
        STEP_DEFAULT,
    );

    if let Some(distances) = distances {
        ui.strong("Total Commute Data for Workers");
        ui.label(format!(
            "Total Commute Distance for Workers Using Car: {:.2} km",
            distances.car_km
        ));
        ui.label(format!(
            "Total Commute Distance for Workers Using Public Transport: {:.2} km",
            distances.public_transport_km
        ));
    }
}
