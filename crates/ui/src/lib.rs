use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use worksheet::equipment::EquipmentDraft;
use worksheet::WorksheetSet;

pub mod graphs;
pub mod results;
pub mod theme;
pub mod worksheet_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<EquipmentDraft>()
            .add_systems(Startup, theme::apply_worksheet_theme)
            .add_systems(
                Update,
                (
                    worksheet_panel::worksheet_panel_ui,
                    results::results_window_ui,
                )
                    .chain()
                    .after(WorksheetSet::Actions),
            );
    }
}
