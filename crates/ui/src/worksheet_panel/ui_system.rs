use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use worksheet::commute::CommuteParameters;
use worksheet::equipment::EquipmentDraft;
use worksheet::factory::FactoryParameters;
use worksheet::materials::MaterialInputs;
use worksheet::session::WorksheetSession;
use worksheet::worksheet_actions::{ActionQueue, ActionResultLog, ActionSource, WorksheetAction};

use super::{commute, equipment, factory, materials};
use crate::theme::{COLOR_ERROR, HEADER_GREEN};

/// Draws the worksheet. Parameter resources are edited on copies and only
/// written back when a value actually changed, so derived values are not
/// recomputed on idle frames.
#[allow(clippy::too_many_arguments)]
pub fn worksheet_panel_ui(
    mut contexts: EguiContexts,
    mut draft: ResMut<EquipmentDraft>,
    mut commute_params: ResMut<CommuteParameters>,
    mut factory_params: ResMut<FactoryParameters>,
    mut material_inputs: ResMut<MaterialInputs>,
    mut queue: ResMut<ActionQueue>,
    session: Res<WorksheetSession>,
    log: Res<ActionResultLog>,
) {
    let mut commute_edit = commute_params.clone();
    let mut factory_edit = factory_params.clone();
    let mut materials_edit = material_inputs.clone();
    let mut add_clicked = false;
    let mut confirm_clicked = false;

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.label(
                egui::RichText::new("Technosphere Inputs Management")
                    .size(24.0)
                    .strong(),
            );
            ui.separator();

            add_clicked = equipment::render_equipment_form(ui, &mut draft);
            equipment::render_equipment_list(ui, &session.equipment);
            ui.separator();

            commute::render_commute_section(ui, &mut commute_edit, session.commute);
            ui.separator();

            factory::render_factory_section(ui, &mut factory_edit, session.factory.as_ref());
            ui.separator();

            materials::render_materials_section(ui, &mut materials_edit);
            if let Some(ledger) = &session.materials {
                materials::render_materials_summary(ui, ledger);
            }
            ui.separator();

            let confirm = egui::Button::new(
                egui::RichText::new("Confirm and View Results").color(egui::Color32::WHITE),
            )
            .fill(HEADER_GREEN);
            confirm_clicked = ui.add(confirm).clicked();

            if let Some(err) = log.last_error_from(ActionSource::Analyst) {
                ui.colored_label(COLOR_ERROR, err.to_string());
            }
        });
    });

    commute_params.set_if_neq(commute_edit);
    factory_params.set_if_neq(factory_edit);
    material_inputs.set_if_neq(materials_edit);

    if add_clicked {
        queue.push(
            ActionSource::Analyst,
            WorksheetAction::AddEquipment {
                entry: draft.to_entry(),
            },
        );
    }
    if confirm_clicked {
        queue.push(ActionSource::Analyst, WorksheetAction::ConfirmResults);
    }
}
