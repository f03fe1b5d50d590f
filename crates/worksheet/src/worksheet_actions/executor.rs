//! Action executor system: drains the [`ActionQueue`] each frame and applies
//! every queued [`WorksheetAction`] to the session, recording results and
//! their [`ActionSource`](super::ActionSource) in the [`ActionResultLog`].
//!
//! Input-replacing actions validate first and refresh the matching derived
//! value immediately, so a `ConfirmResults` queued right after them sees the
//! new figures.

use bevy::prelude::*;

use crate::commute::CommuteParameters;
use crate::equipment::EquipmentEntry;
use crate::factory::FactoryParameters;
use crate::materials::{MaterialInputs, MaterialKind};
use crate::session::WorksheetSession;
use crate::summary::{Summary, SummaryState};
use crate::worksheet_error::{validate_non_negative, WorksheetError};

use super::result_log::ActionResultLog;
use super::{ActionQueue, WorksheetAction};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut session: ResMut<WorksheetSession>,
    mut commute: ResMut<CommuteParameters>,
    mut factory: ResMut<FactoryParameters>,
    mut materials: ResMut<MaterialInputs>,
    mut summary: ResMut<SummaryState>,
) {
    if queue.is_empty() {
        return;
    }
    for queued in queue.drain() {
        let result = match &queued.action {
            WorksheetAction::AddEquipment { entry } => execute_add_equipment(entry, &mut session),
            WorksheetAction::SetCommute { params } => {
                execute_set_commute(params, &mut commute, &mut session)
            }
            WorksheetAction::SetFactory { params } => {
                execute_set_factory(params, &mut factory, &mut session)
            }
            WorksheetAction::SetMaterial {
                material,
                quantity_kg,
                comment,
            } => execute_set_material(
                *material,
                *quantity_kg,
                comment,
                &mut materials,
                &mut session,
            ),
            WorksheetAction::ConfirmResults => execute_confirm(&session, &mut summary),
        };
        if let Err(err) = &result {
            warn!(
                "Rejected {} action '{}': {}",
                queued.source.label(),
                queued.action.name(),
                err
            );
        }
        log.push(queued.source, queued.action, result.into());
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn execute_add_equipment(
    entry: &EquipmentEntry,
    session: &mut WorksheetSession,
) -> Result<(), WorksheetError> {
    entry.validate()?;
    session.add_equipment(entry.clone());
    info!(
        "Added equipment #{}: {} ({:.4} kWh per 10 m²)",
        session.equipment.len(),
        entry.describe(),
        entry.energy_kwh()
    );
    Ok(())
}

fn execute_set_commute(
    params: &CommuteParameters,
    commute: &mut CommuteParameters,
    session: &mut WorksheetSession,
) -> Result<(), WorksheetError> {
    params.validate()?;
    *commute = params.clone();
    session.update_commute(params);
    Ok(())
}

fn execute_set_factory(
    params: &FactoryParameters,
    factory: &mut FactoryParameters,
    session: &mut WorksheetSession,
) -> Result<(), WorksheetError> {
    params.validate()?;
    *factory = params.clone();
    session.update_factory(params);
    Ok(())
}

fn execute_set_material(
    material: MaterialKind,
    quantity_kg: f64,
    comment: &str,
    materials: &mut MaterialInputs,
    session: &mut WorksheetSession,
) -> Result<(), WorksheetError> {
    validate_non_negative(material.label(), quantity_kg)?;
    materials.set(material, quantity_kg, comment.to_string());
    session.update_materials(materials);
    Ok(())
}

fn execute_confirm(
    session: &WorksheetSession,
    summary: &mut SummaryState,
) -> Result<(), WorksheetError> {
    let built = Summary::build(session);
    let outcome = built.as_ref().map(|_| ()).map_err(WorksheetError::clone);
    if outcome.is_ok() {
        info!(
            "Summary generated for {} equipment entries",
            session.equipment.len()
        );
    }
    summary.record(built);
    outcome
}
