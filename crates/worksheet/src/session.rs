//! The worksheet session: equipment entered so far plus the most recently
//! derived commute, factory and material figures.
//!
//! This resource is the single source of truth the summary reads from. The
//! input resources ([`CommuteParameters`], [`FactoryParameters`],
//! [`MaterialInputs`]) are edited by the UI; [`refresh_derived_values`]
//! recomputes the derived figures from them every frame and only the latest
//! values are kept.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::commute::{CommuteDistances, CommuteParameters};
use crate::equipment::{EquipmentEntry, EquipmentRegistry};
use crate::factory::{FactoryEnergy, FactoryParameters};
use crate::materials::MaterialInputs;
use crate::worksheet_error::WorksheetError;

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct WorksheetSession {
    pub equipment: EquipmentRegistry,
    pub commute: Option<CommuteDistances>,
    /// `Err` while the factory inputs cannot be evaluated (zero production).
    pub factory: Option<Result<FactoryEnergy, WorksheetError>>,
    pub materials: Option<MaterialInputs>,
}

impl WorksheetSession {
    pub fn add_equipment(&mut self, entry: EquipmentEntry) {
        self.equipment.add(entry);
    }

    pub fn update_commute(&mut self, params: &CommuteParameters) {
        self.commute = Some(params.distances());
    }

    pub fn update_factory(&mut self, params: &FactoryParameters) {
        self.factory = Some(params.energy());
    }

    pub fn update_materials(&mut self, inputs: &MaterialInputs) {
        self.materials = Some(inputs.clone());
    }

    /// Total equipment energy in kWh. Fails if nothing has been added, which
    /// blocks summary generation with a clear message.
    pub fn require_equipment_energy(&self) -> Result<f64, WorksheetError> {
        if self.equipment.is_empty() {
            return Err(WorksheetError::missing("no equipment added"));
        }
        Ok(self.equipment.total_energy())
    }

    pub fn require_commute(&self) -> Result<CommuteDistances, WorksheetError> {
        self.commute
            .ok_or_else(|| WorksheetError::missing("commute distances not computed"))
    }

    pub fn require_factory(&self) -> Result<FactoryEnergy, WorksheetError> {
        match &self.factory {
            Some(result) => result.clone(),
            None => Err(WorksheetError::missing("factory energy not computed")),
        }
    }

    pub fn require_materials(&self) -> Result<&MaterialInputs, WorksheetError> {
        self.materials
            .as_ref()
            .ok_or_else(|| WorksheetError::missing("material inputs not recorded"))
    }

    /// Serializable view for the agent protocol and debugging.
    pub fn snapshot(&self) -> WorksheetSnapshot {
        WorksheetSnapshot {
            equipment: self
                .equipment
                .entries()
                .iter()
                .map(|entry| EquipmentLine {
                    description: entry.describe(),
                    energy_kwh: entry.energy_kwh(),
                    entry: entry.clone(),
                })
                .collect(),
            total_equipment_energy_kwh: self.equipment.total_energy(),
            commute: self.commute,
            factory: self.factory.as_ref().and_then(|r| r.as_ref().ok().copied()),
            factory_error: self
                .factory
                .as_ref()
                .and_then(|r| r.as_ref().err().map(|e| e.to_string())),
            materials: self.materials.clone(),
        }
    }
}

/// One listed equipment entry with its computed energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentLine {
    pub entry: EquipmentEntry,
    pub description: String,
    pub energy_kwh: f64,
}

/// Point-in-time copy of everything the worksheet has derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorksheetSnapshot {
    pub equipment: Vec<EquipmentLine>,
    pub total_equipment_energy_kwh: f64,
    pub commute: Option<CommuteDistances>,
    pub factory: Option<FactoryEnergy>,
    pub factory_error: Option<String>,
    pub materials: Option<MaterialInputs>,
}

/// Recomputes commute, factory and material figures from the current inputs.
///
/// Runs every frame; only input changes make the values differ.
pub fn refresh_derived_values(
    commute: Res<CommuteParameters>,
    factory: Res<FactoryParameters>,
    materials: Res<MaterialInputs>,
    mut session: ResMut<WorksheetSession>,
) {
    let is_first = session.commute.is_none();
    if !is_first && !commute.is_changed() && !factory.is_changed() && !materials.is_changed() {
        return;
    }

    session.update_commute(&commute);
    session.update_factory(&factory);
    session.update_materials(&materials);

    if factory.is_changed() {
        if let Some(Err(err)) = &session.factory {
            warn!("Factory energy unavailable: {}", err);
        }
    }
}
