use serde::{Deserialize, Serialize};

use crate::commute::CommuteParameters;
use crate::equipment::EquipmentEntry;
use crate::factory::FactoryParameters;
use crate::materials::MaterialKind;

/// A mutation of the worksheet, issued by a UI button or the agent protocol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum WorksheetAction {
    AddEquipment {
        entry: EquipmentEntry,
    },
    SetCommute {
        params: CommuteParameters,
    },
    SetFactory {
        params: FactoryParameters,
    },
    SetMaterial {
        material: MaterialKind,
        quantity_kg: f64,
        comment: String,
    },
    ConfirmResults,
}

impl WorksheetAction {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            WorksheetAction::AddEquipment { .. } => "add equipment",
            WorksheetAction::SetCommute { .. } => "set commute",
            WorksheetAction::SetFactory { .. } => "set factory",
            WorksheetAction::SetMaterial { .. } => "set material",
            WorksheetAction::ConfirmResults => "confirm results",
        }
    }
}
