//! Equipment kinds, entries, and the draft form that builds them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{DECIMALS_DEFAULT, DECIMALS_PRECISE};
use crate::units::{calculate_energy, calculate_transport_energy};
use crate::worksheet_error::{validate_non_negative, WorksheetError};

// =============================================================================
// Kinds
// =============================================================================

/// The five machines rated by power draw and run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoweredKind {
    LiftingMachine,
    IndustrialWoodCutting,
    ElectricNailGun,
    GantryNailer,
    FixedHoisting,
}

impl PoweredKind {
    pub fn label(self) -> &'static str {
        match self {
            PoweredKind::LiftingMachine => "Lifting Machine",
            PoweredKind::IndustrialWoodCutting => "Industrial Wood Cutting",
            PoweredKind::ElectricNailGun => "Electric Nail Gun",
            PoweredKind::GantryNailer => "Gantry Nailer",
            PoweredKind::FixedHoisting => "Fixed Hoisting",
        }
    }
}

/// Every option offered by the equipment selector, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentKind {
    Powered(PoweredKind),
    ForkliftTransport,
}

impl EquipmentKind {
    pub const ALL: [EquipmentKind; 6] = [
        EquipmentKind::Powered(PoweredKind::LiftingMachine),
        EquipmentKind::Powered(PoweredKind::IndustrialWoodCutting),
        EquipmentKind::Powered(PoweredKind::ElectricNailGun),
        EquipmentKind::Powered(PoweredKind::GantryNailer),
        EquipmentKind::Powered(PoweredKind::FixedHoisting),
        EquipmentKind::ForkliftTransport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EquipmentKind::Powered(kind) => kind.label(),
            EquipmentKind::ForkliftTransport => "Forklift Transport",
        }
    }
}

impl Default for EquipmentKind {
    fn default() -> Self {
        EquipmentKind::ALL[0]
    }
}

// =============================================================================
// Entries
// =============================================================================

/// One machine's contribution to a 10 m² unit. The variant decides which
/// field set exists, so an entry can never carry both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EquipmentEntry {
    Powered {
        kind: PoweredKind,
        power_kw: f64,
        minutes_per_10sqm: f64,
    },
    ForkliftTransport {
        weight_kg: f64,
        distance_m: f64,
    },
}

impl EquipmentEntry {
    pub fn kind(&self) -> EquipmentKind {
        match self {
            EquipmentEntry::Powered { kind, .. } => EquipmentKind::Powered(*kind),
            EquipmentEntry::ForkliftTransport { .. } => EquipmentKind::ForkliftTransport,
        }
    }

    /// Energy for one 10 m² unit, in kWh.
    pub fn energy_kwh(&self) -> f64 {
        match self {
            EquipmentEntry::Powered {
                power_kw,
                minutes_per_10sqm,
                ..
            } => calculate_energy(*power_kw, *minutes_per_10sqm),
            EquipmentEntry::ForkliftTransport {
                weight_kg,
                distance_m,
            } => calculate_transport_energy(*weight_kg, *distance_m),
        }
    }

    /// Transport figures are small, so they are listed with more precision.
    pub fn energy_decimals(&self) -> usize {
        match self {
            EquipmentEntry::Powered { .. } => DECIMALS_DEFAULT,
            EquipmentEntry::ForkliftTransport { .. } => DECIMALS_PRECISE,
        }
    }

    /// One-line description used by the equipment listing.
    pub fn describe(&self) -> String {
        match self {
            EquipmentEntry::Powered {
                kind,
                power_kw,
                minutes_per_10sqm,
            } => format!(
                "{} - Power: {} kW, Time: {} minutes",
                kind.label(),
                display_number(*power_kw),
                display_number(*minutes_per_10sqm)
            ),
            EquipmentEntry::ForkliftTransport {
                weight_kg,
                distance_m,
            } => format!(
                "{} - Weight: {} kg, Distance: {} m",
                self.kind().label(),
                display_number(*weight_kg),
                display_number(*distance_m)
            ),
        }
    }

    pub fn validate(&self) -> Result<(), WorksheetError> {
        match self {
            EquipmentEntry::Powered {
                power_kw,
                minutes_per_10sqm,
                ..
            } => {
                validate_non_negative("power_kw", *power_kw)?;
                validate_non_negative("minutes_per_10sqm", *minutes_per_10sqm)?;
            }
            EquipmentEntry::ForkliftTransport {
                weight_kg,
                distance_m,
            } => {
                validate_non_negative("weight_kg", *weight_kg)?;
                validate_non_negative("distance_m", *distance_m)?;
            }
        }
        Ok(())
    }
}

/// Shortest round-trip text for an entered value: plain decimals keep a
/// fractional digit ("20.0", "1.5"); magnitudes below 1e-4 or from 1e16 up
/// switch to a signed two-digit exponent ("1e-05", "1.5e+16").
fn display_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return format!("{value}");
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(SCIENTIFIC_BELOW..SCIENTIFIC_FROM).contains(&magnitude) {
        let scientific = format!("{value:e}");
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => scientific,
        };
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

const SCIENTIFIC_BELOW: f64 = 1e-4;
const SCIENTIFIC_FROM: f64 = 1e16;

// =============================================================================
// Draft form
// =============================================================================

/// State of the "Add Equipment" form. It holds both field sets so switching
/// the selector does not lose typed values; only the set matching `kind` is
/// used when the entry is built.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct EquipmentDraft {
    pub kind: EquipmentKind,
    pub power_kw: f64,
    pub minutes_per_10sqm: f64,
    pub weight_kg: f64,
    pub distance_m: f64,
}

impl EquipmentDraft {
    pub fn to_entry(&self) -> EquipmentEntry {
        match self.kind {
            EquipmentKind::Powered(kind) => EquipmentEntry::Powered {
                kind,
                power_kw: self.power_kw,
                minutes_per_10sqm: self.minutes_per_10sqm,
            },
            EquipmentKind::ForkliftTransport => EquipmentEntry::ForkliftTransport {
                weight_kg: self.weight_kg,
                distance_m: self.distance_m,
            },
        }
    }
}
