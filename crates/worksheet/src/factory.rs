//! Factory heating and lighting energy per 10 m² unit.
//!
//! Annual facility standards are multiplied by floor area, divided across the
//! year's production, and scaled to the 10 m² unit.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::UNIT_AREA_SQM;
use crate::units::{calculate_heating_energy, calculate_lighting_energy};
use crate::worksheet_error::{validate_non_negative, validate_positive, WorksheetError};

/// Facility-wide inputs as entered on the worksheet.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryParameters {
    /// Building energy standard, GJ/m²/year.
    pub building_energy_standard: f64,
    /// Lighting standard, kWh/m²/year.
    pub lighting_standard: f64,
    pub building_area_m2: f64,
    /// Floor area produced per year, m².
    pub annual_production_m2: f64,
}

impl Default for FactoryParameters {
    fn default() -> Self {
        Self {
            building_energy_standard: 0.75,
            lighting_standard: 18.0,
            building_area_m2: 14000.0,
            annual_production_m2: 360000.0,
        }
    }
}

impl FactoryParameters {
    /// Validates the inputs and derives per-unit energy. Zero annual
    /// production is rejected instead of dividing by zero.
    pub fn energy(&self) -> Result<FactoryEnergy, WorksheetError> {
        self.validate()?;
        Ok(FactoryEnergy {
            heating_gj: calculate_heating_energy(
                self.building_energy_standard,
                self.building_area_m2,
                self.annual_production_m2,
                UNIT_AREA_SQM,
            ),
            lighting_kwh: calculate_lighting_energy(
                self.lighting_standard,
                self.building_area_m2,
                self.annual_production_m2,
                UNIT_AREA_SQM,
            ),
        })
    }

    pub fn validate(&self) -> Result<(), WorksheetError> {
        validate_non_negative("building_energy_standard", self.building_energy_standard)?;
        validate_non_negative("lighting_standard", self.lighting_standard)?;
        validate_non_negative("building_area_m2", self.building_area_m2)?;
        validate_positive("annual_production_m2", self.annual_production_m2)?;
        Ok(())
    }
}

/// Heating (GJ) and lighting (kWh) attributed to one 10 m² unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactoryEnergy {
    pub heating_gj: f64,
    pub lighting_kwh: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_factory_energy() {
        let energy = FactoryParameters::default().energy().unwrap();
        assert!((energy.heating_gj - 0.2917).abs() < 1e-4, "{energy:?}");
        assert!((energy.lighting_kwh - 7.0).abs() < 1e-9, "{energy:?}");
    }

    #[test]
    fn test_zero_production_is_invalid_input() {
        let params = FactoryParameters {
            annual_production_m2: 0.0,
            ..Default::default()
        };
        let err = params.energy().unwrap_err();
        assert!(
            matches!(err, WorksheetError::InvalidInput { ref field, .. } if field == "annual_production_m2"),
            "got {err:?}"
        );
    }

    #[test]
    fn test_zero_area_gives_zero_energy() {
        let params = FactoryParameters {
            building_area_m2: 0.0,
            ..Default::default()
        };
        assert_eq!(params.energy().unwrap(), FactoryEnergy::default());
    }

    #[test]
    fn test_doubling_production_halves_energy() {
        let base = FactoryParameters::default().energy().unwrap();
        let doubled = FactoryParameters {
            annual_production_m2: 720000.0,
            ..Default::default()
        }
        .energy()
        .unwrap();
        assert!((doubled.heating_gj * 2.0 - base.heating_gj).abs() < 1e-12);
        assert!((doubled.lighting_kwh * 2.0 - base.lighting_kwh).abs() < 1e-12);
    }
}
