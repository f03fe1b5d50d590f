//! Worker commute distances per 10 m² unit.
//!
//! Distances are round trips for every worker attributed to one unit of
//! output, split by the share of workers using each transport mode. The two
//! shares come from independent sliders and are not normalized:
//! 80 % car plus 80 % public transport counts both in full.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::units::calculate_commute_distance;
use crate::worksheet_error::{validate_non_negative, validate_ratio, WorksheetError};

/// Commute inputs as entered on the worksheet.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuteParameters {
    pub one_way_km: f64,
    /// Share of workers driving, 0..=1.
    pub car_ratio: f64,
    /// Share of workers on public transport, 0..=1.
    pub public_transport_ratio: f64,
    /// Workers (management included) attributed to one 10 m² unit.
    pub workers_per_10sqm: f64,
}

impl Default for CommuteParameters {
    fn default() -> Self {
        Self {
            one_way_km: 10.0,
            car_ratio: 0.8,
            public_transport_ratio: 0.2,
            workers_per_10sqm: 2.4,
        }
    }
}

impl CommuteParameters {
    /// Derives distances without validating; widget input is already clamped.
    pub fn distances(&self) -> CommuteDistances {
        let (car_km, public_transport_km) = calculate_commute_distance(
            self.one_way_km,
            self.workers_per_10sqm,
            self.car_ratio,
            self.public_transport_ratio,
        );
        CommuteDistances {
            car_km,
            public_transport_km,
        }
    }

    pub fn validate(&self) -> Result<(), WorksheetError> {
        validate_non_negative("one_way_km", self.one_way_km)?;
        validate_ratio("car_ratio", self.car_ratio)?;
        validate_ratio("public_transport_ratio", self.public_transport_ratio)?;
        validate_non_negative("workers_per_10sqm", self.workers_per_10sqm)?;
        Ok(())
    }
}

/// Round-trip distance travelled per 10 m² unit, by mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CommuteDistances {
    pub car_km: f64,
    pub public_transport_km: f64,
}
