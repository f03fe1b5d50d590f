//! Closed-form conversions behind every worksheet figure.
//!
//! All functions are pure IEEE-754 double arithmetic.
//!
//! | Function                       | Output        |
//! |--------------------------------|---------------|
//! | `calculate_energy`             | kWh / 10 m²   |
//! | `calculate_transport_energy`   | kWh / 10 m²   |
//! | `calculate_commute_distance`   | km  / 10 m²   |
//! | `calculate_heating_energy`     | GJ  / 10 m²   |
//! | `calculate_lighting_energy`    | kWh / 10 m²   |

use crate::config::{KG_PER_TONNE, MINUTES_PER_HOUR, ROUND_TRIP_FACTOR, TRANSPORT_KWH_PER_TKM};

/// Electricity used by a machine drawing `power_kw` for `minutes_per_10sqm`.
pub fn calculate_energy(power_kw: f64, minutes_per_10sqm: f64) -> f64 {
    power_kw * (minutes_per_10sqm / MINUTES_PER_HOUR)
}

/// Forklift energy: load in tonnes times distance gives tonne-km, which is
/// multiplied by the fixed inventory factor.
pub fn calculate_transport_energy(weight_kg: f64, distance: f64) -> f64 {
    let tkm = (weight_kg / KG_PER_TONNE) * distance;
    tkm * TRANSPORT_KWH_PER_TKM
}

/// Round-trip commute distance split by mode. The two ratios are applied
/// independently and are not normalized to sum to one.
pub fn calculate_commute_distance(
    one_way_km: f64,
    workers_per_10sqm: f64,
    car_ratio: f64,
    public_transport_ratio: f64,
) -> (f64, f64) {
    let total = one_way_km * ROUND_TRIP_FACTOR * workers_per_10sqm;
    (total * car_ratio, total * public_transport_ratio)
}

/// Facility heating (GJ/yr) spread over annual output, scaled to `unit_area`.
pub fn calculate_heating_energy(
    standard_gj_per_m2_yr: f64,
    building_area_m2: f64,
    annual_production_m2: f64,
    unit_area: f64,
) -> f64 {
    per_unit_area(standard_gj_per_m2_yr, building_area_m2, annual_production_m2, unit_area)
}

/// Facility lighting (kWh/yr) spread over annual output, scaled to `unit_area`.
pub fn calculate_lighting_energy(
    standard_kwh_per_m2_yr: f64,
    building_area_m2: f64,
    annual_production_m2: f64,
    unit_area: f64,
) -> f64 {
    per_unit_area(standard_kwh_per_m2_yr, building_area_m2, annual_production_m2, unit_area)
}

fn per_unit_area(standard: f64, area: f64, production: f64, unit_area: f64) -> f64 {
    let facility_total = standard * area;
    let per_produced_m2 = facility_total / production;
    per_produced_m2 * unit_area
}

/// Rounds to `decimals` places the way the listing text does: to the
/// nearest decimal, with exact halves going to the even digit.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
