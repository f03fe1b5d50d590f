/// Floor area every per-area figure on the worksheet is normalized to (m²).
pub const UNIT_AREA_SQM: f64 = 10.0;

/// Forklift energy per tonne-km, from the life-cycle inventory database.
pub const TRANSPORT_KWH_PER_TKM: f64 = 0.0087;

/// Conversion used when heating (GJ) is charted next to electricity (kWh).
pub const GJ_TO_KWH: f64 = 277.78;

pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const KG_PER_TONNE: f64 = 1000.0;

/// Commuters travel to the factory and back every working day.
pub const ROUND_TRIP_FACTOR: f64 = 2.0;

// Input widget steps.
pub const STEP_FINE: f64 = 0.01;
pub const STEP_DEFAULT: f64 = 0.1;
pub const STEP_WHOLE: f64 = 1.0;

/// Decimal places used when a value is shown or rounded into the summary.
pub const DECIMALS_DEFAULT: usize = 2;
pub const DECIMALS_PRECISE: usize = 4;
