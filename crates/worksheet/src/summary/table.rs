use serde::{Deserialize, Serialize};

use crate::commute::CommuteDistances;
use crate::config::{DECIMALS_DEFAULT, DECIMALS_PRECISE};
use crate::factory::FactoryEnergy;
use crate::materials::{MaterialInputs, MaterialKind};
use crate::units::round_to;

pub const TABLE_CAPTION: &str =
    "Summary of Calculations for Energy Consumption, Commute, and Materials";

/// One row of the summary table. `value` is already rounded to `decimals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub category: String,
    pub value: f64,
    pub decimals: usize,
    pub comment: String,
}

impl SummaryRow {
    fn new(category: &str, raw: f64, decimals: usize, comment: &str) -> Self {
        Self {
            category: category.to_string(),
            value: round_to(raw, decimals),
            decimals,
            comment: comment.to_string(),
        }
    }

    pub fn formatted_value(&self) -> String {
        format!("{:.*}", self.decimals, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn new(
        equipment_kwh: f64,
        factory: &FactoryEnergy,
        commute: &CommuteDistances,
        materials: &MaterialInputs,
    ) -> Self {
        let mut rows = vec![
            SummaryRow::new(
                "Total Equipment Energy Consumption (kWh)",
                equipment_kwh,
                DECIMALS_DEFAULT,
                "",
            ),
            SummaryRow::new(
                "Total Heating Energy Consumption for 10m² (GJ)",
                factory.heating_gj,
                DECIMALS_PRECISE,
                "",
            ),
            SummaryRow::new(
                "Total Lighting Energy Consumption for 10m² (kWh)",
                factory.lighting_kwh,
                DECIMALS_PRECISE,
                "",
            ),
            SummaryRow::new(
                "Total Commute Distance for Workers Using Car (km)",
                commute.car_km,
                DECIMALS_DEFAULT,
                "",
            ),
            SummaryRow::new(
                "Total Commute Distance for Workers Using Public Transport (km)",
                commute.public_transport_km,
                DECIMALS_DEFAULT,
                "",
            ),
        ];
        rows.extend(MaterialKind::ALL.into_iter().map(|kind| {
            let line = materials.get(kind);
            SummaryRow::new(
                &format!("{} (kg)", kind.input_label()),
                line.quantity_kg,
                DECIMALS_DEFAULT,
                &line.comment,
            )
        }));
        Self { rows }
    }

    /// Rows holding the largest value, which the table highlights. Units
    /// differ between rows, so this is a display cue only. Every row equal to
    /// the maximum is returned.
    pub fn max_value_indices(&self) -> Vec<usize> {
        let max = self
            .rows
            .iter()
            .map(|row| row.value)
            .fold(f64::NEG_INFINITY, f64::max);
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.value == max)
            .map(|(i, _)| i)
            .collect()
    }
}
