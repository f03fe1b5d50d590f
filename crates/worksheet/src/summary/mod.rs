//! Summary of calculations (table plus three bar charts).
//!
//! Built only when the analyst confirms. The summary is a pure function of
//! the [`WorksheetSession`](crate::session::WorksheetSession): confirming
//! twice without new input produces an identical summary.

pub mod charts;
pub mod table;
mod tests;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::session::WorksheetSession;
use crate::worksheet_error::WorksheetError;

pub use charts::{Bar, BarChart, Palette};
pub use table::{SummaryRow, SummaryTable};

/// Everything shown after "Confirm and View Results".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub table: SummaryTable,
    pub energy_chart: BarChart,
    pub commute_chart: BarChart,
    pub material_chart: BarChart,
}

impl Summary {
    /// Builds the summary, failing with `MissingState` when a dependency has
    /// not been computed (most commonly: no equipment added).
    pub fn build(session: &WorksheetSession) -> Result<Self, WorksheetError> {
        let equipment_kwh = session.require_equipment_energy()?;
        let factory = session.require_factory()?;
        let commute = session.require_commute()?;
        let materials = session.require_materials()?;

        Ok(Self {
            table: SummaryTable::new(equipment_kwh, &factory, &commute, materials),
            energy_chart: charts::energy_chart(equipment_kwh, &factory),
            commute_chart: charts::commute_chart(&commute),
            material_chart: charts::material_chart(materials),
        })
    }
}

/// Outcome of the most recent confirmation.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SummaryState {
    pub latest: Option<Summary>,
    pub error: Option<WorksheetError>,
}

impl SummaryState {
    /// Replaces the state with the result of a confirmation. A failure
    /// clears any earlier summary so stale figures are never shown.
    pub fn record(&mut self, result: Result<Summary, WorksheetError>) {
        match result {
            Ok(summary) => {
                self.latest = Some(summary);
                self.error = None;
            }
            Err(err) => {
                self.latest = None;
                self.error = Some(err);
            }
        }
    }

    /// Closes the results window.
    pub fn dismiss(&mut self) {
        self.latest = None;
        self.error = None;
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_none() && self.error.is_none()
    }

    /// Whether the shown outcome differs from what confirming now would give.
    pub fn is_stale(&self, current: &Result<Summary, WorksheetError>) -> bool {
        match (current, &self.latest, &self.error) {
            (Ok(now), Some(shown), _) => now != shown,
            (Err(now), None, Some(shown)) => now != shown,
            (_, None, None) => false,
            _ => true,
        }
    }
}

/// Closes the results once the session no longer produces them.
pub fn dismiss_stale_summary(session: Res<WorksheetSession>, mut state: ResMut<SummaryState>) {
    if !session.is_changed() || state.is_empty() {
        return;
    }
    if state.is_stale(&Summary::build(&session)) {
        info!("Inputs changed, closing previous results");
        state.dismiss();
    }
}
