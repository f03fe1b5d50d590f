use serde::{Deserialize, Serialize};

use super::types::EquipmentEntry;

/// Ordered, append-only list of equipment entered this session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRegistry {
    entries: Vec<EquipmentEntry>,
}

impl EquipmentRegistry {
    pub fn add(&mut self, entry: EquipmentEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[EquipmentEntry] {
        &self.entries
    }

    /// Sum of every entry's energy in kWh, in insertion order.
    pub fn total_energy(&self) -> f64 {
        self.entries
            .iter()
            .fold(0.0, |total, entry| total + entry.energy_kwh())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
