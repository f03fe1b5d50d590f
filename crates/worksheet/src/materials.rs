//! Material inputs per 10 m² unit.
//!
//! Four fixed categories, each with a quantity in kg and a free-text comment
//! (supplier, density assumption, and so on).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::worksheet_error::{validate_non_negative, WorksheetError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialKind {
    PineWood,
    Adhesive,
    FinishCoat,
    IronNails,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 4] = [
        MaterialKind::PineWood,
        MaterialKind::Adhesive,
        MaterialKind::FinishCoat,
        MaterialKind::IronNails,
    ];

    /// Short name used by charts and comment fields.
    pub fn label(self) -> &'static str {
        match self {
            MaterialKind::PineWood => "Pine Wood",
            MaterialKind::Adhesive => "Adhesive",
            MaterialKind::FinishCoat => "Finish Coat",
            MaterialKind::IronNails => "Iron Nails",
        }
    }

    /// Name used by the quantity input and the summary lines.
    pub fn input_label(self) -> &'static str {
        match self {
            MaterialKind::PineWood => "Pine Wood Material",
            other => other.label(),
        }
    }

    fn index(self) -> usize {
        match self {
            MaterialKind::PineWood => 0,
            MaterialKind::Adhesive => 1,
            MaterialKind::FinishCoat => 2,
            MaterialKind::IronNails => 3,
        }
    }
}

/// Quantity and comment recorded for one material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub quantity_kg: f64,
    pub comment: String,
}

/// The four material lines, always in [`MaterialKind::ALL`] order.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInputs {
    lines: [MaterialLine; 4],
}

impl Default for MaterialInputs {
    fn default() -> Self {
        let line = |quantity_kg: f64| MaterialLine {
            quantity_kg,
            comment: String::new(),
        };
        Self {
            lines: [line(0.04), line(0.15), line(0.17), line(0.0)],
        }
    }
}

impl MaterialInputs {
    pub fn get(&self, kind: MaterialKind) -> &MaterialLine {
        &self.lines[kind.index()]
    }

    pub fn get_mut(&mut self, kind: MaterialKind) -> &mut MaterialLine {
        &mut self.lines[kind.index()]
    }

    pub fn set(&mut self, kind: MaterialKind, quantity_kg: f64, comment: String) {
        *self.get_mut(kind) = MaterialLine {
            quantity_kg,
            comment,
        };
    }

    pub fn iter(&self) -> impl Iterator<Item = (MaterialKind, &MaterialLine)> {
        MaterialKind::ALL.into_iter().zip(self.lines.iter())
    }

    /// Summary line as shown under the material inputs.
    pub fn summary_line(&self, kind: MaterialKind) -> String {
        let line = self.get(kind);
        format!(
            "{}: {:.2} kg - {}",
            kind.input_label(),
            line.quantity_kg,
            line.comment
        )
    }

    pub fn validate(&self) -> Result<(), WorksheetError> {
        for (kind, line) in self.iter() {
            validate_non_negative(kind.label(), line.quantity_kg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_worksheet() {
        let inputs = MaterialInputs::default();
        assert_eq!(inputs.get(MaterialKind::PineWood).quantity_kg, 0.04);
        assert_eq!(inputs.get(MaterialKind::Adhesive).quantity_kg, 0.15);
        assert_eq!(inputs.get(MaterialKind::FinishCoat).quantity_kg, 0.17);
        assert_eq!(inputs.get(MaterialKind::IronNails).quantity_kg, 0.0);
        assert!(inputs.iter().all(|(_, line)| line.comment.is_empty()));
    }

    #[test]
    fn test_iter_follows_fixed_order() {
        let inputs = MaterialInputs::default();
        let kinds: Vec<MaterialKind> = inputs.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, MaterialKind::ALL.to_vec());
    }

    #[test]
    fn test_set_replaces_line() {
        let mut inputs = MaterialInputs::default();
        inputs.set(MaterialKind::IronNails, 0.02, "galvanized".to_string());
        let line = inputs.get(MaterialKind::IronNails);
        assert_eq!(line.quantity_kg, 0.02);
        assert_eq!(line.comment, "galvanized");
        assert_eq!(inputs.get(MaterialKind::Adhesive).quantity_kg, 0.15);
    }

    #[test]
    fn test_summary_line_format() {
        let mut inputs = MaterialInputs::default();
        inputs.get_mut(MaterialKind::PineWood).comment = "kiln dried".to_string();
        assert_eq!(
            inputs.summary_line(MaterialKind::PineWood),
            "Pine Wood Material: 0.04 kg - kiln dried"
        );
        assert_eq!(
            inputs.summary_line(MaterialKind::IronNails),
            "Iron Nails: 0.00 kg - "
        );
    }

    #[test]
    fn test_validate_rejects_negative_quantity() {
        let mut inputs = MaterialInputs::default();
        inputs.get_mut(MaterialKind::Adhesive).quantity_kg = -1.0;
        assert!(inputs.validate().is_err());
        assert!(MaterialInputs::default().validate().is_ok());
    }
}
