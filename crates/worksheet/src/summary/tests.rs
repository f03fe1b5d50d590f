//! Unit tests for summary generation.

#[cfg(test)]
mod tests {
    use crate::commute::{CommuteDistances, CommuteParameters};
    use crate::equipment::{EquipmentEntry, PoweredKind};
    use crate::factory::FactoryParameters;
    use crate::materials::{MaterialInputs, MaterialKind};
    use crate::session::WorksheetSession;
    use crate::summary::{Palette, Summary, SummaryState, SummaryTable};
    use crate::worksheet_error::WorksheetError;

    fn populated_session() -> WorksheetSession {
        let mut session = WorksheetSession::default();
        session.add_equipment(EquipmentEntry::Powered {
            kind: PoweredKind::IndustrialWoodCutting,
            power_kw: 12.0,
            minutes_per_10sqm: 15.0,
        });
        session.add_equipment(EquipmentEntry::ForkliftTransport {
            weight_kg: 500.0,
            distance_m: 80.0,
        });
        session.update_commute(&CommuteParameters::default());
        session.update_factory(&FactoryParameters::default());
        let mut materials = MaterialInputs::default();
        materials.get_mut(MaterialKind::Adhesive).comment = "PUR".to_string();
        session.update_materials(&materials);
        session
    }

    #[test]
    fn test_summary_requires_equipment() {
        let mut session = populated_session();
        session.equipment = Default::default();
        let err = Summary::build(&session).unwrap_err();
        assert_eq!(err, WorksheetError::missing("no equipment added"));
    }

    #[test]
    fn test_summary_requires_derived_values() {
        let mut session = populated_session();
        session.commute = None;
        assert!(matches!(
            Summary::build(&session),
            Err(WorksheetError::MissingState(_))
        ));
    }

    #[test]
    fn test_table_has_nine_rows_in_order() {
        let summary = Summary::build(&populated_session()).unwrap();
        let categories: Vec<&str> = summary
            .table
            .rows
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(
            categories,
            vec![
                "Total Equipment Energy Consumption (kWh)",
                "Total Heating Energy Consumption for 10m² (GJ)",
                "Total Lighting Energy Consumption for 10m² (kWh)",
                "Total Commute Distance for Workers Using Car (km)",
                "Total Commute Distance for Workers Using Public Transport (km)",
                "Pine Wood Material (kg)",
                "Adhesive (kg)",
                "Finish Coat (kg)",
                "Iron Nails (kg)",
            ]
        );
    }

    #[test]
    fn test_table_rounding_per_category() {
        let summary = Summary::build(&populated_session()).unwrap();
        let rows = &summary.table.rows;
        // 12 kW * 0.25 h + 0.5 t * 80 * 0.0087 = 3.348
        assert_eq!(rows[0].value, 3.35);
        assert_eq!(rows[0].formatted_value(), "3.35");
        assert_eq!(rows[1].value, 0.2917);
        assert_eq!(rows[1].formatted_value(), "0.2917");
        assert_eq!(rows[2].formatted_value(), "7.0000");
        assert_eq!(rows[3].value, 38.4);
        assert_eq!(rows[4].value, 9.6);
        assert_eq!(rows[5].value, 0.04);
    }

    #[test]
    fn test_comments_only_on_material_rows() {
        let summary = Summary::build(&populated_session()).unwrap();
        let rows = &summary.table.rows;
        assert!(rows[..5].iter().all(|r| r.comment.is_empty()));
        assert_eq!(rows[6].comment, "PUR");
    }

    #[test]
    fn test_max_value_highlight_index() {
        let summary = Summary::build(&populated_session()).unwrap();
        // Car distance (38.4 km) is the largest raw figure.
        assert_eq!(summary.table.max_value_indices(), vec![3]);
    }

    #[test]
    fn test_max_value_highlight_includes_ties() {
        let table = SummaryTable::new(
            1.0,
            &FactoryParameters::default().energy().unwrap(),
            &CommuteDistances {
                car_km: 24.0,
                public_transport_km: 24.0,
            },
            &MaterialInputs::default(),
        );
        assert_eq!(table.max_value_indices(), vec![3, 4]);
    }

    #[test]
    fn test_max_value_highlight_empty_table() {
        let table = SummaryTable { rows: Vec::new() };
        assert!(table.max_value_indices().is_empty());
    }

    #[test]
    fn test_energy_chart_converts_heating_to_kwh() {
        let summary = Summary::build(&populated_session()).unwrap();
        let bars = &summary.energy_chart.bars;
        assert_eq!(bars.len(), 3);
        let heating_gj = FactoryParameters::default().energy().unwrap().heating_gj;
        assert_eq!(bars[1].value, heating_gj * 277.78);
        assert_eq!(bars[1].annotation(), "81.02");
        assert_eq!(summary.energy_chart.palette, Palette::Viridis);
    }

    #[test]
    fn test_commute_and_material_charts() {
        let summary = Summary::build(&populated_session()).unwrap();
        let commute: Vec<&str> = summary
            .commute_chart
            .bars
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(commute, vec!["Car", "Public Transport"]);
        assert_eq!(summary.commute_chart.bars[0].annotation(), "38.40");

        let materials: Vec<&str> = summary
            .material_chart
            .bars
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(materials, vec!["Pine Wood", "Adhesive", "Finish Coat", "Iron Nails"]);
        assert_eq!(summary.material_chart.max_value(), 0.17);
    }

    #[test]
    fn test_rebuilding_is_idempotent() {
        let session = populated_session();
        let first = Summary::build(&session).unwrap();
        let second = Summary::build(&session).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_palette_colors_distinct_per_bar() {
        for palette in [Palette::Viridis, Palette::Magma, Palette::Inferno] {
            let colors: Vec<[u8; 3]> = (0..4).map(|i| palette.color(i, 4)).collect();
            for i in 1..colors.len() {
                assert_ne!(colors[i - 1], colors[i], "{palette:?}");
            }
        }
    }

    #[test]
    fn test_summary_state_failure_clears_latest() {
        let mut state = SummaryState::default();
        state.record(Summary::build(&populated_session()));
        assert!(state.latest.is_some());
        assert!(state.error.is_none());

        state.record(Summary::build(&WorksheetSession::default()));
        assert!(state.latest.is_none());
        assert!(state.error.is_some());

        state.dismiss();
        assert_eq!(state, SummaryState::default());
    }
}
