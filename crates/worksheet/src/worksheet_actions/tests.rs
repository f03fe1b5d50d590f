use super::*;
use crate::commute::CommuteParameters;
use crate::equipment::{EquipmentEntry, PoweredKind};
use crate::materials::MaterialKind;
use crate::worksheet_error::WorksheetError;

#[test]
fn test_worksheet_action_serialization() {
    let action = WorksheetAction::AddEquipment {
        entry: EquipmentEntry::Powered {
            kind: PoweredKind::GantryNailer,
            power_kw: 4.0,
            minutes_per_10sqm: 6.5,
        },
    };
    let json = serde_json::to_string(&action).unwrap();
    let decoded: WorksheetAction = serde_json::from_str(&json).unwrap();
    assert_eq!(action, decoded);

    let action = WorksheetAction::SetCommute {
        params: CommuteParameters::default(),
    };
    let json = serde_json::to_string(&action).unwrap();
    let decoded: WorksheetAction = serde_json::from_str(&json).unwrap();
    assert_eq!(action, decoded);
}

#[test]
fn test_worksheet_action_json_shape() {
    let json = r#"{"SetMaterial":{"material":"IronNails","quantity_kg":0.02,"comment":"zinc"}}"#;
    let action: WorksheetAction = serde_json::from_str(json).unwrap();
    assert_eq!(
        action,
        WorksheetAction::SetMaterial {
            material: MaterialKind::IronNails,
            quantity_kg: 0.02,
            comment: "zinc".to_string(),
        }
    );

    let json = r#""ConfirmResults""#;
    let action: WorksheetAction = serde_json::from_str(json).unwrap();
    assert_eq!(action, WorksheetAction::ConfirmResults);
}

#[test]
fn test_action_result_from_result() {
    assert_eq!(ActionResult::from(Ok(())), ActionResult::Success);
    let err = WorksheetError::missing("no equipment added");
    let result = ActionResult::from(Err(err.clone()));
    assert!(!result.is_success());
    assert_eq!(result.error(), Some(&err));
}

#[test]
fn test_action_result_serialization() {
    let res = ActionResult::Error(WorksheetError::invalid("power_kw", "must be at least 0"));
    let json = serde_json::to_string(&res).unwrap();
    let decoded: ActionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(res, decoded);
}
