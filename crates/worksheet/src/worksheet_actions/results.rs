use serde::{Deserialize, Serialize};

use crate::worksheet_error::WorksheetError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ActionResult {
    Success,
    Error(WorksheetError),
}

impl ActionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success)
    }

    pub fn error(&self) -> Option<&WorksheetError> {
        match self {
            ActionResult::Error(err) => Some(err),
            ActionResult::Success => None,
        }
    }
}

impl From<Result<(), WorksheetError>> for ActionResult {
    fn from(result: Result<(), WorksheetError>) -> Self {
        match result {
            Ok(()) => ActionResult::Success,
            Err(err) => ActionResult::Error(err),
        }
    }
}
