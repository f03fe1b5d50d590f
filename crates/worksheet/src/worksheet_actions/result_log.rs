//! Outcomes of recent worksheet actions, newest last.
//!
//! The worksheet panel shows the error of the newest entry under the
//! confirmation button; agent mode answers each `act` with it.

use std::collections::VecDeque;

use bevy::prelude::*;

use super::{ActionResult, ActionSource, WorksheetAction};
use crate::worksheet_error::WorksheetError;

const CAPACITY: usize = 64;

/// One executed action with where it came from and how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedAction {
    pub source: ActionSource,
    pub action: WorksheetAction,
    pub result: ActionResult,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ActionResultLog {
    entries: VecDeque<LoggedAction>,
}

impl ActionResultLog {
    pub fn push(&mut self, source: ActionSource, action: WorksheetAction, result: ActionResult) {
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedAction {
            source,
            action,
            result,
        });
    }

    pub fn last(&self) -> Option<&LoggedAction> {
        self.entries.back()
    }

    /// Error of the newest action from `source`, if that action failed.
    pub fn last_error_from(&self, source: ActionSource) -> Option<&WorksheetError> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.source == source)
            .and_then(|entry| entry.result.error())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
