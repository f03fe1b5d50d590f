use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::WorksheetAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSource {
    /// Buttons in the worksheet window.
    Analyst,
    /// Commands read by `--agent` mode.
    Agent,
}

impl ActionSource {
    pub fn label(self) -> &'static str {
        match self {
            ActionSource::Analyst => "analyst",
            ActionSource::Agent => "agent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedAction {
    pub source: ActionSource,
    pub action: WorksheetAction,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionQueue {
    pending: Vec<QueuedAction>,
}

impl ActionQueue {
    pub fn push(&mut self, source: ActionSource, action: WorksheetAction) {
        self.pending.push(QueuedAction { source, action });
    }

    pub fn drain(&mut self) -> Vec<QueuedAction> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::EquipmentEntry;

    #[test]
    fn push_and_drain_preserves_fifo() {
        let mut queue = ActionQueue::default();
        queue.push(
            ActionSource::Analyst,
            WorksheetAction::AddEquipment {
                entry: EquipmentEntry::ForkliftTransport {
                    weight_kg: 10.0,
                    distance_m: 5.0,
                },
            },
        );
        queue.push(ActionSource::Agent, WorksheetAction::ConfirmResults);

        assert_eq!(queue.len(), 2);
        assert!(!queue.is_empty());

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());

        assert_eq!(drained[0].source, ActionSource::Analyst);
        assert!(matches!(
            drained[0].action,
            WorksheetAction::AddEquipment { .. }
        ));
        assert_eq!(drained[1].source, ActionSource::Agent);
        assert_eq!(drained[1].action, WorksheetAction::ConfirmResults);
    }
}
