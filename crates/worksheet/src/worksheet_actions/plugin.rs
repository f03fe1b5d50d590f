use bevy::prelude::*;

use super::executor::execute_queued_actions;
use super::result_log::ActionResultLog;
use super::ActionQueue;
use crate::WorksheetSet;

/// Queue and log resources plus the executor, which runs after derived
/// values are refreshed.
pub struct WorksheetActionsPlugin;

impl Plugin for WorksheetActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionQueue>()
            .init_resource::<ActionResultLog>()
            .add_systems(Update, execute_queued_actions.in_set(WorksheetSet::Actions));
    }
}
