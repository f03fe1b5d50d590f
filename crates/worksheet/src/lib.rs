use bevy::prelude::*;

pub mod agent_protocol;
pub mod commute;
pub mod config;
pub mod equipment;
pub mod factory;
pub mod materials;
pub mod session;
pub mod summary;
pub mod units;
pub mod worksheet_actions;
pub mod worksheet_error;

#[cfg(test)]
pub mod test_harness;

/// Ordering of the per-frame worksheet pipeline: derived values are
/// refreshed from the inputs before queued actions (including confirmation)
/// run against them.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorksheetSet {
    Derive,
    Actions,
}

/// Core worksheet state and calculations, without any rendering.
pub struct WorksheetPlugin;

impl Plugin for WorksheetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<session::WorksheetSession>()
            .init_resource::<commute::CommuteParameters>()
            .init_resource::<factory::FactoryParameters>()
            .init_resource::<materials::MaterialInputs>()
            .init_resource::<summary::SummaryState>()
            .configure_sets(Update, (WorksheetSet::Derive, WorksheetSet::Actions).chain())
            .add_systems(
                Update,
                (
                    session::refresh_derived_values,
                    summary::dismiss_stale_summary,
                )
                    .chain()
                    .in_set(WorksheetSet::Derive),
            );

        app.add_plugins(worksheet_actions::WorksheetActionsPlugin);
    }
}
