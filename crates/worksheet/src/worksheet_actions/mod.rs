pub mod actions;
pub mod executor;
pub mod plugin;
pub mod queue;
pub mod result_log;
pub mod results;

pub use actions::*;
pub use executor::execute_queued_actions;
pub use plugin::WorksheetActionsPlugin;
pub use queue::*;
pub use result_log::{ActionResultLog, LoggedAction};
pub use results::*;

#[cfg(test)]
mod tests;
