//! Results window: the summary table and the three bar charts built by the
//! last successful confirmation.

mod table;
mod ui_system;

pub use ui_system::results_window_ui;
