//! Bar chart painting for the results window.

mod drawing;


pub use drawing::draw_bar_chart;
