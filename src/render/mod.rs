//! Chart rendering for the report.
//!
//! [`charts`] wraps the drawing backend behind two small entry points
//! for single- and multi-series line charts; [`report`] knows the fixed
//! chart set, titles, and output file names.

pub mod charts;
pub mod report;

pub use charts::{render_multi_series, render_series, CHART_SIZE};
pub use report::render_report;
