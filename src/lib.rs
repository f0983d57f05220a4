//! # Congress Age
//!
//! Batch report on the age of the United States Congress over time.
//!
//! This crate reads the congress-legislators datasets (historical and
//! current members), flattens every member into per-term rows, samples
//! each term at year-end business dates, and derives the approximate age
//! of every sitting member on every sampled date. A reporting layer
//! aggregates the table into dated series and renders the standard chart
//! set as PNG files.
//!
//! ## Features
//!
//! - **Data Loading**: Parse the legislator JSON files and the
//!   life-expectancy reference CSV
//! - **Preprocessing**: Normalize person records into a flat term table,
//!   skipping malformed records with diagnostics
//! - **Transformations**: Clean, expand, and derive the report table one
//!   stage at a time
//! - **Time Handling**: Year-end business-date calendar with weekend
//!   adjustment
//! - **Reporting**: Grouped age statistics and the fixed chart set
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`core`]: Domain row types and error types
//! - [`parsing`]: JSON and CSV input parsing
//! - [`time`]: Year-end business-date calendar
//! - [`transformations`]: Table stages from term rows to report rows
//! - [`preprocessing`]: Loader and the stage-sequencing pipeline
//! - [`services`]: Aggregation and report view assembly
//! - [`render`]: Chart drawing and the report chart set
//! - [`config`]: Run configuration

pub mod config;
pub mod core;
pub mod parsing;
pub mod time;
pub mod transformations;
pub mod preprocessing;
pub mod services;
pub mod render;

pub use config::ReportConfig;
pub use preprocessing::{build_report_table, ReportPipeline};
