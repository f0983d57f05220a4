//! Dataset loading and end-to-end pipeline orchestration.
//!
//! # Modules
//!
//! - [`loader`]: Read and concatenate the input files, skipping malformed records
//! - [`pipeline`]: The Load -> Clean -> Expand -> Derive stage sequence

pub mod loader;
pub mod pipeline;


pub use loader::{load_term_rows, normalize_records, LoadResult, SkippedRecord};
pub use pipeline::{build_report_table, PipelineResult, PipelineStats, ReportPipeline};
