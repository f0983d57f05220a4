//! Stage sequencing for the report table build.
//!
//! The pipeline chains the loader and the transformation stages in a
//! fixed order: load, clean, expand, derive. Each stage consumes the
//! previous stage's output, so a fatal error in any stage aborts the
//! run with context naming the stage that failed.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::ReportConfig;
use crate::core::domain::ReportRow;
use crate::preprocessing::loader::{load_term_rows, SkippedRecord};
use crate::transformations::{clean_rows, derive_ages, expand_rows};

/// Row and skip counts observed at each pipeline stage.
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    pub records_read: usize,
    pub records_skipped: usize,
    pub term_rows: usize,
    pub cleaned_rows: usize,
    pub report_rows: usize,
}

/// Finished report table plus the loader's skip diagnostics.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub rows: Vec<ReportRow>,
    pub skipped: Vec<SkippedRecord>,
    pub stats: PipelineStats,
}

/// Runs the full table build from the configured input files.
///
/// # Example
///
/// ```no_run
/// use congress_age::config::ReportConfig;
/// use congress_age::preprocessing::ReportPipeline;
///
/// let pipeline = ReportPipeline::new();
/// let result = pipeline.run().expect("pipeline failed");
/// println!("{} report rows", result.rows.len());
/// ```
pub struct ReportPipeline {
    config: ReportConfig,
}

impl ReportPipeline {
    /// Create a pipeline with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ReportConfig::default(),
        }
    }

    /// Create a pipeline with a custom configuration.
    pub fn with_config(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Build the report table.
    pub fn run(&self) -> Result<PipelineResult> {
        // Step 1: Load both legislator files and normalize to term rows
        let loaded = load_term_rows(&self.config.historical_path, &self.config.current_path)?;
        info!(
            "Loaded {} term rows from {} records ({} skipped)",
            loaded.rows.len(),
            loaded.records_read,
            loaded.skipped.len()
        );

        let records_read = loaded.records_read;
        let records_skipped = loaded.skipped.len();
        let term_rows = loaded.rows.len();

        // Step 2: Drop rows without a birthday and parse the rest
        let cleaned =
            clean_rows(loaded.rows).context("Failed to clean the loaded table")?;
        let cleaned_count = cleaned.len();
        debug!("Cleaned table has {} rows", cleaned_count);

        // Step 3: Expand each term into one row per year-end business date
        let expanded = expand_rows(cleaned).context("Failed to expand term rows")?;
        debug!("Expanded table has {} rows", expanded.len());

        // Step 4: Derive the approximate age at each date
        let rows = derive_ages(expanded);
        info!("Report table has {} rows", rows.len());

        Ok(PipelineResult {
            stats: PipelineStats {
                records_read,
                records_skipped,
                term_rows,
                cleaned_rows: cleaned_count,
                report_rows: rows.len(),
            },
            skipped: loaded.skipped,
            rows,
        })
    }
}

impl Default for ReportPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the report table with the given configuration.
///
/// Convenience wrapper around [`ReportPipeline::run`].
pub fn build_report_table(config: ReportConfig) -> Result<PipelineResult> {
    ReportPipeline::with_config(config).run()
}
