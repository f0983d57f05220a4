//! Run configuration for the report build.

use chrono::NaiveDate;
use std::path::PathBuf;

/// Input locations, output directory, and the reporting cutoff date.
///
/// The defaults match the layout the report is usually run from: both
/// legislator files and the life expectancy table next to the binary,
/// charts written under `fig/`.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Historical legislators file (members no longer serving).
    pub historical_path: PathBuf,
    /// Current legislators file (members serving today).
    pub current_path: PathBuf,
    /// Optional life expectancy table for the overlay chart.
    pub life_expectancy_path: PathBuf,
    /// Directory the chart files are written into.
    pub output_dir: PathBuf,
    /// Report rows dated after this are excluded from every view.
    pub cutoff: NaiveDate,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            historical_path: PathBuf::from("legislators-historical.json"),
            current_path: PathBuf::from("legislators-current.json"),
            life_expectancy_path: PathBuf::from("life-expectancy.csv"),
            output_dir: PathBuf::from("fig"),
            cutoff: NaiveDate::from_ymd_opt(2020, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}
