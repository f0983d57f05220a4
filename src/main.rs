//! Congress age report binary.
//!
//! Reads the legislator datasets from the working directory, builds the
//! report table, and renders the standard chart set under `fig/`.
//!
//! # Usage
//!
//! ```bash
//! # Run from the directory holding the data files
//! congress-age
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use anyhow::Result;
use log::info;

use congress_age::config::ReportConfig;
use congress_age::parsing::read_life_expectancy;
use congress_age::preprocessing::ReportPipeline;
use congress_age::render::render_report;
use congress_age::services::{build_report_views, life_expectancy_series};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ReportConfig::default();
    info!(
        "Building report from {} and {}",
        config.historical_path.display(),
        config.current_path.display()
    );

    let result = ReportPipeline::with_config(config.clone()).run()?;
    if !result.skipped.is_empty() {
        info!("Skipped {} records during load:", result.skipped.len());
        for skip in &result.skipped {
            info!("  [{}] {}", skip.index, skip.reason);
        }
    }

    let views = build_report_views(&result.rows, config.cutoff);

    let overlay = if config.life_expectancy_path.exists() {
        let rows = read_life_expectancy(&config.life_expectancy_path)?;
        Some(life_expectancy_series(&rows, config.cutoff))
    } else {
        info!(
            "No life-expectancy file at {}; skipping the overlay chart",
            config.life_expectancy_path.display()
        );
        None
    };

    let written = render_report(&views, overlay.as_deref(), &config.output_dir)?;
    info!(
        "Wrote {} charts to {}",
        written.len(),
        config.output_dir.display()
    );

    Ok(())
}
