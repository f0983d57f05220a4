//! The fixed chart set of the standard report.
//!
//! File names match the figures the report has always shipped with, so
//! downstream consumers can keep linking to them.

use anyhow::{Context, Result};
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::charts::{render_multi_series, render_series};
use crate::services::aggregation::{stats_series, SeriesPoint};
use crate::services::report::ReportViews;

pub const MEAN_AGE_FILE: &str = "time_avgage.png";
pub const MEAN_MEDIAN_FILE: &str = "time_avgage_meanmedian.png";
pub const BY_CHAMBER_FILE: &str = "time_avgage_byhouse.png";
pub const BY_GENDER_FILE: &str = "time_avgage_bygender.png";
pub const MIN_MAX_FILE: &str = "time_minmaxage.png";
pub const MIN_MAX_MODERN_FILE: &str = "time_minmaxage_filtered.png";
pub const BY_PARTY_ALL_FILE: &str = "time_avgage_byparty_all.png";
pub const BY_PARTY_MAJOR_FILE: &str = "time_avgage_byparty_some.png";
pub const LIFE_EXPECTANCY_FILE: &str = "time_avgage_lifeexp.png";

/// Convert a grouped view into the slice shape the renderer takes.
fn grouped_series(map: &BTreeMap<String, Vec<SeriesPoint>>) -> Vec<(&str, &[SeriesPoint])> {
    map.iter()
        .map(|(label, points)| (label.as_str(), points.as_slice()))
        .collect()
}

/// Render every chart of the standard report into `output_dir`.
///
/// The life-expectancy overlay is drawn only when a series for it is
/// given. Returns the written paths, in render order.
pub fn render_report(
    views: &ReportViews,
    overlay: Option<&[SeriesPoint]>,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let mut written = Vec::new();

    let path = output_dir.join(MEAN_AGE_FILE);
    render_series(
        &path,
        "Average Age of Congress",
        "Average Age",
        &views.mean_age,
    )?;
    written.push(path);

    let path = output_dir.join(MEAN_MEDIAN_FILE);
    let mean = stats_series(&views.age_stats, |s| s.mean);
    let median = stats_series(&views.age_stats, |s| s.median);
    render_multi_series(
        &path,
        "Average and Median Age of Congress",
        "Age",
        &[("Mean", mean.as_slice()), ("Median", median.as_slice())],
    )?;
    written.push(path);

    let path = output_dir.join(BY_CHAMBER_FILE);
    render_multi_series(
        &path,
        "Average Age of Congress by House",
        "Average Age",
        &grouped_series(&views.by_chamber),
    )?;
    written.push(path);

    let path = output_dir.join(BY_GENDER_FILE);
    render_multi_series(
        &path,
        "Average Age of Congress by Gender",
        "Average Age",
        &grouped_series(&views.by_gender),
    )?;
    written.push(path);

    let path = output_dir.join(MIN_MAX_FILE);
    let min = stats_series(&views.age_stats, |s| s.min as f64);
    let max = stats_series(&views.age_stats, |s| s.max as f64);
    render_multi_series(
        &path,
        "Min and Max Age of Congress",
        "Age",
        &[("Max", max.as_slice()), ("Min", min.as_slice())],
    )?;
    written.push(path);

    let path = output_dir.join(MIN_MAX_MODERN_FILE);
    let min = stats_series(&views.age_stats_modern, |s| s.min as f64);
    let max = stats_series(&views.age_stats_modern, |s| s.max as f64);
    render_multi_series(
        &path,
        "Min and Max Age of Congress",
        "Age",
        &[("Max", max.as_slice()), ("Min", min.as_slice())],
    )?;
    written.push(path);

    let path = output_dir.join(BY_PARTY_ALL_FILE);
    render_multi_series(
        &path,
        "Average Age of Congress by Party",
        "Average Age",
        &grouped_series(&views.by_party),
    )?;
    written.push(path);

    let path = output_dir.join(BY_PARTY_MAJOR_FILE);
    render_multi_series(
        &path,
        "Average Age of Congress by (some) Party",
        "Average Age",
        &grouped_series(&views.by_major_party),
    )?;
    written.push(path);

    if let Some(expectancy) = overlay {
        let path = output_dir.join(LIFE_EXPECTANCY_FILE);
        render_multi_series(
            &path,
            "Average Age of Congress vs. Life Expectancy",
            "Age",
            &[
                ("Congress", views.mean_age.as_slice()),
                ("Life expectancy", expectancy),
            ],
        )?;
        written.push(path);
    }

    for path in &written {
        debug!("Wrote chart {}", path.display());
    }

    Ok(written)
}
