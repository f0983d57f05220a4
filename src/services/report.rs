//! Standard filters and view assembly for the report charts.
//!
//! Every chart reads from one of the views built here. The reporting
//! cutoff applies to all of them; the remaining filters each feed the
//! specific chart that wants them.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::core::domain::ReportRow;
use crate::parsing::csv_parser::LifeExpectancyRow;
use crate::services::aggregation::{
    age_stats_by_date, mean_age_by_date, mean_age_by_group, AgeStats, SeriesPoint,
};
use crate::time::year_end_business_date;

/// Parties large enough to chart on their own.
pub const MAJOR_PARTIES: [&str; 3] = ["Democrat", "Republican", "Independent"];

/// Drop rows dated after the reporting cutoff.
pub fn apply_cutoff(rows: &[ReportRow], cutoff: NaiveDate) -> Vec<ReportRow> {
    rows.iter().filter(|r| r.date <= cutoff).cloned().collect()
}

/// Keep only rows with a strictly positive derived age.
///
/// No default view applies this filter. A non-positive age always means a
/// bad source date, so this is kept available for data-quality checks.
pub fn positive_ages(rows: &[ReportRow]) -> Vec<ReportRow> {
    rows.iter().filter(|r| r.age_at_t > 0).cloned().collect()
}

/// Keep only rows dated in 1900 or later.
pub fn modern_era(rows: &[ReportRow]) -> Vec<ReportRow> {
    rows.iter()
        .filter(|r| r.date.year() >= 1900)
        .cloned()
        .collect()
}

/// Keep only rows whose party is one of [`MAJOR_PARTIES`].
pub fn major_parties(rows: &[ReportRow]) -> Vec<ReportRow> {
    rows.iter()
        .filter(|r| MAJOR_PARTIES.contains(&r.party_label()))
        .cloned()
        .collect()
}

/// The fixed set of filtered, aggregated views the charts draw from.
#[derive(Debug, Clone)]
pub struct ReportViews {
    /// Mean age per date, whole table.
    pub mean_age: Vec<SeriesPoint>,
    /// Mean, median, min, and max age per date, whole table.
    pub age_stats: Vec<AgeStats>,
    /// Same statistics restricted to dates from 1900 on.
    pub age_stats_modern: Vec<AgeStats>,
    /// Mean age per date, split by chamber.
    pub by_chamber: BTreeMap<String, Vec<SeriesPoint>>,
    /// Mean age per date, split by gender.
    pub by_gender: BTreeMap<String, Vec<SeriesPoint>>,
    /// Mean age per date, split by party; absent party groups as "Unknown".
    pub by_party: BTreeMap<String, Vec<SeriesPoint>>,
    /// Mean age per date, major parties only.
    pub by_major_party: BTreeMap<String, Vec<SeriesPoint>>,
}

/// Assemble every standard view from the report table.
///
/// The cutoff applies to all views; [`positive_ages`] applies to none.
pub fn build_report_views(rows: &[ReportRow], cutoff: NaiveDate) -> ReportViews {
    let rows = apply_cutoff(rows, cutoff);
    let majors = major_parties(&rows);
    let modern = modern_era(&rows);

    ReportViews {
        mean_age: mean_age_by_date(&rows),
        age_stats: age_stats_by_date(&rows),
        age_stats_modern: age_stats_by_date(&modern),
        by_chamber: mean_age_by_group(&rows, |r| r.chamber.to_string()),
        by_gender: mean_age_by_group(&rows, |r| r.gender.to_string()),
        by_party: mean_age_by_group(&rows, |r| r.party_label().to_string()),
        by_major_party: mean_age_by_group(&majors, |r| r.party_label().to_string()),
    }
}

/// Build the overlay series from the life-expectancy table.
///
/// Only the overall-population rows carry over. Each year maps onto the
/// same year-end business date the report table uses, so the two series
/// share an x axis.
pub fn life_expectancy_series(rows: &[LifeExpectancyRow], cutoff: NaiveDate) -> Vec<SeriesPoint> {
    let mut series: Vec<SeriesPoint> = rows
        .iter()
        .filter(|r| r.is_overall())
        .filter_map(|r| {
            let value = r.life_expectancy?;
            let date = year_end_business_date(r.year)?;
            if date <= cutoff {
                Some(SeriesPoint { date, value })
            } else {
                None
            }
        })
        .collect();
    series.sort_by_key(|p| p.date);
    series
}
