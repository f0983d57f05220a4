//! Per-date age aggregation over the report table.
//!
//! Every chart series is a fold of the report table grouped by date, so
//! the functions here all return date-ordered output. Grouping goes
//! through a `BTreeMap` keyed on the date (and the group label, where one
//! applies), which keeps series order and legend order deterministic.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::core::domain::ReportRow;

/// One point of a dated chart series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Age statistics over all members serving on one date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeStats {
    pub date: NaiveDate,
    pub mean: f64,
    pub median: f64,
    pub min: i64,
    pub max: i64,
}

/// Compute the mean of a set of ages.
fn mean(ages: &[i64]) -> f64 {
    if ages.is_empty() {
        return 0.0;
    }
    let sum: i64 = ages.iter().sum();
    sum as f64 / ages.len() as f64
}

/// Compute the median of a set of ages.
fn median(ages: &[i64]) -> f64 {
    if ages.is_empty() {
        return 0.0;
    }

    let mut sorted = ages.to_vec();
    sorted.sort_unstable();
    let count = sorted.len();
    if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) as f64 / 2.0
    } else {
        sorted[count / 2] as f64
    }
}

/// Group the ages in a table by report date.
fn ages_by_date(rows: &[ReportRow]) -> BTreeMap<NaiveDate, Vec<i64>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<i64>> = BTreeMap::new();
    for row in rows {
        grouped.entry(row.date).or_default().push(row.age_at_t);
    }
    grouped
}

/// Mean age per report date, in date order.
pub fn mean_age_by_date(rows: &[ReportRow]) -> Vec<SeriesPoint> {
    ages_by_date(rows)
        .into_iter()
        .map(|(date, ages)| SeriesPoint {
            date,
            value: mean(&ages),
        })
        .collect()
}

/// Mean, median, min, and max age per report date, in date order.
pub fn age_stats_by_date(rows: &[ReportRow]) -> Vec<AgeStats> {
    ages_by_date(rows)
        .into_iter()
        .map(|(date, ages)| AgeStats {
            date,
            mean: mean(&ages),
            median: median(&ages),
            min: ages.iter().copied().min().unwrap_or(0),
            max: ages.iter().copied().max().unwrap_or(0),
        })
        .collect()
}

/// Mean age per report date within each group produced by `key`.
///
/// Group labels map to date-ordered series, and the map itself iterates
/// in label order, so a chart legend drawn from it is stable across runs.
pub fn mean_age_by_group<F>(rows: &[ReportRow], key: F) -> BTreeMap<String, Vec<SeriesPoint>>
where
    F: Fn(&ReportRow) -> String,
{
    let mut grouped: BTreeMap<String, BTreeMap<NaiveDate, Vec<i64>>> = BTreeMap::new();
    for row in rows {
        grouped
            .entry(key(row))
            .or_default()
            .entry(row.date)
            .or_default()
            .push(row.age_at_t);
    }

    grouped
        .into_iter()
        .map(|(label, by_date)| {
            let series = by_date
                .into_iter()
                .map(|(date, ages)| SeriesPoint {
                    date,
                    value: mean(&ages),
                })
                .collect();
            (label, series)
        })
        .collect()
}

/// Project one statistic out of a stats series for charting.
pub fn stats_series(stats: &[AgeStats], pick: fn(&AgeStats) -> f64) -> Vec<SeriesPoint> {
    stats
        .iter()
        .map(|s| SeriesPoint {
            date: s.date,
            value: pick(s),
        })
        .collect()
}
