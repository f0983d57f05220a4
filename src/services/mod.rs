//! Reporting services over the finished report table.
//!
//! This module sits between the preprocessing pipeline and the chart
//! renderer. [`aggregation`] turns report rows into dated statistic
//! series; [`report`] applies the standard filters and assembles the
//! fixed set of views every chart is drawn from.

pub mod aggregation;
pub mod report;

pub use aggregation::{
    age_stats_by_date, mean_age_by_date, mean_age_by_group, stats_series, AgeStats, SeriesPoint,
};
pub use report::{build_report_views, life_expectancy_series, ReportViews, MAJOR_PARTIES};
