//! Parsing of the life-expectancy reference CSV.
//!
//! The overlay chart compares congressional mean age against the national
//! life expectancy at birth, read from an NCHS-style CSV export with one
//! row per (year, race, sex) combination.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One row of the life-expectancy reference file.
///
/// Column names follow the NCHS export. The value column can be blank,
/// which reads as `None`; the death-rate column in the export is not
/// captured because nothing consumes it.
#[derive(Debug, Clone, Deserialize)]
pub struct LifeExpectancyRow {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Race")]
    pub race: String,
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename = "Average Life Expectancy (Years)")]
    pub life_expectancy: Option<f64>,
}

impl LifeExpectancyRow {
    /// Whether this row covers the whole population (all races, both
    /// sexes), the only slice the overlay chart uses.
    pub fn is_overall(&self) -> bool {
        self.race == "All Races" && self.sex == "Both Sexes"
    }
}

/// Read the life-expectancy reference file.
///
/// Any row that does not match the expected columns is fatal; the overlay
/// input is reference data and is either usable or not.
pub fn read_life_expectancy(path: &Path) -> Result<Vec<LifeExpectancyRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open life-expectancy file: {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: LifeExpectancyRow = record
            .with_context(|| format!("Failed to parse life-expectancy file: {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}
