//! Pipeline transformation stages.
//!
//! Each stage is a pure function taking the previous stage's table by value
//! and returning a new one. The stages run in a fixed sequence:
//! [`cleaning`] drops rows without birthdays, [`expansion`] multiplies each
//! term into one row per in-term year-end business date, and [`derivation`]
//! attaches the approximate age.
//!
//! # Modules
//!
//! - [`cleaning`]: Drop rows without a birthday, parse the remainder
//! - [`expansion`]: One row per year-end business date within each term
//! - [`derivation`]: Approximate age at each attached date

pub mod cleaning;
pub mod derivation;
pub mod expansion;

pub use cleaning::clean_rows;
pub use derivation::{age_at, derive_ages};
pub use expansion::expand_rows;

use chrono::NaiveDate;

use crate::core::error::DateParseError;

/// Parse a `YYYY-MM-DD` date string, attaching field and record context on
/// failure. Date parse failures are fatal for the run.
pub fn parse_date(
    field: &'static str,
    value: &str,
    record: &str,
) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| DateParseError {
        field,
        value: value.to_string(),
        record: record.to_string(),
        source,
    })
}
