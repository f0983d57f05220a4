//! Term expansion stage.
//!
//! Turns the interval-per-term table into a long table keyed by
//! (person, term, year), the shape every downstream statistic needs.

use crate::core::domain::{CleanRow, ExpandedRow};
use crate::core::error::DateParseError;
use crate::time::year_ends_in_range;

use super::parse_date;

/// Expand each term into one row per year-end business date within the
/// closed `[term_start, term_end]` interval.
///
/// A term whose interval covers no year-end date contributes zero rows and
/// vanishes from the output; that is expected for short terms that cross no
/// year boundary. Term bounds that fail to parse are fatal.
pub fn expand_rows(rows: Vec<CleanRow>) -> Result<Vec<ExpandedRow>, DateParseError> {
    let mut expanded = Vec::new();
    for row in rows {
        let term_start = parse_date("term_start", &row.term_start, &row.name)?;
        let term_end = parse_date("term_end", &row.term_end, &row.name)?;
        for date in year_ends_in_range(term_start, term_end) {
            expanded.push(ExpandedRow {
                name: row.name.clone(),
                birthday: row.birthday,
                gender: row.gender,
                term_start,
                term_end,
                chamber: row.chamber,
                party: row.party.clone(),
                date,
            });
        }
    }
    Ok(expanded)
}
