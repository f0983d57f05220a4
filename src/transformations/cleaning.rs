//! Birthday cleaning stage.

use crate::core::domain::{CleanRow, TermRow};
use crate::core::error::DateParseError;

use super::parse_date;

/// Drop rows without a birthday and parse the rest into [`CleanRow`]s.
///
/// Missing birthdays are a known data gap: those rows are silently dropped,
/// never backfilled. An unparseable birthday string is fatal for the run.
pub fn clean_rows(rows: Vec<TermRow>) -> Result<Vec<CleanRow>, DateParseError> {
    let mut cleaned = Vec::with_capacity(rows.len());
    for row in rows {
        let raw_birthday = match row.birthday {
            Some(value) => value,
            None => continue,
        };
        let birthday = parse_date("birthday", &raw_birthday, &row.name)?;
        cleaned.push(CleanRow {
            name: row.name,
            birthday,
            gender: row.gender,
            term_start: row.term_start,
            term_end: row.term_end,
            chamber: row.chamber,
            party: row.party,
        });
    }
    Ok(cleaned)
}
