//! Age derivation stage.

use chrono::NaiveDate;

use crate::core::domain::{ExpandedRow, ReportRow};

/// Days-per-year divisor of the approximate age computation.
const DAYS_PER_YEAR: i64 = 365;

/// Approximate age in whole years at `date` for a person born on
/// `birthday`.
///
/// Divides the signed day count by 365 and floors. This is deliberately not
/// calendar-accurate (no leap-year handling, no birthday-month comparison);
/// downstream comparisons assume exactly this convention. A date before the
/// birthday yields a negative age.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use congress_age::transformations::age_at;
///
/// let birthday = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
/// let date = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap();
/// assert_eq!(age_at(birthday, date), 51);
/// ```
pub fn age_at(birthday: NaiveDate, date: NaiveDate) -> i64 {
    (date - birthday).num_days().div_euclid(DAYS_PER_YEAR)
}

/// Attach `age_at_t` to every expanded row, yielding the report table.
pub fn derive_ages(rows: Vec<ExpandedRow>) -> Vec<ReportRow> {
    rows.into_iter()
        .map(|row| {
            let age_at_t = age_at(row.birthday, row.date);
            ReportRow {
                name: row.name,
                birthday: row.birthday,
                gender: row.gender,
                term_start: row.term_start,
                term_end: row.term_end,
                chamber: row.chamber,
                party: row.party,
                date: row.date,
                age_at_t,
            }
        })
        .collect()
}
