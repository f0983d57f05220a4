//! Year-end business-date calendar.
//!
//! The pipeline samples every term at year-end business dates: the last
//! weekday on or before December 31, adjusted for weekends only. There is
//! no holiday calendar.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Returns the year-end business date for a calendar year.
///
/// December 31 moves back to the preceding Friday when it falls on a
/// weekend; weekdays stand as they are.
///
/// # Arguments
/// * `year` - Calendar year
///
/// # Returns
/// * The last weekday on or before December 31, or `None` for years outside
///   the supported calendar range
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use congress_age::time::year_end_business_date;
///
/// // 2000-12-31 is a Sunday, so the business year end is Friday the 29th
/// assert_eq!(
///     year_end_business_date(2000),
///     NaiveDate::from_ymd_opt(2000, 12, 29)
/// );
/// // 2001-12-31 is a Monday and stands
/// assert_eq!(
///     year_end_business_date(2001),
///     NaiveDate::from_ymd_opt(2001, 12, 31)
/// );
/// ```
pub fn year_end_business_date(year: i32) -> Option<NaiveDate> {
    let dec31 = NaiveDate::from_ymd_opt(year, 12, 31)?;
    let adjusted = match dec31.weekday() {
        Weekday::Sat => dec31 - Duration::days(1),
        Weekday::Sun => dec31 - Duration::days(2),
        _ => dec31,
    };
    Some(adjusted)
}

/// Returns the ordered year-end business dates inside a closed interval.
///
/// # Arguments
/// * `start` - Inclusive lower bound
/// * `end` - Inclusive upper bound
///
/// # Returns
/// * Ascending year-end business dates within `[start, end]`; empty when
///   the interval crosses no year-end boundary or `end < start`
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use congress_age::time::year_ends_in_range;
///
/// let start = NaiveDate::from_ymd_opt(2001, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2001, 12, 31).unwrap();
/// assert_eq!(year_ends_in_range(start, end).len(), 1);
/// ```
pub fn year_ends_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if end < start {
        return Vec::new();
    }
    (start.year()..=end.year())
        .filter_map(year_end_business_date)
        .filter(|date| *date >= start && *date <= end)
        .collect()
}
