//! Domain row types for the congress-age pipeline.
//!
//! This module provides the table rows the pipeline derives, one type per
//! stage: [`TermRow`] (normalized), [`CleanRow`] (birthday parsed),
//! [`ExpandedRow`] (one row per in-term year-end date), and [`ReportRow`]
//! (age attached). Each stage produces a new table from the previous one;
//! rows are never mutated in place.

use std::fmt;

use chrono::NaiveDate;

/// Gender of a legislator, as coded in the source datasets.
///
/// The congress-legislators files record gender as a single-letter code,
/// `"F"` or `"M"`. Any other value fails normalization of the record.
///
/// # Examples
///
/// ```
/// use congress_age::core::domain::Gender;
///
/// assert_eq!(Gender::from_code("F"), Some(Gender::Female));
/// assert_eq!(Gender::from_code("female"), None);
/// assert_eq!(Gender::Male.to_string(), "M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Parses a dataset gender code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "F" => Some(Gender::Female),
            "M" => Some(Gender::Male),
            _ => None,
        }
    }

    /// Single-letter label used in chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "F",
            Gender::Male => "M",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chamber of Congress a term was served in.
///
/// The source datasets code the chamber as the term `type`: `"rep"` for the
/// House of Representatives, `"sen"` for the Senate. Any other value fails
/// normalization of the record.
///
/// # Examples
///
/// ```
/// use congress_age::core::domain::Chamber;
///
/// assert_eq!(Chamber::from_code("rep"), Some(Chamber::House));
/// assert_eq!(Chamber::from_code("gov"), None);
/// assert_eq!(Chamber::Senate.to_string(), "Senate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    /// Parses a dataset term-type code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "rep" => Some(Chamber::House),
            "sen" => Some(Chamber::Senate),
            _ => None,
        }
    }

    /// Chamber name used in chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            Chamber::House => "House",
            Chamber::Senate => "Senate",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One flattened row per (person, term) pair, straight out of normalization.
///
/// Identity fields repeat on every term row of the same person; term fields
/// come from the matching term record. `birthday` and `party` stay optional
/// here: a missing birthday drops the row in the cleaning stage, and a
/// missing party becomes its own reporting category rather than an error.
///
/// # Fields
///
/// * `name` - First and last name joined with a single space
/// * `birthday` - Raw `YYYY-MM-DD` date string, if recorded
/// * `gender` - Gender code, required at normalization
/// * `term_start` - Raw term start date string
/// * `term_end` - Raw term end date string
/// * `chamber` - Chamber the term was served in
/// * `party` - Party affiliation for this term, if recorded
#[derive(Debug, Clone, PartialEq)]
pub struct TermRow {
    pub name: String,
    pub birthday: Option<String>,
    pub gender: Gender,
    pub term_start: String,
    pub term_end: String,
    pub chamber: Chamber,
    pub party: Option<String>,
}

/// A [`TermRow`] that passed birthday cleaning.
///
/// The birthday is guaranteed present and parsed. Term bounds remain raw
/// strings until the expansion stage parses them.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRow {
    pub name: String,
    pub birthday: NaiveDate,
    pub gender: Gender,
    pub term_start: String,
    pub term_end: String,
    pub chamber: Chamber,
    pub party: Option<String>,
}

/// One row per (term, year-end business date) combination.
///
/// Term bounds are parsed dates here, and `date` is one of the year-end
/// business dates inside the closed `[term_start, term_end]` interval.
/// A term whose interval contains no year-end date produces no rows at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedRow {
    pub name: String,
    pub birthday: NaiveDate,
    pub gender: Gender,
    pub term_start: NaiveDate,
    pub term_end: NaiveDate,
    pub chamber: Chamber,
    pub party: Option<String>,
    pub date: NaiveDate,
}

/// Final report-table row: an [`ExpandedRow`] with the derived age.
///
/// `age_at_t` is the approximate age in whole years at `date`, computed as
/// floor(day count / 365) with no calendar correction. Negative values are
/// possible when the data carries a date before the recorded birthday; they
/// pass through unfiltered unless the reporting layer filters them.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use congress_age::core::domain::{Chamber, Gender, ReportRow};
///
/// let row = ReportRow {
///     name: "Strom Thurmond".to_string(),
///     birthday: NaiveDate::from_ymd_opt(1902, 12, 5).unwrap(),
///     gender: Gender::Male,
///     term_start: NaiveDate::from_ymd_opt(1956, 11, 7).unwrap(),
///     term_end: NaiveDate::from_ymd_opt(1961, 1, 3).unwrap(),
///     chamber: Chamber::Senate,
///     party: None,
///     date: NaiveDate::from_ymd_opt(1956, 12, 31).unwrap(),
///     age_at_t: 54,
/// };
/// assert_eq!(row.party_label(), "Unknown");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub birthday: NaiveDate,
    pub gender: Gender,
    pub term_start: NaiveDate,
    pub term_end: NaiveDate,
    pub chamber: Chamber,
    pub party: Option<String>,
    pub date: NaiveDate,
    pub age_at_t: i64,
}

impl ReportRow {
    /// Party label used for grouping; an absent party reads as `"Unknown"`.
    pub fn party_label(&self) -> &str {
        self.party.as_deref().unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::from_code("F"), Some(Gender::Female));
        assert_eq!(Gender::from_code("M"), Some(Gender::Male));
        assert_eq!(Gender::from_code("m"), None);
        assert_eq!(Gender::from_code(""), None);
    }

    #[test]
    fn test_chamber_codes() {
        assert_eq!(Chamber::from_code("rep"), Some(Chamber::House));
        assert_eq!(Chamber::from_code("sen"), Some(Chamber::Senate));
        assert_eq!(Chamber::from_code("house"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Gender::Female.label(), "F");
        assert_eq!(Chamber::House.label(), "House");
        assert_eq!(format!("{}", Chamber::Senate), "Senate");
    }

    #[test]
    fn test_party_label_defaults_to_unknown() {
        let mut row = ReportRow {
            name: "Test Person".to_string(),
            birthday: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
            gender: Gender::Female,
            term_start: NaiveDate::from_ymd_opt(1991, 1, 3).unwrap(),
            term_end: NaiveDate::from_ymd_opt(1993, 1, 3).unwrap(),
            chamber: Chamber::House,
            party: Some("Democrat".to_string()),
            date: NaiveDate::from_ymd_opt(1991, 12, 31).unwrap(),
            age_at_t: 41,
        };
        assert_eq!(row.party_label(), "Democrat");

        row.party = None;
        assert_eq!(row.party_label(), "Unknown");
    }
}
