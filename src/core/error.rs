//! Error types for record normalization and date handling.
//!
//! The pipeline distinguishes two failure classes. [`MalformedRecordError`]
//! is recoverable and scoped to a single person record: the loader logs the
//! offending record and moves on. [`DateParseError`] is fatal: a date string
//! that cannot be parsed anywhere in the table aborts the run.

/// Result type for per-record normalization.
pub type NormalizeResult<T> = Result<T, MalformedRecordError>;

/// Recoverable failure of a single person record.
///
/// Raised by the record normalizer when required identity, gender, or term
/// fields are missing, or when an enum-coded field carries a value outside
/// the dataset's vocabulary. The dataset loader catches this, logs the raw
/// record, and continues; the person contributes zero rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRecordError {
    #[error("Missing required field `{0}`")]
    MissingField(String),

    #[error("Unrecognized gender code `{0}`")]
    UnknownGender(String),

    #[error("Unrecognized chamber code `{0}`")]
    UnknownChamber(String),

    #[error("Record does not match the expected shape: {0}")]
    InvalidShape(String),
}

/// Fatal failure to parse a date string.
///
/// Carries the field name and the record's display name so the abort
/// message identifies where the bad value came from.
#[derive(Debug, thiserror::Error)]
#[error("Cannot parse {field} `{value}` for record `{record}`")]
pub struct DateParseError {
    pub field: &'static str,
    pub value: String,
    pub record: String,
    #[source]
    pub source: chrono::ParseError,
}
