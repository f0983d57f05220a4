//! Parsing and normalization of congress-legislators JSON files.
//!
//! Each source file is a JSON array of person records with nested
//! `name`/`bio`/`terms` objects. The file is first decoded into raw
//! [`serde_json::Value`] records, so a single malformed record cannot
//! abort the decode of the whole array; [`normalize_person`] then flattens
//! one record at a time into [`TermRow`]s, failing per record with
//! [`MalformedRecordError`].

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::core::domain::{Chamber, Gender, TermRow};
use crate::core::error::{MalformedRecordError, NormalizeResult};

/// Raw JSON structure for a person's name
#[derive(Debug, Deserialize)]
struct RawName {
    first: Option<String>,
    last: Option<String>,
}

/// Raw JSON structure for biographical data
#[derive(Debug, Deserialize)]
struct RawBio {
    birthday: Option<String>,
    gender: Option<String>,
}

/// Raw JSON structure for a single term of service
#[derive(Debug, Deserialize)]
struct RawTerm {
    #[serde(rename = "type")]
    term_type: Option<String>,
    start: Option<String>,
    end: Option<String>,
    party: Option<String>,
}

/// Raw JSON structure for a person record as it comes from the dataset
#[derive(Debug, Deserialize)]
struct RawPerson {
    name: Option<RawName>,
    bio: Option<RawBio>,
    terms: Option<Vec<RawTerm>>,
}

/// Read a legislator file into raw person records.
///
/// Fails for unreadable files and for content that is not a JSON array;
/// individual record problems are left to [`normalize_person`].
pub fn read_person_records(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read legislator file: {}", path.display()))?;

    parse_person_records(&content)
        .with_context(|| format!("Failed to parse legislator file: {}", path.display()))
}

/// Parse legislator JSON from a string into raw person records.
///
/// The input must hold exactly one JSON array; trailing content after the
/// closing bracket is rejected.
pub fn parse_person_records(json_str: &str) -> Result<Vec<Value>> {
    let mut deserializer = serde_json::Deserializer::from_str(json_str);
    let records: Vec<Value> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|err| {
            anyhow::anyhow!(
                "Not a JSON array of person records (at `{}`): {}",
                err.path(),
                err.inner()
            )
        })?;
    deserializer
        .end()
        .map_err(|err| anyhow::anyhow!("Not a JSON array of person records: {}", err))?;
    Ok(records)
}

/// Flatten one raw person record into per-term rows.
///
/// Produces one [`TermRow`] per entry in `terms`, each carrying the
/// person's identity fields; an empty `terms` array legitimately produces
/// zero rows. `bio.birthday` and a term's `party` may be absent and are
/// carried as `None`. Everything else is required: a missing name part,
/// gender, `terms` key, or term `start`/`end`/`type` fails the whole
/// record, as does a gender or chamber code outside the dataset
/// vocabulary.
pub fn normalize_person(record: &Value) -> NormalizeResult<Vec<TermRow>> {
    let raw: RawPerson = serde_json::from_value(record.clone())
        .map_err(|err| MalformedRecordError::InvalidShape(err.to_string()))?;

    let raw_name = raw.name.ok_or_else(|| missing("name"))?;
    let first = raw_name.first.ok_or_else(|| missing("name.first"))?;
    let last = raw_name.last.ok_or_else(|| missing("name.last"))?;

    let bio = raw.bio.ok_or_else(|| missing("bio"))?;
    let gender_code = bio.gender.ok_or_else(|| missing("bio.gender"))?;
    let gender = Gender::from_code(&gender_code)
        .ok_or(MalformedRecordError::UnknownGender(gender_code))?;

    let terms = raw.terms.ok_or_else(|| missing("terms"))?;

    let name = format!("{} {}", first, last);
    let mut rows = Vec::with_capacity(terms.len());
    for (index, term) in terms.into_iter().enumerate() {
        let term_start = term
            .start
            .ok_or_else(|| missing(format!("terms[{}].start", index)))?;
        let term_end = term
            .end
            .ok_or_else(|| missing(format!("terms[{}].end", index)))?;
        let chamber_code = term
            .term_type
            .ok_or_else(|| missing(format!("terms[{}].type", index)))?;
        let chamber = Chamber::from_code(&chamber_code)
            .ok_or(MalformedRecordError::UnknownChamber(chamber_code))?;

        rows.push(TermRow {
            name: name.clone(),
            birthday: bio.birthday.clone(),
            gender,
            term_start,
            term_end,
            chamber,
            party: term.party,
        });
    }

    Ok(rows)
}

fn missing(field: impl Into<String>) -> MalformedRecordError {
    MalformedRecordError::MissingField(field.into())
}
