//! Dataset loading with per-record skip diagnostics.
//!
//! The loader reads the historical and current legislator files,
//! concatenates them historical-first, and normalizes every record into
//! term rows. Records that fail normalization are logged with their raw
//! payload and collected in the result; they never abort the load. Only
//! I/O failures and structurally invalid files are fatal here.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde_json::Value;
use std::path::Path;

use crate::core::domain::TermRow;
use crate::core::error::MalformedRecordError;
use crate::parsing::json_parser::{normalize_person, read_person_records};

/// One record the loader rejected, with the reason and the raw payload.
#[derive(Debug, Clone)]
pub struct SkippedRecord {
    /// Position in the concatenated record sequence (historical first).
    pub index: usize,
    pub reason: MalformedRecordError,
    pub record: Value,
}

/// Outcome of loading the legislator files.
///
/// # Fields
///
/// * `rows` - All term rows, in encounter order
/// * `skipped` - Records rejected by normalization, in encounter order
/// * `records_read` - Total person records seen across both files
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub rows: Vec<TermRow>,
    pub skipped: Vec<SkippedRecord>,
    pub records_read: usize,
}

impl LoadResult {
    /// Number of records that normalized cleanly.
    pub fn records_ok(&self) -> usize {
        self.records_read - self.skipped.len()
    }
}

/// Load and concatenate the historical and current legislator files.
///
/// Historical records come first, then current, then per-person term
/// order, so the assembled table is deterministic.
pub fn load_term_rows(historical: &Path, current: &Path) -> Result<LoadResult> {
    let mut records = read_person_records(historical).with_context(|| {
        format!(
            "Failed to load historical legislators: {}",
            historical.display()
        )
    })?;
    debug!("Read {} historical records", records.len());

    let current_records = read_person_records(current).with_context(|| {
        format!("Failed to load current legislators: {}", current.display())
    })?;
    debug!("Read {} current records", current_records.len());

    records.extend(current_records);
    Ok(normalize_records(records))
}

/// Normalize a sequence of raw person records, skipping malformed entries.
///
/// Each skipped record is logged exactly once, with the offending payload,
/// and kept in the result for the end-of-run diagnostic listing.
pub fn normalize_records(records: Vec<Value>) -> LoadResult {
    let records_read = records.len();
    let mut rows = Vec::new();
    let mut skipped = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        match normalize_person(&record) {
            Ok(term_rows) => rows.extend(term_rows),
            Err(reason) => {
                warn!("Skipping record {}: {}: {}", index, reason, record);
                skipped.push(SkippedRecord {
                    index,
                    reason,
                    record,
                });
            }
        }
    }

    debug!(
        "Normalized {} records into {} term rows ({} skipped)",
        records_read,
        rows.len(),
        skipped.len()
    );

    LoadResult {
        rows,
        skipped,
        records_read,
    }
}
