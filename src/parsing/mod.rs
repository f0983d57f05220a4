//! Parsers for the report's input data formats.
//!
//! This module provides parsers for the inputs the report consumes: the
//! congress-legislators JSON files (one array of person records each) and
//! the optional life-expectancy reference CSV used by the overlay chart.
//!
//! # Parsers
//!
//! - [`json_parser`]: Parse legislator JSON files and normalize person records
//! - [`csv_parser`]: Parse the life-expectancy reference CSV
//!
//! # Example
//!
//! ```no_run
//! use congress_age::parsing::json_parser::read_person_records;
//! use std::path::Path;
//!
//! let records = read_person_records(Path::new("legislators-current.json"))
//!     .expect("Failed to read legislators");
//! ```

pub mod csv_parser;
pub mod json_parser;

#[cfg(test)]
mod json_parser_tests;

pub use csv_parser::{read_life_expectancy, LifeExpectancyRow};
pub use json_parser::{normalize_person, parse_person_records, read_person_records};
