//! Core domain models for the congress-age report pipeline.
//!
//! This module defines the fundamental data structures the pipeline derives,
//! one row type per stage, together with the error taxonomy separating
//! recoverable per-record failures from fatal ones.

pub mod domain;
pub mod error;
