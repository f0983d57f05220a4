//! Calendar helpers for year-end business dates.

pub mod year_end;

pub use year_end::{year_end_business_date, year_ends_in_range};
