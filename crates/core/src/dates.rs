//! Schema date handling
//!
//! Calendar dates (release dates, end-of-life dates) travel through the
//! property store as strings in the fixed schema format `%Y-%m-%d`. This
//! module owns the single parse/format pair so the format string lives in
//! exactly one place.

use crate::error::{Error, Result};
use chrono::NaiveDate;

/// The schema date format: four-digit year, two-digit month and day.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a schema date string.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] when the string does not follow
/// [`DATE_FORMAT`]. Loaders should surface this; read paths that tolerate
/// malformed data use `parse_date(..).ok()` instead.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| Error::InvalidDate {
        value: value.to_string(),
    })
}

/// Format a date in the schema format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
