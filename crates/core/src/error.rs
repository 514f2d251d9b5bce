//! Error types for the osidb catalog
//!
//! The catalog core is almost entirely total: lookup misses are reported as
//! `None`/empty collections and filter mismatches as `false`. Errors exist
//! only at the bulk-load boundary, where schema strings (relationship kinds,
//! firmware kinds, calendar dates) are turned into typed values.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use thiserror::Error;

/// Result type alias for osidb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the osidb catalog
#[derive(Debug, Error)]
pub enum Error {
    /// Relationship kind string not part of the closed enumeration
    #[error("unknown relationship kind: {0}")]
    UnknownRelationship(String),

    /// Firmware kind string not part of the closed enumeration
    #[error("unknown firmware kind: {0}")]
    UnknownFirmware(String),

    /// Date string that does not follow the schema format (%Y-%m-%d)
    #[error("invalid date: {value}")]
    InvalidDate {
        /// The offending date string
        value: String,
    },
}
