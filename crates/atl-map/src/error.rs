//! Error types for mapping operations.

use thiserror::Error;

use atl_model::CanonicalField;

/// Errors from building or editing a mapping session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MapError {
    /// The uploaded sheet has no data rows to map.
    #[error("No data to import")]
    NoDataRows,

    /// A field was pointed at a column the sheet does not have.
    #[error("Column {column} is out of range for {field} ({available} columns available)")]
    ColumnOutOfRange {
        /// The field being assigned.
        field: CanonicalField,
        /// The requested zero-based column.
        column: usize,
        /// Number of header columns.
        available: usize,
    },

    /// A column selector matched no header.
    #[error("Column not found: {0}")]
    UnknownColumn(String),

    /// A recognition pattern failed to compile.
    #[error("Invalid pattern '{pattern}' for {field}: {message}")]
    InvalidPattern {
        /// The field the pattern belongs to.
        field: CanonicalField,
        /// The offending pattern source.
        pattern: String,
        /// Regex compiler message.
        message: String,
    },
}

/// Errors from the commit filter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommitError {
    /// Every record lacked a name; nothing would be sent.
    #[error("No valid components found ({rejected} rows without a name)")]
    EmptyBatch {
        /// Rows dropped for an empty name.
        rejected: usize,
    },
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MapError>;
