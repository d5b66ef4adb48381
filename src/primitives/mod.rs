//! Shared primitives for line-oriented alignment formats.
//!
//! This module provides the error taxonomy and field-parsing helpers used by
//! the SAM summary converter:
//! - [`FormatError`] / [`Result`]: crate-wide error type
//! - [`fields`]: delimiter-aware field splitting and typed field parsing
//!
//! # Example
//!
//! ```
//! use sam2tsv::primitives::fields::{parse_required, split_fields};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fields = split_fields("chr1\t100\t76M", '\t', Some(3), 1)?;
//! let pos: i64 = parse_required(fields[1], "pos", 1)?;
//! assert_eq!(pos, 100);
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub mod fields;

/// Errors that can occur while converting alignment lines.
///
/// Every error is fatal to the run: there is no per-line recovery or
/// skip-and-continue mode. Output already written stays written.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Too few delimiter-separated fields on an input line.
    #[error("Invalid number of fields: expected {expected}, got {actual} at line {line}")]
    FieldCount {
        /// Minimum number of fields required
        expected: usize,
        /// Actual number of fields found
        actual: usize,
        /// Line number where the error occurred (1-based)
        line: usize,
    },

    /// A field that could not be parsed (non-numeric POS, malformed CIGAR).
    #[error("Invalid field '{field}' at line {line}: {reason}")]
    InvalidField {
        /// Field name
        field: String,
        /// Line number where the error occurred (1-based)
        line: usize,
        /// Reason for invalidity
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, FormatError>;
