//! Field parsing utilities for delimiter-separated records.
//!
//! SAM-style lines are usually tab-delimited, but the converter also accepts
//! single-space delimited input, so the splitting helper takes the delimiter
//! as a parameter instead of hard-coding `\t`.
//!
//! # Examples
//!
//! ```
//! use sam2tsv::primitives::fields::{parse_required, split_fields};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fields = split_fields("read1\t0\tchr1\t100", '\t', Some(4), 1)?;
//! assert_eq!(fields[2], "chr1");
//!
//! let pos: i64 = parse_required(fields[3], "pos", 1)?;
//! assert_eq!(pos, 100);
//! # Ok(())
//! # }
//! ```

use crate::primitives::{FormatError, Result};
use std::str::FromStr;

/// Parses a required field with type conversion.
///
/// # Arguments
///
/// * `field` - The field string to parse
/// * `field_name` - Name of the field (for error messages)
/// * `line` - Line number (for error messages)
///
/// # Errors
///
/// Returns [`FormatError::InvalidField`] if parsing fails.
pub fn parse_required<T: FromStr>(field: &str, field_name: &str, line: usize) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    field.parse().map_err(|e: T::Err| FormatError::InvalidField {
        field: field_name.to_string(),
        line,
        reason: e.to_string(),
    })
}

/// Splits a line into fields on a single delimiter character.
///
/// Consecutive delimiters are not collapsed and no quoting is honored, so a
/// split may produce empty fields. When `expected` is given, lines with fewer
/// fields are rejected; extra fields are allowed.
///
/// # Errors
///
/// Returns [`FormatError::FieldCount`] if the line has fewer than `expected`
/// fields.
///
/// # Examples
///
/// ```
/// use sam2tsv::primitives::fields::split_fields;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let fields = split_fields("a b c", ' ', Some(3), 1)?;
/// assert_eq!(fields, vec!["a", "b", "c"]);
///
/// // Empty fields survive
/// let fields = split_fields("a\t\tc", '\t', None, 1)?;
/// assert_eq!(fields, vec!["a", "", "c"]);
/// # Ok(())
/// # }
/// ```
pub fn split_fields(
    line: &str,
    delimiter: char,
    expected: Option<usize>,
    line_number: usize,
) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split(delimiter).collect();

    if let Some(expected_count) = expected {
        if fields.len() < expected_count {
            return Err(FormatError::FieldCount {
                expected: expected_count,
                actual: fields.len(),
                line: line_number,
            });
        }
    }

    Ok(fields)
}
