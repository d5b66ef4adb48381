//! CIGAR reference-span computation.
//!
//! A CIGAR string is a run-length encoding of alignment operations: digit
//! runs followed by one-letter operation codes, e.g. `76M` or `10M2I64M`.
//! The reference span is the number of reference positions the alignment
//! consumes, which is the sum of all run lengths except insertions (`I`,
//! which consume read bases only).

use crate::primitives::{FormatError, Result};

/// Computes the number of reference positions spanned by a CIGAR string.
///
/// Scans left to right with an explicit digit accumulator. When an operation
/// code is reached the pending count is added to the total unless the code is
/// `I`; the accumulator is cleared either way. Two deliberate edge cases:
///
/// - A trailing digit run with no operation code is silently dropped.
/// - An operation code with an empty pending count (a string starting with a
///   non-digit, or two adjacent codes) fails with
///   [`FormatError::InvalidField`]. This includes `*`, the SAM marker for a
///   missing CIGAR; it is never coerced to 0.
///
/// The empty string yields 0.
///
/// # Examples
///
/// ```
/// use sam2tsv::cigar::reference_span;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// assert_eq!(reference_span("76M")?, 76);
/// assert_eq!(reference_span("10M2I64M")?, 74); // I does not count
/// assert_eq!(reference_span("5M1D70M")?, 75);  // D counts
/// assert!(reference_span("*").is_err());
/// # Ok(())
/// # }
/// ```
pub fn reference_span(cigar: &str) -> Result<u64> {
    reference_span_at(cigar, 0)
}

/// Like [`reference_span`], with a line number carried into error values.
pub fn reference_span_at(cigar: &str, line: usize) -> Result<u64> {
    let mut span: u64 = 0;
    let mut pending = String::new();

    for ch in cigar.chars() {
        if ch.is_ascii_digit() {
            pending.push(ch);
        } else {
            let count: u64 = pending.parse().map_err(|_| FormatError::InvalidField {
                field: "cigar".to_string(),
                line,
                reason: format!("empty count before operation '{}' in '{}'", ch, cigar),
            })?;

            // Insertions consume read bases but no reference bases
            if ch != 'I' {
                span += count;
            }
            pending.clear();
        }
    }

    // A trailing digit run with no operation code is dropped
    Ok(span)
}
