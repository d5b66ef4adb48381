//! Alignment summary records.
//!
//! One [`SummaryRecord`] is produced per SAM-style input line. Three output
//! columns are copied verbatim from the input (RNAME, POS5, CIGAR) and three
//! are derived (STRAND from the flag field, POS3 from the CIGAR reference
//! span, LEN from the read sequence).
//!
//! # Output format
//!
//! ```text
//! STRAND  RNAME  POS5  CIGAR  POS3  LEN
//! +       chr1   100   76M    175   10
//! ```
//!
//! # Examples
//!
//! ```
//! use sam2tsv::summary::SummaryRecord;
//! use sam2tsv::Delimiter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let line = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*";
//! let record = SummaryRecord::from_line(line, Delimiter::Tab, 1)?;
//!
//! assert_eq!(record.to_line(), "+\tchr1\t100\t76M\t175\t10");
//! # Ok(())
//! # }
//! ```

use crate::cigar::reference_span_at;
use crate::convert::Delimiter;
use crate::primitives::fields::{parse_required, split_fields};
use crate::primitives::Result;
use std::fmt;

/// Column header line of the summary format (no trailing newline).
pub const HEADER: &str = "STRAND\tRNAME\tPOS5\tCIGAR\tPOS3\tLEN";

/// Minimum number of input fields a SAM-style line must carry.
///
/// Fields up to 0-indexed position 9 (the read sequence) are accessed.
pub const MIN_INPUT_FIELDS: usize = 10;

/// Strand of an aligned read relative to the reference.
///
/// The SAM flag field maps to a strand by exact string comparison: only the
/// literal token `0` means forward, every other value (`16`, `4`, `256`, even
/// `00`) is treated as reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    /// Forward strand (+)
    Forward,
    /// Reverse strand (-)
    Reverse,
}

impl Strand {
    /// Derives the strand from the raw SAM FLAG field token.
    ///
    /// # Examples
    ///
    /// ```
    /// use sam2tsv::summary::Strand;
    ///
    /// assert_eq!(Strand::from_flag_field("0"), Strand::Forward);
    /// assert_eq!(Strand::from_flag_field("16"), Strand::Reverse);
    /// assert_eq!(Strand::from_flag_field("00"), Strand::Reverse);
    /// ```
    pub fn from_flag_field(flag: &str) -> Self {
        if flag == "0" {
            Strand::Forward
        } else {
            Strand::Reverse
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// One line of the six-column summary output.
///
/// # Fields
///
/// | Column | Source |
/// |--------|--------|
/// | STRAND | flag field (`0` ⇒ `+`, else `-`) |
/// | RNAME  | input field 2, verbatim |
/// | POS5   | input field 3, verbatim |
/// | CIGAR  | input field 5, verbatim |
/// | POS3   | `POS5 + reference_span(CIGAR) - 1` |
/// | LEN    | character count of input field 9 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    /// Read orientation relative to the reference.
    pub strand: Strand,
    /// Reference sequence name, copied verbatim.
    pub rname: String,
    /// 1-based leftmost mapping position, copied verbatim (`007` stays `007`).
    pub pos5: String,
    /// CIGAR string, copied verbatim.
    pub cigar: String,
    /// 1-based rightmost mapping position.
    pub pos3: i64,
    /// Read length in characters.
    pub len: usize,
}

impl SummaryRecord {
    /// Builds a record from pre-split input fields.
    ///
    /// # Errors
    ///
    /// - [`FormatError::FieldCount`](crate::FormatError::FieldCount) if fewer
    ///   than [`MIN_INPUT_FIELDS`] fields are present.
    /// - [`FormatError::InvalidField`](crate::FormatError::InvalidField) if
    ///   the position field is not an integer or the CIGAR is malformed.
    pub fn from_fields(fields: &[&str], line_number: usize) -> Result<Self> {
        if fields.len() < MIN_INPUT_FIELDS {
            return Err(crate::primitives::FormatError::FieldCount {
                expected: MIN_INPUT_FIELDS,
                actual: fields.len(),
                line: line_number,
            });
        }

        let strand = Strand::from_flag_field(fields[1]);
        let rname = fields[2].to_string();
        let pos5 = fields[3].to_string();
        let cigar = fields[5].to_string();

        let pos5_value: i64 = parse_required(fields[3], "pos", line_number)?;
        let span = reference_span_at(fields[5], line_number)?;
        let pos3 = pos5_value + span as i64 - 1;

        let len = fields[9].chars().count();

        Ok(SummaryRecord {
            strand,
            rname,
            pos5,
            cigar,
            pos3,
            len,
        })
    }

    /// Builds a record from one raw input line, splitting on `delimiter`.
    ///
    /// The line must already have its terminator stripped.
    pub fn from_line(line: &str, delimiter: Delimiter, line_number: usize) -> Result<Self> {
        let fields = split_fields(line, delimiter.as_char(), None, line_number)?;
        Self::from_fields(&fields, line_number)
    }

    /// Serializes this record as one tab-joined output line (no newline).
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.strand, self.rname, self.pos5, self.cigar, self.pos3, self.len
        )
    }
}
