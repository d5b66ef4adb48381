//! sam2tsv: streaming SAM-to-TSV alignment summarizer
//!
//! # Overview
//!
//! sam2tsv converts SAM-style alignment lines into a six-column
//! tab-separated summary (`STRAND RNAME POS5 CIGAR POS3 LEN`) in a single
//! streaming pass: one line in, one line out, constant memory.
//!
//! ## Output columns
//!
//! - **STRAND**: `+` when the flag field is the literal `0`, else `-`
//! - **RNAME**: reference sequence name, verbatim
//! - **POS5**: 1-based leftmost mapping position, verbatim
//! - **CIGAR**: alignment descriptor, verbatim
//! - **POS3**: `POS5 + reference_span(CIGAR) - 1`
//! - **LEN**: read sequence length in characters
//!
//! ## Quick start
//!
//! ```
//! use sam2tsv::convert;
//!
//! # fn main() -> sam2tsv::Result<()> {
//! let input = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\n";
//! let mut output = Vec::new();
//!
//! convert(input.as_bytes(), &mut output)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module organization
//!
//! - [`cigar`]: reference-span computation over CIGAR strings
//! - [`summary`]: the output record type and its line format
//! - [`convert`]: delimiter detection, streaming parser, writer, driver
//! - [`primitives`]: error taxonomy and field-parsing helpers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cigar;
pub mod convert;
pub mod primitives;
pub mod summary;

// Re-export commonly used types
pub use convert::{convert, Delimiter, SamLineParser, SummaryWriter};
pub use primitives::{FormatError, Result};
pub use summary::{Strand, SummaryRecord, HEADER};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
