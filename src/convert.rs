//! Streaming conversion driver.
//!
//! Everything here is single-threaded and strictly sequential: one line is
//! read, transformed, and written before the next line is touched. The only
//! state carried across lines is the [`Delimiter`] chosen from the first
//! line, held by the parser as an explicit `Option` rather than a global.
//!
//! # Examples
//!
//! ```
//! use sam2tsv::convert;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\n";
//! let mut output = Vec::new();
//!
//! let written = convert(input.as_bytes(), &mut output)?;
//! assert_eq!(written, 1);
//!
//! let text = String::from_utf8(output)?;
//! assert_eq!(
//!     text,
//!     "STRAND\tRNAME\tPOS5\tCIGAR\tPOS3\tLEN\n+\tchr1\t100\t76M\t175\t10\n"
//! );
//! # Ok(())
//! # }
//! ```

use crate::primitives::Result;
use crate::summary::{SummaryRecord, HEADER};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

/// Field separator of one input stream.
///
/// Chosen exactly once, from the first line, and reused for every subsequent
/// line without re-inspection. A stream that switches delimiters mid-way
/// mis-splits silently; that limitation is inherited from the format contract
/// (fields never contain the delimiter) and is deliberately not "fixed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Horizontal tab (`\t`).
    Tab,
    /// Single space.
    Space,
}

impl Delimiter {
    /// Picks the delimiter for a stream from its first line: tab if the line
    /// contains at least one tab character, otherwise space.
    ///
    /// # Examples
    ///
    /// ```
    /// use sam2tsv::Delimiter;
    ///
    /// assert_eq!(Delimiter::detect("a\tb"), Delimiter::Tab);
    /// assert_eq!(Delimiter::detect("a b"), Delimiter::Space);
    /// ```
    pub fn detect(first_line: &str) -> Self {
        if first_line.contains('\t') {
            Delimiter::Tab
        } else {
            Delimiter::Space
        }
    }

    /// The separator character.
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Space => ' ',
        }
    }
}

/// Streaming parser over SAM-style lines.
///
/// Yields one [`SummaryRecord`] per input line, in arrival order, with
/// constant memory. Unlike a tolerant tabular reader, nothing is skipped:
/// every line (blank lines included) either produces a record or a fatal
/// error, so output rows map one-to-one onto input lines.
///
/// # Examples
///
/// ```
/// use sam2tsv::SamLineParser;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\n";
/// let parser = SamLineParser::new(data.as_bytes());
///
/// for record in parser {
///     let record = record?;
///     assert_eq!(record.rname, "chr1");
/// }
/// # Ok(())
/// # }
/// ```
pub struct SamLineParser<R: Read> {
    reader: BufReader<R>,
    line_buf: String,
    line_number: usize,
    delimiter: Option<Delimiter>,
}

impl<R: Read> SamLineParser<R> {
    /// Creates a parser from any `Read` source.
    pub fn new(reader: R) -> Self {
        SamLineParser {
            reader: BufReader::new(reader),
            line_buf: String::with_capacity(1024),
            line_number: 0,
            delimiter: None,
        }
    }

    /// Returns the current line number (1-based, 0 before the first line).
    ///
    /// Useful for error reporting.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The delimiter chosen from the first line, if one has been read yet.
    pub fn delimiter(&self) -> Option<Delimiter> {
        self.delimiter
    }
}

impl SamLineParser<File> {
    /// Creates a parser from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl SamLineParser<MultiGzDecoder<File>> {
    /// Creates a parser from a gzip-compressed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn from_gzip_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(MultiGzDecoder::new(file)))
    }
}

impl<R: Read> Iterator for SamLineParser<R> {
    type Item = Result<SummaryRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line_buf.clear();

        match self.reader.read_line(&mut self.line_buf) {
            Ok(0) => None, // EOF
            Ok(_) => {
                self.line_number += 1;

                // Strip only the line terminator; trailing empty fields
                // must survive so LEN can be 0
                let line = self.line_buf.strip_suffix('\n').unwrap_or(&self.line_buf);
                let line = line.strip_suffix('\r').unwrap_or(line);

                let delimiter = *self
                    .delimiter
                    .get_or_insert_with(|| Delimiter::detect(line));

                Some(SummaryRecord::from_line(line, delimiter, self.line_number))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Writer for the summary format.
///
/// Emits the header line on construction, before any data, so even an empty
/// input produces the header. Records are written one line at a time.
///
/// # Examples
///
/// ```
/// use sam2tsv::{SamLineParser, SummaryWriter};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\n";
/// let mut out = Vec::new();
///
/// let mut writer = SummaryWriter::new(&mut out)?;
/// for record in SamLineParser::new(data.as_bytes()) {
///     writer.write_record(&record?)?;
/// }
/// writer.finish()?;
/// # Ok(())
/// # }
/// ```
pub struct SummaryWriter<W: Write> {
    writer: W,
    records_written: u64,
}

impl<W: Write> SummaryWriter<W> {
    /// Creates a writer and immediately emits the header line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the header fails.
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{}", HEADER)?;
        Ok(SummaryWriter {
            writer,
            records_written: 0,
        })
    }

    /// Writes a single record as one output line.
    pub fn write_record(&mut self, record: &SummaryRecord) -> Result<()> {
        writeln!(self.writer, "{}", record.to_line())?;
        self.records_written += 1;
        Ok(())
    }

    /// Number of data records written so far (the header is not counted).
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Flushes buffered output.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and consumes the writer.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Runs the full conversion: header, then one output line per input line.
///
/// The first malformed line aborts the run; lines already written stay in the
/// output stream. Returns the number of data lines written.
///
/// # Errors
///
/// Propagates any [`FormatError`](crate::FormatError) from parsing and any
/// I/O error from reading or writing.
pub fn convert<R: Read, W: Write>(reader: R, writer: W) -> Result<u64> {
    let mut writer = SummaryWriter::new(writer)?;

    for record in SamLineParser::new(reader) {
        writer.write_record(&record?)?;
    }

    let written = writer.records_written();
    writer.finish()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::FormatError;
    use crate::summary::Strand;

    #[test]
    fn test_delimiter_detect() {
        assert_eq!(Delimiter::detect("a\tb c"), Delimiter::Tab);
        assert_eq!(Delimiter::detect("a b"), Delimiter::Space);
        assert_eq!(Delimiter::detect(""), Delimiter::Space);
    }

    #[test]
    fn test_parser_basic() {
        let data = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\n";
        let mut parser = SamLineParser::new(data.as_bytes());

        let record = parser.next().unwrap().unwrap();
        assert_eq!(record.strand, Strand::Forward);
        assert_eq!(record.pos3, 175);
        assert_eq!(parser.delimiter(), Some(Delimiter::Tab));
        assert!(parser.next().is_none());
    }

    #[test]
    fn test_parser_missing_final_newline() {
        let data = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*";
        let mut parser = SamLineParser::new(data.as_bytes());
        assert!(parser.next().unwrap().is_ok());
        assert!(parser.next().is_none());
    }

    #[test]
    fn test_parser_crlf() {
        let data = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\r\n";
        let mut parser = SamLineParser::new(data.as_bytes());
        let record = parser.next().unwrap().unwrap();
        assert_eq!(record.len, 1); // trailing field is "*", CR stripped
    }

    #[test]
    fn test_parser_delimiter_frozen_after_first_line() {
        // Second line contains spaces inside a field; it must still split on tab
        let data = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\n\
                    read 2\t16\tchr2\t200\t60\t10M\t*\t0\t0\tACGTACGTAC\t*\n";
        let records: Vec<_> = SamLineParser::new(data.as_bytes())
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].rname, "chr2");
        assert_eq!(records[1].strand, Strand::Reverse);
    }

    #[test]
    fn test_parser_blank_line_is_an_error() {
        let data = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\n\n";
        let mut parser = SamLineParser::new(data.as_bytes());

        assert!(parser.next().unwrap().is_ok());
        match parser.next().unwrap() {
            Err(FormatError::FieldCount { actual, line, .. }) => {
                assert_eq!(actual, 1);
                assert_eq!(line, 2);
            }
            other => panic!("Expected FieldCount, got {:?}", other),
        }
    }

    #[test]
    fn test_parser_line_numbers() {
        let data = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\n\
                    read2\t0\tchr1\t200\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\n";
        let mut parser = SamLineParser::new(data.as_bytes());

        assert_eq!(parser.line_number(), 0);
        let _ = parser.next();
        assert_eq!(parser.line_number(), 1);
        let _ = parser.next();
        assert_eq!(parser.line_number(), 2);
    }

    #[test]
    fn test_writer_header_only_for_empty_input() {
        let mut out = Vec::new();
        let written = convert(&b""[..], &mut out).unwrap();

        assert_eq!(written, 0);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", HEADER));
    }

    #[test]
    fn test_convert_end_to_end() {
        let data = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\n";
        let mut out = Vec::new();

        let written = convert(data.as_bytes(), &mut out).unwrap();
        assert_eq!(written, 1);

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(HEADER));
        assert_eq!(lines.next(), Some("+\tchr1\t100\t76M\t175\t10"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_convert_keeps_output_written_before_failure() {
        let data = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\n\
                    broken line\n";
        let mut out = Vec::new();

        assert!(convert(data.as_bytes(), &mut out).is_err());

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2); // header + first record survive
        assert_eq!(lines[1], "+\tchr1\t100\t76M\t175\t10");
    }

    #[test]
    fn test_gzip_round_trip() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let data = "read1\t0\tchr1\t100\t60\t76M\t*\t0\t0\tACGTACGTAC\t*\n";
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let parser = SamLineParser::new(MultiGzDecoder::new(&compressed[..]));
        let records: Vec<_> = parser.collect::<Result<_>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pos3, 175);
    }
}
