//! Buffered record reader for delimited input files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::record::Record;
use crate::error::TranscoderError;

/// Record reader for transcoding key/value lines from a file.
///
/// The `RecordReader` reads one line at a time from a buffered file handle,
/// strips the line terminator, and splits the line into a [`Record`]. Lines
/// are returned strictly in input order with 1-indexed line numbers for
/// error reporting.
///
/// # Malformed lines
///
/// A line with no comma has no value field. By default such a line yields
/// the parse error, which aborts the run (fail-fast). With `skip_malformed`
/// set, the reader logs a warning and silently advances to the next line
/// instead.
///
/// The underlying file handle is released when the reader is dropped, on
/// every exit path.
pub struct RecordReader {
    /// Buffered handle on the input file.
    reader: BufReader<File>,
    /// Whether to skip lines with no value field instead of failing.
    skip_malformed: bool,
    /// Number of the last line read (1-indexed; 0 before the first read).
    current_line: u64,
}

impl RecordReader {
    /// Opens the input file and creates a reader over it.
    ///
    /// # Errors
    ///
    /// Returns [`TranscoderError::Io`] if the file cannot be opened.
    pub fn new(path: &Path, skip_malformed: bool) -> Result<Self, TranscoderError> {
        let file = File::open(path)?;

        Ok(Self {
            reader: BufReader::new(file),
            skip_malformed,
            current_line: 0,
        })
    }

    /// Reads the next record from the input file.
    ///
    /// Returns `None` at end of file. Under `skip_malformed` this advances
    /// past lines without a value field, so the returned record may come
    /// from a later line than the previous call's successor.
    pub fn read_next(&mut self) -> Option<Result<Record, TranscoderError>> {
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(TranscoderError::Io(e))),
            }
            self.current_line += 1;

            // read_line keeps the terminator; strip `\n` and, for CRLF
            // input, the `\r` before it.
            if line.ends_with('\n') {
                line.pop();
                if line.ends_with('\r') {
                    line.pop();
                }
            }

            match Record::parse(&line, self.current_line) {
                Ok(record) => return Some(Ok(record)),
                Err(e) if self.skip_malformed => {
                    tracing::warn!("{}, skipping line", e);
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }

    /// Number of the last line read, 1-indexed.
    #[must_use]
    pub fn current_line(&self) -> u64 {
        self.current_line
    }
}

impl Iterator for RecordReader {
    type Item = Result<Record, TranscoderError>;

    /// Returns the next record from the input file.
    fn next(&mut self) -> Option<Self::Item> {
        self.read_next()
    }
}
