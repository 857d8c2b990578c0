//! Escaped output writer.

use std::io::Write;

use super::encoding::{escape_value, FIELD_SEPARATOR};
use super::record::{Record, WriteStats};
use crate::error::TranscoderError;

/// Writer that renders records as escaped output lines.
///
/// Each record is written as the key bytes, the [`FIELD_SEPARATOR`] control
/// byte, one escape token per UTF-16 code unit of the value, and a `\n`
/// terminator. Records appear in the output in the order they are written.
///
/// The writer is generic over any [`Write`] sink so the same code drives
/// standard output in the binary and in-memory buffers in tests.
pub struct EscapedWriter<W: Write> {
    /// The underlying output sink.
    writer: W,
    /// Statistics for written records.
    stats: WriteStats,
}

impl<W: Write> EscapedWriter<W> {
    /// Creates a new writer over the given sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            stats: WriteStats::default(),
        }
    }

    /// Writes one record as `<key><0x01><escaped value>\n`.
    ///
    /// # Errors
    ///
    /// Returns [`TranscoderError::Io`] on a write fault. Bytes already
    /// written to the sink before the fault remain there.
    pub fn write(&mut self, record: &Record) -> Result<(), TranscoderError> {
        let escaped = escape_value(&record.value);
        let units = record.value.encode_utf16().count();

        self.writer.write_all(record.key.as_bytes())?;
        self.writer.write_all(&[FIELD_SEPARATOR])?;
        self.writer.write_all(escaped.as_bytes())?;
        self.writer.write_all(b"\n")?;

        self.stats.total_records += 1;
        self.stats.escape_tokens += units as u64;
        if units > self.stats.longest_value {
            self.stats.longest_value = units;
        }

        Ok(())
    }

    /// Flushes pending writes to the sink.
    pub fn flush(&mut self) -> Result<(), TranscoderError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Statistics for the records written so far.
    #[must_use]
    pub fn stats(&self) -> &WriteStats {
        &self.stats
    }

    /// Consumes the writer, returning the underlying sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
