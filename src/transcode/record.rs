//! Key/value record type parsed from one input line.
//!
//! This module defines [`Record`] for representing one parsed input line
//! and [`WriteStats`] for tracking escaped-output write statistics.

use crate::error::TranscoderError;

/// A single key/value record split from one input line.
///
/// The key is everything before the first comma and the value is the text
/// between the first and the second comma; any fields after the second are
/// discarded. Both fields are immutable once parsed and the record only
/// lives for the duration of that line's processing.
///
/// There is no quoting support: a comma inside double quotes still splits
/// the line.
///
/// # Example
///
/// ```
/// use line_transcoder::transcode::Record;
///
/// let record = Record::parse("alice,Facebook", 1).unwrap();
/// assert_eq!(record.key, "alice");
/// assert_eq!(record.value, "Facebook");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The text before the first comma, emitted verbatim.
    pub key: String,
    /// The text between the first and second comma, emitted escaped.
    pub value: String,
}

impl Record {
    /// Creates a new record with the given fields.
    #[must_use]
    pub fn new(key: String, value: String) -> Self {
        Self { key, value }
    }

    /// Splits one input line into a record.
    ///
    /// # Arguments
    ///
    /// * `line` - The input line with its terminator already stripped
    /// * `line_number` - 1-indexed line number, used in error messages
    ///
    /// # Errors
    ///
    /// Returns [`TranscoderError::MissingValueField`] when the line contains
    /// no comma. An empty value (`key,` with nothing after the comma) is
    /// valid and produces a record with an empty value.
    pub fn parse(line: &str, line_number: u64) -> Result<Self, TranscoderError> {
        let mut fields = line.split(',');

        // split() always yields at least one field, even for an empty line
        let key = fields.next().unwrap_or_default();
        let value = fields
            .next()
            .ok_or(TranscoderError::MissingValueField { line: line_number })?;

        Ok(Self::new(key.to_string(), value.to_string()))
    }
}

/// Statistics for records written by an escaped-output writer.
///
/// # Fields
///
/// * `total_records` - Total number of records written
/// * `escape_tokens` - Total number of escape tokens emitted across all values
/// * `longest_value` - Length in UTF-16 code units of the longest value encountered
///
/// # Example
///
/// ```
/// use line_transcoder::transcode::WriteStats;
///
/// let stats = WriteStats::default();
/// assert_eq!(stats.total_records, 0);
/// assert_eq!(stats.escape_tokens, 0);
/// assert_eq!(stats.longest_value, 0);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteStats {
    /// Total number of records written.
    pub total_records: u64,
    /// Total number of escape tokens emitted across all values.
    pub escape_tokens: u64,
    /// Length in UTF-16 code units of the longest value encountered.
    pub longest_value: usize,
}
