//! Error module
//!
//! Defines custom error types using `thiserror` for the line transcoder.
//! This module provides a unified error type that wraps all possible error
//! sources and implements the `From` trait for automatic conversion from
//! underlying error types.

use thiserror::Error;

/// The main error type for the line transcoder.
///
/// This enum represents all possible errors that can occur during a
/// transcoding run, including configuration errors, file I/O errors, and
/// malformed-input faults.
///
/// # Error Categories
///
/// - **Configuration errors**: missing or invalid command-line arguments
/// - **File I/O errors**: input file open/read and output write failures
/// - **Data errors**: input lines or escape sequences that violate the
///   record format
///
/// # Example
///
/// ```rust,ignore
/// use line_transcoder::error::TranscoderError;
///
/// fn example() -> Result<(), TranscoderError> {
///     // Errors from underlying types are automatically converted
///     let file = std::fs::File::open("nonexistent.txt")?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum TranscoderError {
    /// Invalid command-line argument error.
    ///
    /// This error occurs when CLI arguments are invalid or missing
    /// (e.g., no input file path was supplied).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// General I/O error.
    ///
    /// This error occurs for file system operations like opening or reading
    /// the input file, and for write faults on the output stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An input line has no value field.
    ///
    /// Every input line must contain at least one comma separating the key
    /// from the value. Under the default fail-fast policy a line without one
    /// aborts the run; the line number is 1-indexed.
    #[error("Line {line}: record has no value field (expected `key,value`)")]
    MissingValueField {
        /// 1-indexed number of the offending input line.
        line: u64,
    },

    /// An escaped value could not be decoded.
    ///
    /// This error occurs when a token stream handed to
    /// [`unescape_value`](crate::transcode::unescape_value) is truncated,
    /// contains non-hex digits, or decodes to an unpaired surrogate.
    #[error("Invalid escape sequence: {0}")]
    InvalidEscape(String),
}
