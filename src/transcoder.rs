//! Single-pass driver connecting the record reader to the escaped writer.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::TranscoderError;
use crate::transcode::{EscapedWriter, RecordReader, WriteStats};

/// Drives one transcoding pass over an input file.
///
/// The pass is a stateless per-line map: read a line, split it into a
/// record, write the escaped output line. It is single-threaded and
/// synchronous; the cost is proportional to input size and dominated by I/O.
///
/// # Example
///
/// ```rust,ignore
/// use line_transcoder::transcoder::Transcoder;
/// use std::path::Path;
///
/// let transcoder = Transcoder::new(Path::new("input.txt"), false);
/// let stats = transcoder.run(&mut std::io::stdout())?;
/// ```
pub struct Transcoder {
    /// Path to the input file.
    input: PathBuf,
    /// Whether to skip lines with no value field instead of failing.
    skip_malformed: bool,
}

impl Transcoder {
    /// Creates a transcoder for the given input file.
    #[must_use]
    pub fn new(input: &Path, skip_malformed: bool) -> Self {
        Self {
            input: input.to_path_buf(),
            skip_malformed,
        }
    }

    /// Runs the transcoding pass to completion.
    ///
    /// Records are read in input order and each one is written as a single
    /// escaped output line, a strict one-to-one mapping (minus skipped lines
    /// under the skip policy). Both fields of a line are parsed before any
    /// of its bytes are written, so a line that faults under the fail-fast
    /// policy emits nothing; output for earlier lines remains.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered: [`TranscoderError::Io`] for
    /// open/read/write faults, [`TranscoderError::MissingValueField`] for a
    /// malformed line under the fail-fast policy. No error is recovered
    /// internally and there are no retries.
    pub fn run<W: Write>(&self, output: W) -> Result<WriteStats, TranscoderError> {
        let mut reader = RecordReader::new(&self.input, self.skip_malformed)?;
        let mut writer = EscapedWriter::new(output);

        while let Some(result) = reader.read_next() {
            let record = result?;
            writer.write(&record)?;
        }

        writer.flush()?;
        let stats = writer.stats().clone();
        tracing::info!(
            "Transcoded {} record(s), {} escape token(s)",
            stats.total_records,
            stats.escape_tokens
        );

        Ok(stats)
    }
}
