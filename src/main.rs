//! Line Transcoder - escape comma-delimited key/value lines
//!
//! This CLI tool reads a text file with one `key,value` record per line and
//! writes each record to standard output as the key, a control-byte
//! separator (0x01), and the value re-encoded as one `\uXXXX` escape token
//! per UTF-16 code unit.
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Configuration/argument error |
//! | 3 | File I/O error |
//! | 4 | Malformed input line (fail-fast policy) |

use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use line_transcoder::cli::Args;
use line_transcoder::error::TranscoderError;
use line_transcoder::transcoder::Transcoder;

/// Exit code for success
const EXIT_SUCCESS: u8 = 0;
/// Exit code for configuration/argument errors
const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for file I/O errors
const EXIT_IO_ERROR: u8 = 3;
/// Exit code for malformed input data (fail-fast policy)
const EXIT_DATA_ERROR: u8 = 4;

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();

    // Validate argument combinations
    if let Err(e) = args.validate() {
        eprintln!("Error: Configuration error: {}", e);
        eprintln!("  Hint: Use --help for usage information");
        return ExitCode::from(EXIT_CONFIG_ERROR);
    }

    // Run the application and handle errors
    match run(&args) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(error_to_exit_code(&e))
        }
    }
}

/// Initialize `tracing` output to stderr, filtered by `RUST_LOG`.
///
/// Standard output is the data channel, so all diagnostics go to the error
/// stream.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

/// Main application logic: one transcoding pass from the input file to
/// standard output.
fn run(args: &Args) -> Result<(), TranscoderError> {
    let file = args.file.as_ref().ok_or_else(|| {
        TranscoderError::InvalidArgument("missing required input file path".to_string())
    })?;

    let transcoder = Transcoder::new(file, args.skip_malformed);

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    transcoder.run(&mut output)?;
    output.flush()?;

    Ok(())
}

/// Maps an error to its process exit code.
fn error_to_exit_code(error: &TranscoderError) -> u8 {
    match error {
        TranscoderError::InvalidArgument(_) => EXIT_CONFIG_ERROR,
        TranscoderError::Io(_) => EXIT_IO_ERROR,
        TranscoderError::MissingValueField { .. } => EXIT_DATA_ERROR,
        TranscoderError::InvalidEscape(_) => EXIT_DATA_ERROR,
    }
}
