//! CLI argument parsing module
//!
//! Handles command-line argument parsing using `clap` derive macros.
//! This module defines the `Args` struct containing all CLI arguments with
//! validation logic.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the line transcoder.
///
/// This struct defines all CLI arguments using clap derive macros.
/// Use the `validate()` method after parsing to ensure argument combinations
/// are valid.
///
/// # Example
///
/// ```rust,ignore
/// use clap::Parser;
/// use line_transcoder::cli::Args;
///
/// let args = Args::parse();
/// args.validate()?;
/// ```
#[derive(Parser, Debug)]
#[command(name = "line-transcoder")]
#[command(about = "Transcode comma-delimited key/value lines into escaped output")]
#[command(version)]
pub struct Args {
    /// Path to the input file (one `key,value` record per line)
    ///
    /// Optional at the clap level; presence is checked by `validate()`.
    pub file: Option<PathBuf>,

    /// Skip lines with no value field instead of aborting the run
    ///
    /// The default is the fail-fast behavior: a line without a comma aborts
    /// the whole run with a nonzero exit code before emitting any output for
    /// that line. With this flag such lines are logged and skipped.
    #[arg(long)]
    pub skip_malformed: bool,
}

impl Args {
    /// Validates the parsed arguments.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the arguments form a runnable configuration, or a
    /// human-readable description of the problem.
    pub fn validate(&self) -> Result<(), String> {
        if self.file.is_none() {
            return Err("missing required input file path".to_string());
        }

        Ok(())
    }
}
