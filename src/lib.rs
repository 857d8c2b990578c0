//! Line Transcoder Library
//!
//! This library provides the core functionality for the line transcoder CLI
//! tool. It includes modules for CLI argument parsing, record reading,
//! escape encoding, and escaped output writing.

pub mod cli;
pub mod error;
pub mod transcode;
pub mod transcoder;
