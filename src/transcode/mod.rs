//! Transcode module
//!
//! Handles reading key/value records from delimited text files and writing
//! escaped output lines.

pub mod encoding;
pub mod reader;
pub mod record;
pub mod writer;

// Re-export all public items to keep call sites short
pub use encoding::{escape_value, unescape_value, ESCAPE_TOKEN_LEN, FIELD_SEPARATOR};
pub use reader::RecordReader;
pub use record::{Record, WriteStats};
pub use writer::EscapedWriter;
