//! Escape encoding for record values.
//!
//! A value is rendered as one `\uXXXX` token per UTF-16 code unit, hex
//! digits lowercase and zero-padded to four digits. Code points above
//! U+FFFF therefore produce two tokens (their surrogate pair), never one.

use crate::error::TranscoderError;

/// The separator byte written between the key and the escaped value.
///
/// This is U+0001 ("start of heading"), a non-printable control byte kept as
/// a named constant so the output format's contract stays visible and
/// testable.
///
/// # Example
///
/// An input line `alice,hi` is written as:
/// `alice` + `0x01` + `\u0068\u0069` + `\n`
pub const FIELD_SEPARATOR: u8 = 0x01;

/// Number of characters in one escape token (`\u` plus four hex digits).
pub const ESCAPE_TOKEN_LEN: usize = 6;

/// Escapes a value as one `\uXXXX` token per UTF-16 code unit.
///
/// Iteration is over UTF-16 code units, not Unicode scalar values: a
/// character outside the Basic Multilingual Plane is emitted as two tokens
/// holding its high and low surrogate. Hex digits are lowercase and
/// zero-padded to four digits.
///
/// # Examples
///
/// ```
/// use line_transcoder::transcode::escape_value;
///
/// assert_eq!(escape_value("hi"), "\\u0068\\u0069");
///
/// // U+1D573 is above U+FFFF and escapes to its surrogate pair
/// assert_eq!(escape_value("\u{1D573}"), "\\ud835\\udd73");
///
/// // An empty value produces zero tokens
/// assert_eq!(escape_value(""), "");
/// ```
#[must_use]
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.encode_utf16().count() * ESCAPE_TOKEN_LEN);
    for unit in value.encode_utf16() {
        escaped.push_str(&format!("\\u{:04x}", unit));
    }
    escaped
}

/// Decodes a concatenation of `\uXXXX` tokens back into the original value.
///
/// This is the inverse of [`escape_value`]: each token is parsed to one
/// UTF-16 code unit and the units are recombined, so surrogate pairs fold
/// back into their supplementary-plane character.
///
/// # Errors
///
/// Returns [`TranscoderError::InvalidEscape`] when the input is not a whole
/// number of tokens, a token does not start with `\u`, its digits are not
/// hexadecimal, or the decoded units contain an unpaired surrogate.
pub fn unescape_value(escaped: &str) -> Result<String, TranscoderError> {
    let mut units: Vec<u16> = Vec::with_capacity(escaped.len() / ESCAPE_TOKEN_LEN);
    let mut pos = 0;

    while pos < escaped.len() {
        let token = escaped.get(pos..pos + ESCAPE_TOKEN_LEN).ok_or_else(|| {
            TranscoderError::InvalidEscape(format!(
                "truncated token at offset {} in {:?}",
                pos, escaped
            ))
        })?;

        let digits = token.strip_prefix("\\u").ok_or_else(|| {
            TranscoderError::InvalidEscape(format!("token {:?} does not start with \\u", token))
        })?;

        let unit = u16::from_str_radix(digits, 16).map_err(|e| {
            TranscoderError::InvalidEscape(format!("token {:?}: {}", token, e))
        })?;

        units.push(unit);
        pos += ESCAPE_TOKEN_LEN;
    }

    String::from_utf16(&units)
        .map_err(|e| TranscoderError::InvalidEscape(format!("unpaired surrogate: {}", e)))
}
