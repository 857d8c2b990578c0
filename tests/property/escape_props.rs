//! Property-based tests for the escape encoding and the transcoding pass

use proptest::prelude::*;
use tempfile::tempdir;

use line_transcoder::transcode::{escape_value, unescape_value, ESCAPE_TOKEN_LEN};
use line_transcoder::transcoder::Transcoder;

/// Strategy for generating keys (no comma, no line terminator)
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Simple identifiers
        "[a-zA-Z][a-zA-Z0-9_-]{0,16}".prop_map(|s| s),
        // Empty key is valid: the line starts with the comma
        Just(String::new()),
        // Keys with spaces and punctuation other than the comma
        "[a-zA-Z0-9 .:/]{0,16}".prop_map(|s| s),
    ]
}

/// Strategy for generating values safe to place in an input line
/// (no comma, no line terminator; arbitrary Unicode otherwise)
fn line_safe_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plain ASCII values
        "[a-zA-Z0-9 ]{0,20}".prop_map(|s| s),
        // Empty value
        Just(String::new()),
        // BMP characters outside ASCII
        Just("Hello 世界".to_string()),
        // Supplementary-plane characters (escape to surrogate pairs)
        Just("𝕳𝕳".to_string()),
        Just("café 🌍".to_string()),
    ]
}

/// Strategy for generating lists of (key, value) records
fn records_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((key_strategy(), line_safe_value_strategy()), 0..32)
}

proptest! {
    /// Decoding the escaped form reconstructs the value exactly
    #[test]
    fn prop_unescape_inverts_escape(value in any::<String>()) {
        let escaped = escape_value(&value);
        prop_assert_eq!(unescape_value(&escaped).unwrap(), value);
    }

    /// One token per UTF-16 code unit, each exactly six characters
    #[test]
    fn prop_token_count_matches_utf16_length(value in any::<String>()) {
        let escaped = escape_value(&value);
        let units = value.encode_utf16().count();
        prop_assert_eq!(escaped.len(), units * ESCAPE_TOKEN_LEN);
    }

    /// Every token is `\u` followed by four lowercase hex digits
    #[test]
    fn prop_tokens_are_lowercase_hex(value in any::<String>()) {
        let escaped = escape_value(&value);
        for token in escaped.as_bytes().chunks(ESCAPE_TOKEN_LEN) {
            prop_assert_eq!(&token[..2], b"\\u");
            for &digit in &token[2..] {
                prop_assert!(
                    digit.is_ascii_digit() || (b'a'..=b'f').contains(&digit),
                    "unexpected digit {:?}", digit as char
                );
            }
        }
    }

    /// A BMP character escapes to one token, anything above U+FFFF to two
    #[test]
    fn prop_character_token_count(c in any::<char>()) {
        let escaped = escape_value(&c.to_string());
        let expected_tokens = if (c as u32) > 0xFFFF { 2 } else { 1 };
        prop_assert_eq!(escaped.len(), expected_tokens * ESCAPE_TOKEN_LEN);
    }

    /// Distinct values have distinct escaped forms
    #[test]
    fn prop_escape_is_injective(v1 in any::<String>(), v2 in any::<String>()) {
        prop_assume!(v1 != v2);
        prop_assert_ne!(escape_value(&v1), escape_value(&v2));
    }

    /// A full pass writes exactly one output line per input line, in order
    #[test]
    fn prop_pass_preserves_line_count_and_order(records in records_strategy()) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");

        let mut contents = String::new();
        for (key, value) in &records {
            contents.push_str(key);
            contents.push(',');
            contents.push_str(value);
            contents.push('\n');
        }
        std::fs::write(&path, &contents).unwrap();

        let mut output = Vec::new();
        let stats = Transcoder::new(&path, false).run(&mut output).unwrap();
        prop_assert_eq!(stats.total_records, records.len() as u64);

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        prop_assert_eq!(lines.len(), records.len());
        for ((key, value), line) in records.iter().zip(lines) {
            let expected = format!("{}\x01{}", key, escape_value(value));
            prop_assert_eq!(line, expected.as_str());
        }
    }
}
