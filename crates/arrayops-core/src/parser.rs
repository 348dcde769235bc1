//! Input parser and result formatter
//!
//! Converts the raw text the user typed into an integer sequence, and the
//! other way around for display.
//!
//! Guarantees:
//! - Deterministic: same input always produces the same sequence
//! - All-or-nothing: a single bad token fails the whole parse, no partial
//!   results
//! - Round-trip: formatting a sequence and re-parsing the bare values
//!   reproduces the original sequence

use crate::{Error, Result};

/// Parse a comma-separated list of signed decimal integers.
///
/// Each token may be surrounded by whitespace. Empty tokens (as produced by
/// a trailing comma or doubled commas) are skipped, so an empty or
/// whitespace-only string parses to the empty sequence.
///
/// # Errors
/// Returns `ParseError` naming the first offending token when any token is
/// not a valid signed decimal integer.
pub fn parse_array(input: &str) -> Result<Vec<i64>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| Error::ParseError(format!("invalid integer token '{}'", token)))
        })
        .collect()
}

/// Format a sequence for display: bracketed, comma-space-separated decimal
/// values, e.g. `[1, 2, 3]`.
pub fn format_array(values: &[i64]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_list() {
        assert_eq!(parse_array("1,2,3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_array("  1 ,  2  ,  3  ").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_negative_values() {
        assert_eq!(parse_array("-1, -2, 3").unwrap(), vec![-1, -2, 3]);
    }

    #[test]
    fn test_parse_empty_and_whitespace_only() {
        assert_eq!(parse_array("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_array("   ").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_skips_empty_tokens() {
        assert_eq!(parse_array("1,,2,").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_parse_rejects_non_integer_token() {
        let err = parse_array("1, abc, 3").unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_parse_rejects_float_token() {
        assert!(parse_array("1, 2.5").is_err());
    }

    #[test]
    fn test_format_array() {
        assert_eq!(format_array(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format_array(&[42]), "[42]");
        assert_eq!(format_array(&[]), "[]");
    }

    #[test]
    fn test_format_then_parse_round_trips() {
        let original = vec![3, -1, 0, 7];
        let formatted = format_array(&original);
        // Strip the brackets and re-parse the bare values
        let bare = formatted.trim_start_matches('[').trim_end_matches(']');
        assert_eq!(parse_array(bare).unwrap(), original);
    }
}
