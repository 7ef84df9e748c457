use std::str::FromStr;
use std::string::String;
use std::vec::Vec;

use num_complex::Complex64;
use thiserror::Error;

/// A token in the comma-separated input that is not a real or complex number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not parse element {index} ({token:?}) as a number")]
pub struct ParseError {
    pub index: usize,
    pub token: String,
}

/// Parses one number: `3`, `-1.5`, `2+3j`, `4-1j`, `0.5j`, `(1+2j)`.
///
/// Whitespace anywhere in the token is ignored, `J`/`i` work in place of `j`,
/// and a single pair of enclosing parentheses is dropped.
pub fn parse_complex(token: &str) -> Option<Complex64> {
    let compact: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == 'J' { 'j' } else { c })
        .collect();

    let body = compact
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(&compact);
    if body.is_empty() {
        return None;
    }

    Complex64::from_str(body).ok()
}

/// Splits `input` on commas and parses every element.
///
/// Reals come back with a zero imaginary part. Empty elements (for example
/// from a trailing comma) are rejected like any other malformed token.
pub fn parse_samples(input: &str) -> Result<Vec<Complex64>, ParseError> {
    input
        .split(',')
        .enumerate()
        .map(|(index, token)| {
            parse_complex(token).ok_or_else(|| ParseError {
                index,
                token: token.trim().into(),
            })
        })
        .collect()
}
