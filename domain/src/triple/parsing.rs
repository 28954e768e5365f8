//! Free-form triple parsing.
//!
//! Turns what a user typed into a [`Triple`] or a structured failure.
//! This is pure domain logic — no I/O, no panics, no best-effort string
//! mangling beyond the enumerated accepted shapes.
//!
//! # Accepted shapes
//!
//! | Shape | Example |
//! |-------|---------|
//! | comma-separated | `3,4,5` or `3, 4, 5` |
//! | parenthesized | `(3,4,5)` |
//! | bracketed | `[3,4,5]` |
//! | whitespace-separated | `3 4 5` |

use super::value_objects::Triple;
use thiserror::Error;

/// Why a raw input failed to parse as a triple.
///
/// All variants are expected user-input conditions, surfaced to the
/// caller as values rather than panics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTripleError {
    #[error("input is empty")]
    Empty,

    #[error("expected 3 values, found {0}")]
    WrongCount(usize),

    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error("{0} is not a positive edge length")]
    NotPositive(i128),

    #[error("'{0}' is too large for a 64-bit edge length")]
    ValueTooLarge(String),
}

/// Parse a raw string into a [`Triple`].
///
/// Parentheses and brackets are stripped first. If the remainder contains
/// a comma, all whitespace is removed and the comma is the separator;
/// otherwise the values are split on whitespace runs. Exactly three
/// non-empty parts must remain, each a positive integer.
///
/// Pythagorean equality downstream hinges on exact square comparison, so
/// values are kept as integers end to end — there is no floating-point
/// intermediate. Magnitude is bounded by `u64`; larger literals are
/// rejected as [`ParseTripleError::ValueTooLarge`].
///
/// # Example
///
/// ```
/// use brick_domain::{Triple, parse_triple};
///
/// assert_eq!(parse_triple("(44, 117, 125)"), Ok(Triple::new([44, 117, 125])));
/// assert_eq!(parse_triple("3 4 5"), Ok(Triple::new([3, 4, 5])));
/// assert!(parse_triple("3,4").is_err());
/// ```
pub fn parse_triple(raw: &str) -> Result<Triple, ParseTripleError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '[' | ']'))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(ParseTripleError::Empty);
    }

    let parts: Vec<String> = if cleaned.contains(',') {
        let no_ws: String = cleaned.chars().filter(|c| !c.is_whitespace()).collect();
        no_ws
            .split(',')
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        cleaned.split_whitespace().map(str::to_string).collect()
    };

    if parts.len() != 3 {
        return Err(ParseTripleError::WrongCount(parts.len()));
    }

    let mut values = [0u64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = parse_edge(part)?;
    }

    Ok(Triple::new(values))
}

/// Parse one part as a positive edge length.
fn parse_edge(part: &str) -> Result<u64, ParseTripleError> {
    match part.parse::<i128>() {
        Ok(value) if value <= 0 => Err(ParseTripleError::NotPositive(value)),
        Ok(value) => {
            u64::try_from(value).map_err(|_| ParseTripleError::ValueTooLarge(part.to_string()))
        }
        Err(_) if part.chars().all(|c| c.is_ascii_digit()) => {
            // All digits but refused by i128: magnitude, not syntax
            Err(ParseTripleError::ValueTooLarge(part.to_string()))
        }
        Err(_) => Err(ParseTripleError::NotAnInteger(part.to_string())),
    }
}
