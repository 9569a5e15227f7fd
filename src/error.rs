//! Errors returned by key generation and validation.

use std::fmt;

/// Everything that can go wrong while validating or generating order keys.
///
/// None of these are transient. Each one reflects a precondition the caller
/// violated, or an ordering space that has run out and must be rebalanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The leading character is not a letter, so the integer length is unknown.
    InvalidHead(char),
    /// The key is too short for its head, is the reserved minimum, or has a
    /// fractional part ending in `0`.
    InvalidKey(String),
    /// A character outside the base-62 alphabet appeared where a digit belongs.
    InvalidDigit { key: String, digit: char },
    /// Both bounds were given but `a >= b`.
    Range { a: String, b: String },
    /// The integer part cannot grow past the largest head.
    RangeOverflow,
    /// The integer part cannot shrink past the smallest head.
    RangeUnderflow,
    /// A `"<bucket>|<key>"` string could not be parsed.
    InvalidLexorank(String),
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Error::InvalidHead(head) => write!(f, "invalid order key head: {}", head),
            Error::InvalidKey(key) if key.is_empty() => write!(f, "invalid order key"),
            Error::InvalidKey(key) => write!(f, "invalid order key: {}", key),
            Error::InvalidDigit { key, digit } => {
                write!(f, "invalid digit '{}' in order key: {}", digit, key)
            }
            Error::Range { a, b } => write!(f, "{} >= {}", a, b),
            Error::RangeOverflow => write!(f, "range overflow"),
            Error::RangeUnderflow => write!(f, "range underflow"),
            Error::InvalidLexorank(s) => write!(f, "invalid lexorank: {}", s),
        };
    }
}

impl std::error::Error for Error {}
