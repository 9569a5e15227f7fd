//! Variable-length base-62 integers.
//!
//! Every order key starts with a self-delimiting integer part. The first
//! character, the head, says how many characters the integer part spans and
//! which sign it carries:
//!
//! | head       | length          | sign     |
//! |------------|-----------------|----------|
//! | `a` .. `z` | `head - 'a' + 2`| positive |
//! | `A` .. `Z` | `'Z' - head + 2`| negative |
//!
//! So `a0` is zero, `a1`..`az` follow it, then `b10`, `b11`, and so on; below
//! zero come `Zz`, `Zy`, ..., `Z0`, `Yzz`, ... down to the reserved minimum
//! [`SMALLEST_INTEGER`].

use smallvec::SmallVec;

use crate::error::Error;
use crate::error::Result;

/// The base-62 alphabet, in byte order.
pub const DIGITS: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of symbols in [`DIGITS`].
pub const BASE: usize = 62;

/// The canonical zero integer part, and the key returned for an empty range.
pub const ZERO: &str = "a0";

/// The smallest integer part expressible. Never a valid key on its own.
pub const SMALLEST_INTEGER: &str = "A00000000000000000000000000";

/// The longest integer part, head included.
pub const MAX_INTEGER_LEN: usize = 27;

type Digits = SmallVec<[u8; MAX_INTEGER_LEN]>;

/// Index of `c` in [`DIGITS`].
pub fn digit_value(c: char) -> Result<usize> {
    let value = match c {
        '0'..='9' => c as usize - '0' as usize,
        'A'..='Z' => c as usize - 'A' as usize + 10,
        'a'..='z' => c as usize - 'a' as usize + 36,
        _ => {
            return Err(Error::InvalidDigit { key: c.to_string(), digit: c });
        }
    };
    return Ok(value);
}

/// Like [`digit_value`], but reports the whole key on failure.
pub(crate) fn digit_in(key: &str, c: u8) -> Result<usize> {
    return digit_value(c as char).map_err(|_| Error::InvalidDigit {
        key: key.to_string(),
        digit: c as char,
    });
}

/// Character at index `value` of [`DIGITS`].
pub(crate) fn digit_char(value: usize) -> char {
    return DIGITS[value] as char;
}

/// Total length of an integer part, head included, given its head.
pub fn integer_length(head: char) -> Result<usize> {
    return match head {
        'a'..='z' => Ok(head as usize - 'a' as usize + 2),
        'A'..='Z' => Ok('Z' as usize - head as usize + 2),
        _ => Err(Error::InvalidHead(head)),
    };
}

/// Split a key into its integer part and its fractional part.
pub fn split_integer_part(key: &str) -> Result<(&str, &str)> {
    let head = match key.chars().next() {
        Some(head) => head,
        None => return Err(Error::InvalidKey(String::new())),
    };
    let length = integer_length(head)?;
    return match (key.get(..length), key.get(length..)) {
        (Some(integer), Some(fraction)) => Ok((integer, fraction)),
        _ => Err(Error::InvalidKey(key.to_string())),
    };
}

/// Check that an integer part is exactly as long as its head declares.
pub fn validate_integer(integer: &str) -> Result<()> {
    let head = match integer.chars().next() {
        Some(head) => head,
        None => return Err(Error::InvalidKey(String::new())),
    };
    if integer.len() != integer_length(head)? {
        return Err(Error::InvalidKey(integer.to_string()));
    }
    return Ok(());
}

/// Whether the head encodes a negative integer.
pub fn is_negative(head: char) -> bool {
    return head.is_ascii_uppercase();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sign {
    Negative,
    Positive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Up,
    Down,
}

/// What the head does once a carry (or borrow) runs off the top digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HeadShift {
    /// No head left in this direction.
    Exhausted,
    /// Crossing between `Z` and `a`; the result is a fixed two-character value.
    CrossSign,
    /// Move to this head and keep one more digit.
    Widen(u8),
    /// Move to this head and drop the leading digit.
    Narrow(u8),
}

fn sign_of(head: u8) -> Sign {
    if head.is_ascii_uppercase() {
        return Sign::Negative;
    }
    return Sign::Positive;
}

fn shift_head(head: u8, step: Step) -> HeadShift {
    return match (sign_of(head), step) {
        (Sign::Positive, Step::Up) if head == b'z' => HeadShift::Exhausted,
        (Sign::Positive, Step::Up) => HeadShift::Widen(head + 1),
        (Sign::Negative, Step::Up) if head == b'Z' => HeadShift::CrossSign,
        (Sign::Negative, Step::Up) => HeadShift::Narrow(head + 1),
        (Sign::Positive, Step::Down) if head == b'a' => HeadShift::CrossSign,
        (Sign::Positive, Step::Down) => HeadShift::Narrow(head - 1),
        (Sign::Negative, Step::Down) if head == b'A' => HeadShift::Exhausted,
        (Sign::Negative, Step::Down) => HeadShift::Widen(head - 1),
    };
}

/// Add or subtract one from the digits in place. Returns true if the carry
/// (or borrow) ran off the most significant digit.
fn ripple(integer: &str, digits: &mut Digits, step: Step) -> Result<bool> {
    for digit in digits.iter_mut().rev() {
        let value = digit_in(integer, *digit)?;
        match step {
            Step::Up if value == BASE - 1 => *digit = DIGITS[0],
            Step::Up => {
                *digit = DIGITS[value + 1];
                return Ok(false);
            }
            Step::Down if value == 0 => *digit = DIGITS[BASE - 1],
            Step::Down => {
                *digit = DIGITS[value - 1];
                return Ok(false);
            }
        }
    }
    return Ok(true);
}

fn assemble(head: u8, digits: &[u8]) -> String {
    let mut out = String::with_capacity(digits.len() + 1);
    out.push(head as char);
    out.extend(digits.iter().map(|d| *d as char));
    return out;
}

fn step_integer(integer: &str, step: Step) -> Result<Option<String>> {
    validate_integer(integer)?;
    let bytes = integer.as_bytes();
    let head = bytes[0];
    let mut digits: Digits = SmallVec::from_slice(&bytes[1..]);

    if !ripple(integer, &mut digits, step)? {
        return Ok(Some(assemble(head, &digits)));
    }

    // The rippled-out digit is `0` going up and `z` going down. Widening
    // keeps it, narrowing drops the now-leading one.
    return match shift_head(head, step) {
        HeadShift::Exhausted => Ok(None),
        HeadShift::CrossSign => match step {
            Step::Up => Ok(Some(ZERO.to_string())),
            Step::Down => Ok(Some("Zz".to_string())),
        },
        HeadShift::Widen(next) => {
            let carried = match step {
                Step::Up => DIGITS[0],
                Step::Down => DIGITS[BASE - 1],
            };
            digits.push(carried);
            Ok(Some(assemble(next, &digits)))
        }
        HeadShift::Narrow(next) => Ok(Some(assemble(next, &digits[1..]))),
    };
}

/// The next integer part in sequence, or `None` past the largest (`z...z`).
pub fn increment_integer(integer: &str) -> Result<Option<String>> {
    return step_integer(integer, Step::Up);
}

/// The previous integer part in sequence, or `None` below the smallest (`A0...0`).
pub fn decrement_integer(integer: &str) -> Result<Option<String>> {
    return step_integer(integer, Step::Down);
}
