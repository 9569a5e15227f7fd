//! Picking a fractional part strictly between two others.
//!
//! Fractional parts are compared digit by digit, with a missing digit on the
//! lower side read as `0` and a missing upper bound read as one past `z`.
//! At the first position where the two sides differ there are three cases:
//!
//! 1. There is a digit strictly between them. Take it and stop.
//! 2. The digits are consecutive and `b` keeps going. `b`'s first digit on
//!    its own is then shorter than `b` and still above `a`.
//! 3. Otherwise keep `a`'s digit and go one position deeper with no upper
//!    bound, until case 1 applies.
//!
//! The jittered engine walks the same three cases but draws the digit in
//! case 1 from a window around the middle, and may append a digit in case 2.

use crate::codec::BASE;
use crate::codec::digit_char;
use crate::codec::digit_in;
use crate::error::Error;
use crate::error::Result;
use crate::jitter::Jitter;
use crate::jitter::draw;

/// The shortest fractional part strictly between `a` and `b`.
///
/// An empty `a` means no lower bound, an empty `b` no upper bound.
pub fn midpoint(a: &str, b: &str) -> Result<String> {
    check_bounds(a, b)?;
    return fractional_midpoint(a, b);
}

/// A randomized fractional part strictly between `a` and `b`.
///
/// `range` bounds how far (in digit steps) the pick may stray from the exact
/// midpoint. A `range` of 0 gives exactly [`midpoint`].
pub fn midpoint_jitter<J: Jitter + ?Sized>(
    a: &str,
    b: &str,
    jitter: &mut J,
    range: usize,
) -> Result<String> {
    check_bounds(a, b)?;
    return fractional_midpoint_jitter(a, b, jitter, range);
}

fn check_fraction(fraction: &str) -> Result<()> {
    for c in fraction.bytes() {
        digit_in(fraction, c)?;
    }
    if fraction.ends_with('0') {
        return Err(Error::InvalidKey(fraction.to_string()));
    }
    return Ok(());
}

fn check_bounds(a: &str, b: &str) -> Result<()> {
    check_fraction(a)?;
    check_fraction(b)?;
    if !b.is_empty() && a >= b {
        return Err(Error::Range { a: a.to_string(), b: b.to_string() });
    }
    return Ok(());
}

/// Length of the shared prefix, padding `a` with `0`s.
fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    let mut n = 0;
    while n < b.len() && a.get(n).copied().unwrap_or(b'0') == b[n] {
        n += 1;
    }
    return n;
}

/// Emit the shared prefix and return what is left of both sides.
fn strip_prefix<'a, 'b>(a: &'a [u8], b: &'b [u8], out: &mut String) -> (&'a [u8], &'b [u8]) {
    if b.is_empty() {
        return (a, b);
    }
    let n = common_prefix(a, b);
    out.extend(b[..n].iter().map(|c| *c as char));
    return (a.get(n..).unwrap_or(&[]), &b[n..]);
}

/// The first digit of each side, `0` for an exhausted `a` and [`BASE`] for an
/// unbounded `b`.
fn leading_digits(source: (&str, &str), a: &[u8], b: &[u8]) -> Result<(usize, usize)> {
    let digit_a = match a.first() {
        Some(c) => digit_in(source.0, *c)?,
        None => 0,
    };
    let digit_b = match b.first() {
        Some(c) => digit_in(source.1, *c)?,
        None => BASE,
    };
    return Ok((digit_a, digit_b));
}

/// [`midpoint`] without re-checking its inputs.
pub(crate) fn fractional_midpoint(a: &str, b: &str) -> Result<String> {
    let mut out = String::with_capacity(a.len().max(b.len()) + 1);
    let (mut lower, mut upper) = (a.as_bytes(), b.as_bytes());
    loop {
        let (rest_a, rest_b) = strip_prefix(lower, upper, &mut out);
        let (digit_a, digit_b) = leading_digits((a, b), rest_a, rest_b)?;

        if digit_b.saturating_sub(digit_a) > 1 {
            out.push(digit_char((digit_a + digit_b + 1) / 2));
            return Ok(out);
        }

        if rest_b.len() > 1 {
            out.push(rest_b[0] as char);
            return Ok(out);
        }

        out.push(digit_char(digit_a));
        lower = rest_a.get(1..).unwrap_or(&[]);
        upper = &[];
    }
}

/// [`midpoint_jitter`] without re-checking its inputs.
pub(crate) fn fractional_midpoint_jitter<J: Jitter + ?Sized>(
    a: &str,
    b: &str,
    jitter: &mut J,
    range: usize,
) -> Result<String> {
    if range == 0 {
        return fractional_midpoint(a, b);
    }

    let mut out = String::with_capacity(a.len().max(b.len()) + 2);
    let (mut lower, mut upper) = (a.as_bytes(), b.as_bytes());
    loop {
        let (rest_a, rest_b) = strip_prefix(lower, upper, &mut out);
        let (digit_a, digit_b) = leading_digits((a, b), rest_a, rest_b)?;

        if digit_b.saturating_sub(digit_a) > 1 {
            let interior = digit_b - digit_a - 1;
            let center = digit_a + 1 + interior / 2;
            let lo = (digit_a + 1).max(center.saturating_sub(draw(jitter, 0, range)));
            let hi = (digit_b - 1).min(center + draw(jitter, 0, range));
            let pick = if hi > lo { draw(jitter, lo, hi) } else { lo };
            out.push(digit_char(pick));
            return Ok(out);
        }

        if rest_b.len() > 1 {
            out.push(rest_b[0] as char);
            // Any digit in 1..next keeps us below `b` without a trailing zero.
            let next = digit_in(b, rest_b[1])?;
            if next > 1 {
                let pick = draw(jitter, 1, (next - 1).min(1 + range));
                out.push(digit_char(pick));
            }
            return Ok(out);
        }

        out.push(digit_char(digit_a));
        lower = rest_a.get(1..).unwrap_or(&[]);
        upper = &[];
    }
}
