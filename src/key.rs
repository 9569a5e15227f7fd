//! Generating order keys.
//!
//! Every function here takes keys as plain strings, with `""` standing for
//! an open bound: `""` as `a` means "before everything", `""` as `b` means
//! "after everything".
//!
//! ```
//! use orderkey::key_between;
//!
//! let first = key_between("", "").unwrap();
//! let second = key_between(&first, "").unwrap();
//! let middle = key_between(&first, &second).unwrap();
//! assert_eq!((first.as_str(), middle.as_str(), second.as_str()), ("a0", "a0V", "a1"));
//! ```

use tracing::debug;
use tracing::trace;

use crate::codec::BASE;
use crate::codec::SMALLEST_INTEGER;
use crate::codec::ZERO;
use crate::codec::decrement_integer;
use crate::codec::digit_in;
use crate::codec::increment_integer;
use crate::codec::is_negative;
use crate::codec::split_integer_part;
use crate::error::Error;
use crate::error::Result;
use crate::jitter::Jitter;
use crate::jitter::NoJitter;
use crate::midpoint::fractional_midpoint;
use crate::midpoint::fractional_midpoint_jitter;

/// Check that `key` is a well-formed order key.
pub fn validate_order_key(key: &str) -> Result<()> {
    if key.is_empty() || key == SMALLEST_INTEGER {
        return Err(Error::InvalidKey(key.to_string()));
    }
    let (_, fraction) = split_integer_part(key)?;
    for c in key.bytes().skip(1) {
        digit_in(key, c)?;
    }
    if fraction.ends_with('0') {
        return Err(Error::InvalidKey(key.to_string()));
    }
    return Ok(());
}

/// How fractional midpoints get picked.
enum Engine<'j, J: Jitter + ?Sized> {
    Exact,
    Jittered { jitter: &'j mut J, range: usize },
}

impl<J: Jitter + ?Sized> Engine<'_, J> {
    fn midpoint(&mut self, a: &str, b: &str) -> Result<String> {
        return match self {
            Engine::Exact => fractional_midpoint(a, b),
            Engine::Jittered { jitter, range } => {
                fractional_midpoint_jitter(a, b, &mut **jitter, *range)
            }
        };
    }
}

fn dispatch<J: Jitter + ?Sized>(a: &str, b: &str, engine: &mut Engine<'_, J>) -> Result<String> {
    if !a.is_empty() {
        validate_order_key(a)?;
    }
    if !b.is_empty() {
        validate_order_key(b)?;
    }
    if !a.is_empty() && !b.is_empty() && a >= b {
        return Err(Error::Range { a: a.to_string(), b: b.to_string() });
    }

    return match (a.is_empty(), b.is_empty()) {
        (true, true) => Ok(ZERO.to_string()),
        (true, false) => below(b, engine),
        (false, true) => above(a, engine),
        (false, false) => inside(a, b, engine),
    };
}

fn below<J: Jitter + ?Sized>(b: &str, engine: &mut Engine<'_, J>) -> Result<String> {
    let (integer, fraction) = split_integer_part(b)?;
    if integer == SMALLEST_INTEGER {
        let fraction = engine.midpoint("", fraction)?;
        return Ok(format!("{}{}", integer, fraction));
    }
    if integer < b {
        return Ok(integer.to_string());
    }
    return match decrement_integer(integer)? {
        // The minimum itself is reserved; hang a fraction off it instead.
        Some(previous) if previous == SMALLEST_INTEGER => {
            let fraction = engine.midpoint("", "")?;
            Ok(format!("{}{}", previous, fraction))
        }
        Some(previous) => Ok(previous),
        None => {
            debug!(b, "no integer below bound");
            Err(Error::RangeUnderflow)
        }
    };
}

fn above<J: Jitter + ?Sized>(a: &str, engine: &mut Engine<'_, J>) -> Result<String> {
    let (integer, fraction) = split_integer_part(a)?;
    if let Some(next) = increment_integer(integer)? {
        return Ok(next);
    }
    trace!(a, "integer space exhausted, extending fraction");
    let fraction = engine.midpoint(fraction, "")?;
    return Ok(format!("{}{}", integer, fraction));
}

fn inside<J: Jitter + ?Sized>(a: &str, b: &str, engine: &mut Engine<'_, J>) -> Result<String> {
    let (integer_a, fraction_a) = split_integer_part(a)?;
    let (integer_b, fraction_b) = split_integer_part(b)?;
    if integer_a == integer_b {
        let fraction = engine.midpoint(fraction_a, fraction_b)?;
        return Ok(format!("{}{}", integer_a, fraction));
    }
    let next = match increment_integer(integer_a)? {
        Some(next) => next,
        None => {
            debug!(a, b, "no integer above lower bound");
            return Err(Error::RangeOverflow);
        }
    };
    if next.as_str() < b {
        return Ok(next);
    }
    let fraction = engine.midpoint(fraction_a, "")?;
    return Ok(format!("{}{}", integer_a, fraction));
}

fn spread<J: Jitter + ?Sized>(
    a: &str,
    b: &str,
    n: usize,
    engine: &mut Engine<'_, J>,
) -> Result<Vec<String>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let first = dispatch(a, b, engine)?;
    if n == 1 {
        return Ok(vec![first]);
    }

    if b.is_empty() {
        let mut keys = Vec::with_capacity(n);
        keys.push(first);
        while keys.len() < n {
            let next = dispatch(&keys[keys.len() - 1], b, engine)?;
            keys.push(next);
        }
        return Ok(keys);
    }

    if a.is_empty() {
        let mut keys = Vec::with_capacity(n);
        keys.push(first);
        while keys.len() < n {
            let next = dispatch(a, &keys[keys.len() - 1], engine)?;
            keys.push(next);
        }
        keys.reverse();
        return Ok(keys);
    }

    let half = n / 2;
    let mut keys = spread(a, &first, half, engine)?;
    let right = spread(&first, b, n - half - 1, engine)?;
    keys.reserve(right.len() + 1);
    keys.push(first);
    keys.extend(right);
    return Ok(keys);
}

/// A key that sorts strictly between `a` and `b`.
pub fn key_between(a: &str, b: &str) -> Result<String> {
    return dispatch(a, b, &mut Engine::<NoJitter>::Exact);
}

/// Like [`key_between`], but randomizes the fractional digit it picks.
///
/// Independent writers inserting into the same gap are then unlikely to
/// produce the same key. They can still collide. A `range` of 0 returns
/// exactly what [`key_between`] would.
pub fn key_between_jitter<J: Jitter + ?Sized>(
    a: &str,
    b: &str,
    jitter: &mut J,
    range: usize,
) -> Result<String> {
    if range == 0 {
        return key_between(a, b);
    }
    return dispatch(a, b, &mut Engine::Jittered { jitter, range });
}

/// `n` increasing keys, all strictly between `a` and `b`.
///
/// Fails as a whole if any single key cannot be generated.
pub fn n_keys_between(a: &str, b: &str, n: usize) -> Result<Vec<String>> {
    return spread(a, b, n, &mut Engine::<NoJitter>::Exact);
}

/// Like [`n_keys_between`], with every key picked as in [`key_between_jitter`].
pub fn n_keys_between_jitter<J: Jitter + ?Sized>(
    a: &str,
    b: &str,
    n: usize,
    jitter: &mut J,
    range: usize,
) -> Result<Vec<String>> {
    if range == 0 {
        return n_keys_between(a, b, n);
    }
    return spread(a, b, n, &mut Engine::Jittered { jitter, range });
}

/// Step `distance` keys away from `key`: forward when positive, backward
/// when negative. Each step is a jittered open-ended [`key_between_jitter`].
pub fn key_after_jitter<J: Jitter + ?Sized>(
    key: &str,
    distance: i64,
    jitter: &mut J,
    range: usize,
) -> Result<String> {
    if distance == 0 {
        return Ok(key.to_string());
    }
    validate_order_key(key)?;

    let mut current = key.to_string();
    for step in 0..distance.unsigned_abs() {
        let next = if distance > 0 {
            key_between_jitter(&current, "", jitter, range)
        } else {
            key_between_jitter("", &current, jitter, range)
        };
        current = match next {
            Ok(next) => next,
            Err(error) => {
                debug!(key, distance, step, "stepping stopped early");
                return Err(error);
            }
        };
    }
    return Ok(current);
}

/// [`key_after_jitter`] in the other direction.
pub fn key_before_jitter<J: Jitter + ?Sized>(
    key: &str,
    distance: i64,
    jitter: &mut J,
    range: usize,
) -> Result<String> {
    return key_after_jitter(key, distance.saturating_neg(), jitter, range);
}

/// An approximate numeric value for `key`, e.g. to drive a slider.
///
/// The integer part counts whole units and the fractional part adds base-62
/// fractions. This is not an inverse of key generation; distinct keys may
/// map to the same float.
pub fn float64_approx(key: &str) -> Result<f64> {
    validate_order_key(key)?;
    let (integer, fraction) = split_integer_part(key)?;
    let base = BASE as f64;

    let mut value = 0.0;
    for (i, c) in integer.bytes().skip(1).rev().enumerate() {
        value += base.powi(i as i32) * digit_in(key, c)? as f64;
    }
    for (i, c) in fraction.bytes().enumerate() {
        value += digit_in(key, c)? as f64 / base.powi(i as i32 + 1);
    }

    if is_negative(integer.as_bytes()[0] as char) {
        value = -value;
    }
    return Ok(value);
}
