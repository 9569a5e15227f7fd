//! A validated order key.

use std::fmt;
use std::str::FromStr;

use crate::codec::ZERO;
use crate::codec::split_integer_part;
use crate::error::Error;
use crate::error::Result;
use crate::key::float64_approx;
use crate::key::key_between;
use crate::key::n_keys_between;
use crate::key::validate_order_key;

/// An order key that is known to be well formed.
///
/// Ordering is plain byte order on the underlying string, so sorting a
/// collection of `OrderKey`s sorts it the same way a database would.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct OrderKey(String);

impl OrderKey {
    /// Validate `key` and wrap it.
    pub fn parse(key: &str) -> Result<OrderKey> {
        validate_order_key(key)?;
        return Ok(OrderKey(key.to_string()));
    }

    /// The key `a0`, returned for an empty collection.
    pub fn zero() -> OrderKey {
        return OrderKey(ZERO.to_string());
    }

    /// A key between two optional bounds. `None` leaves that side open.
    pub fn between(before: Option<&OrderKey>, after: Option<&OrderKey>) -> Result<OrderKey> {
        let key = key_between(bound(before), bound(after))?;
        return Ok(OrderKey(key));
    }

    /// `n` increasing keys between two optional bounds.
    pub fn n_between(
        before: Option<&OrderKey>,
        after: Option<&OrderKey>,
        n: usize,
    ) -> Result<Vec<OrderKey>> {
        let keys = n_keys_between(bound(before), bound(after), n)?;
        return Ok(keys.into_iter().map(OrderKey).collect());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }

    /// The self-delimiting integer prefix.
    pub fn integer_part(&self) -> &str {
        return self.split().0;
    }

    /// Everything after the integer prefix; may be empty.
    pub fn fractional_part(&self) -> &str {
        return self.split().1;
    }

    /// See [`float64_approx`].
    pub fn approx(&self) -> f64 {
        return float64_approx(&self.0).unwrap_or_default();
    }

    fn split(&self) -> (&str, &str) {
        // Parsing already checked that the integer part fits.
        return split_integer_part(&self.0).unwrap_or((self.0.as_str(), ""));
    }
}

fn bound(key: Option<&OrderKey>) -> &str {
    return key.map(OrderKey::as_str).unwrap_or("");
}

impl FromStr for OrderKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<OrderKey> {
        return OrderKey::parse(s);
    }
}

impl TryFrom<String> for OrderKey {
    type Error = Error;

    fn try_from(key: String) -> Result<OrderKey> {
        validate_order_key(&key)?;
        return Ok(OrderKey(key));
    }
}

impl From<OrderKey> for String {
    fn from(key: OrderKey) -> String {
        return key.0;
    }
}

impl AsRef<str> for OrderKey {
    fn as_ref(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.0);
    }
}

impl fmt::Debug for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "OrderKey({})", self.0);
    }
}
