//! Order keys tagged with a bucket.
//!
//! A bucket namespaces independent orderings that live side by side, e.g.
//! one per tenant or per board column. Rendered as `"<bucket>|<key>"`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::error::Result;
use crate::order_key::OrderKey;

/// A small namespace tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket(pub u8);

/// An order key within a bucket. Sorts by bucket, then by key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lexorank {
    bucket: Bucket,
    key: OrderKey,
}

impl Lexorank {
    pub fn new(bucket: Bucket, key: OrderKey) -> Lexorank {
        return Lexorank { bucket, key };
    }

    pub fn bucket(&self) -> Bucket {
        return self.bucket;
    }

    pub fn key(&self) -> &OrderKey {
        return &self.key;
    }

    /// A rank between two optional neighbours in `bucket`.
    ///
    /// Neighbours from another bucket are rejected, since their keys order a
    /// different collection.
    pub fn between(
        bucket: Bucket,
        before: Option<&Lexorank>,
        after: Option<&Lexorank>,
    ) -> Result<Lexorank> {
        for neighbour in [before, after].into_iter().flatten() {
            if neighbour.bucket != bucket {
                return Err(Error::InvalidLexorank(neighbour.to_string()));
            }
        }
        let key = OrderKey::between(before.map(|r| &r.key), after.map(|r| &r.key))?;
        return Ok(Lexorank { bucket, key });
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl fmt::Display for Lexorank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}|{}", self.bucket, self.key);
    }
}

impl FromStr for Lexorank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Lexorank> {
        let (bucket, key) = match s.split_once('|') {
            Some(parts) => parts,
            None => return Err(Error::InvalidLexorank(s.to_string())),
        };
        let bucket = match bucket.parse::<u8>() {
            Ok(bucket) => Bucket(bucket),
            Err(_) => return Err(Error::InvalidLexorank(s.to_string())),
        };
        let key = OrderKey::parse(key)?;
        return Ok(Lexorank { bucket, key });
    }
}
