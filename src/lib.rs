//! Orderkey - fractional-index keys for ordered collections.
//!
//! An order key is a short string over `0-9A-Za-z` that sorts by plain byte
//! comparison. Between any two keys there is always room for another, so
//! items can be moved or inserted without renumbering their neighbours.
//!
//! # Quick Start
//!
//! ```
//! use orderkey::key_between;
//! use orderkey::n_keys_between;
//!
//! let first = key_between("", "").unwrap();
//! assert_eq!(first, "a0");
//!
//! // Insert before, after, and between.
//! let before = key_between("", &first).unwrap();
//! let after = key_between(&first, "").unwrap();
//! let inside = key_between(&first, &after).unwrap();
//! assert!(before < first && first < inside && inside < after);
//!
//! // Seed a fresh list with evenly spread keys.
//! let keys = n_keys_between("", "", 3).unwrap();
//! assert_eq!(keys, ["a0", "a1", "a2"]);
//! ```
//!
//! # Layout
//!
//! - [`codec`]: the self-delimiting base-62 integer part of a key
//! - [`midpoint`]: choosing a fractional part between two others
//! - [`jitter`]: randomness for spreading concurrent writers apart
//! - [`key`]: the public key-generation functions
//! - [`OrderKey`], [`Lexorank`], [`Generator`]: typed wrappers on top

pub mod codec;
pub mod error;
pub mod generator;
pub mod jitter;
pub mod key;
pub mod lexorank;
pub mod midpoint;
pub mod order_key;

pub use error::Error;
pub use error::Result;
pub use generator::Generator;
pub use jitter::Jitter;
pub use jitter::NoJitter;
pub use jitter::RngJitter;
pub use key::float64_approx;
pub use key::key_after_jitter;
pub use key::key_before_jitter;
pub use key::key_between;
pub use key::key_between_jitter;
pub use key::n_keys_between;
pub use key::n_keys_between_jitter;
pub use key::validate_order_key;
pub use lexorank::Bucket;
pub use lexorank::Lexorank;
pub use order_key::OrderKey;
