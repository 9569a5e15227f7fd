//! A configured source of order keys.
//!
//! Call sites that generate many keys usually want the same jitter settings
//! every time. A [`Generator`] holds them so the settings are chosen once.
//!
//! ```
//! use orderkey::Generator;
//!
//! let mut exact = Generator::new();
//! assert_eq!(exact.between("a0", "a1").unwrap(), "a0V");
//!
//! let mut replica = Generator::for_writer(b"replica-7", 4);
//! let key = replica.between("a0", "a1").unwrap();
//! assert!(key.as_str() > "a0" && key.as_str() < "a1");
//! ```

use rand::rngs::StdRng;

use crate::error::Result;
use crate::jitter::Jitter;
use crate::jitter::NoJitter;
use crate::jitter::RngJitter;
use crate::key::key_after_jitter;
use crate::key::key_before_jitter;
use crate::key::key_between_jitter;
use crate::key::n_keys_between_jitter;

/// Key generation with a fixed jitter source and range.
#[derive(Clone, Debug)]
pub struct Generator<J = NoJitter> {
    jitter: J,
    range: usize,
}

impl Generator<NoJitter> {
    /// Deterministic keys, identical to [`crate::key_between`].
    pub fn new() -> Generator<NoJitter> {
        return Generator { jitter: NoJitter, range: 0 };
    }
}

impl Default for Generator<NoJitter> {
    fn default() -> Generator<NoJitter> {
        return Generator::new();
    }
}

impl Generator<RngJitter<StdRng>> {
    /// Jittered keys from a generator seeded by `writer_id`.
    pub fn for_writer(writer_id: &[u8], range: usize) -> Generator<RngJitter<StdRng>> {
        return Generator::with_jitter(RngJitter::for_writer(writer_id), range);
    }
}

impl<J: Jitter> Generator<J> {
    pub fn with_jitter(jitter: J, range: usize) -> Generator<J> {
        return Generator { jitter, range };
    }

    pub fn range(&self) -> usize {
        return self.range;
    }

    /// Change the jitter range; 0 makes output deterministic.
    pub fn set_range(&mut self, range: usize) {
        self.range = range;
    }

    pub fn jitter_mut(&mut self) -> &mut J {
        return &mut self.jitter;
    }

    pub fn between(&mut self, a: &str, b: &str) -> Result<String> {
        return key_between_jitter(a, b, &mut self.jitter, self.range);
    }

    pub fn n_between(&mut self, a: &str, b: &str, n: usize) -> Result<Vec<String>> {
        return n_keys_between_jitter(a, b, n, &mut self.jitter, self.range);
    }

    pub fn after(&mut self, key: &str, distance: i64) -> Result<String> {
        return key_after_jitter(key, distance, &mut self.jitter, self.range);
    }

    pub fn before(&mut self, key: &str, distance: i64) -> Result<String> {
        return key_before_jitter(key, distance, &mut self.jitter, self.range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::key_between;
    use crate::key::n_keys_between;

    #[test]
    fn default_is_exact() {
        let mut generator = Generator::<NoJitter>::default();
        assert_eq!(generator.range(), 0);
        for (a, b) in [("", ""), ("a0", ""), ("", "a0"), ("a0", "a1"), ("a0V", "a1")] {
            assert_eq!(generator.between(a, b).unwrap(), key_between(a, b).unwrap());
        }
        assert_eq!(
            generator.n_between("a0", "a2", 20).unwrap(),
            n_keys_between("a0", "a2", 20).unwrap()
        );
    }

    #[test]
    fn zero_range_is_exact_even_with_randomness() {
        let mut generator = Generator::with_jitter(RngJitter::seeded(9), 0);
        assert_eq!(generator.between("a0", "a1").unwrap(), "a0V");
        generator.set_range(8);
        assert_eq!(generator.range(), 8);
        let key = generator.between("a0", "a1").unwrap();
        assert!(key.as_str() > "a0" && key.as_str() < "a1");
    }

    #[test]
    fn same_writer_same_keys() {
        let mut first = Generator::for_writer(b"w1", 5);
        let mut second = Generator::for_writer(b"w1", 5);
        for _ in 0..10 {
            assert_eq!(first.between("a0", "a1").unwrap(), second.between("a0", "a1").unwrap());
        }
    }

    #[test]
    fn steps() {
        let mut generator = Generator::new();
        assert_eq!(generator.after("a0", 2).unwrap(), "a2");
        assert_eq!(generator.before("a0", 2).unwrap(), "Zy");
    }
}
