//! Sources of randomness for jittered key generation.
//!
//! Independent writers that insert between the same pair of keys would all
//! pick the same midpoint. A [`Jitter`] source lets each of them pick a
//! slightly different digit instead. This spreads the picks out but does not
//! make them unique; the storage layer still has to handle duplicates.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_core::OsRng;
use rand_core::RngCore;

/// Draws uniform integers from a closed range.
pub trait Jitter {
    /// A uniform integer in `[min, max]`, inclusive.
    fn int_in_range(&mut self, min: usize, max: usize) -> usize;
}

impl<J: Jitter + ?Sized> Jitter for &mut J {
    fn int_in_range(&mut self, min: usize, max: usize) -> usize {
        return (**self).int_in_range(min, max);
    }
}

/// A source that always answers `min`, i.e. never perturbs anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn int_in_range(&mut self, min: usize, _max: usize) -> usize {
        return min;
    }
}

/// A source backed by any random number generator.
#[derive(Clone, Debug)]
pub struct RngJitter<R> {
    rng: R,
}

impl<R: RngCore> RngJitter<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> RngJitter<R> {
        return RngJitter { rng };
    }

    /// Give the generator back.
    pub fn into_inner(self) -> R {
        return self.rng;
    }
}

impl RngJitter<StdRng> {
    /// A generator seeded from the operating system.
    pub fn from_entropy() -> RngJitter<StdRng> {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        return RngJitter::new(StdRng::from_seed(seed));
    }

    /// A reproducible generator.
    pub fn seeded(seed: u64) -> RngJitter<StdRng> {
        return RngJitter::new(StdRng::seed_from_u64(seed));
    }

    /// A reproducible generator unique to one writer.
    ///
    /// The seed is the blake3 hash of `writer_id`, so two replicas with
    /// different identities draw different sequences while each replica
    /// stays deterministic across restarts.
    pub fn for_writer(writer_id: &[u8]) -> RngJitter<StdRng> {
        let seed = blake3::hash(writer_id);
        return RngJitter::new(StdRng::from_seed(*seed.as_bytes()));
    }
}

impl<R: RngCore> Jitter for RngJitter<R> {
    fn int_in_range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        return self.rng.gen_range(min..=max);
    }
}

/// Draw from `jitter` and clamp the answer into `[min, max]`.
pub(crate) fn draw<J: Jitter + ?Sized>(jitter: &mut J, min: usize, max: usize) -> usize {
    if max <= min {
        return min;
    }
    return jitter.int_in_range(min, max).clamp(min, max);
}
