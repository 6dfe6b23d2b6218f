//! Random index source for password generation.
//!
//! Generation only ever needs "a uniform index below `bound`", so that is the
//! whole capability. The production source is a ChaCha20 CSPRNG seeded once
//! from the operating system.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Uniform value in `0..bound`. `bound` is never zero.
    fn index(&mut self, bound: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    #[inline]
    fn index(&mut self, bound: usize) -> usize {
        (**self).index(bound)
    }
}

/// ChaCha20 CSPRNG.
pub struct Csprng(ChaCha20Rng);

impl Csprng {
    /// Seed from the operating system entropy source.
    pub fn from_entropy() -> Self {
        log::debug!("seeding ChaCha20 from OS entropy");
        Csprng(ChaCha20Rng::from_entropy())
    }

    /// Deterministic stream, for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Csprng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl RandomSource for Csprng {
    #[inline]
    fn index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}
