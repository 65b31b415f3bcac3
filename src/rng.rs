//! Random index sources for the allocator.
//!
//! Allocation only ever needs "a uniform index below `len`", so that is the
//! whole seam. Seeded ChaCha gives reproducible rooms.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait IndexSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Adapts any `rand::Rng` into an [`IndexSource`].
#[derive(Debug, Clone)]
pub struct RngIndexSource<R> {
    rng: R,
}

impl<R: Rng> RngIndexSource<R> {
    pub fn new(rng: R) -> Self {
        RngIndexSource { rng }
    }
}

impl RngIndexSource<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl<R: Rng> IndexSource for RngIndexSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
