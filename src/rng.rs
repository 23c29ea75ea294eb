//! Seedable uniform generator used by the samplers.
//!
//! Each [`SampleRng`] is an independent stream. There is no process-wide
//! generator, so callers that need reproducible output in parallel simply
//! hold one instance each.

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

#[derive(Debug, Clone)]
pub struct SampleRng {
    inner: StdRng,
}

impl SampleRng {
    /// Seeds from `seed` when given, otherwise from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        SampleRng { inner: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        SampleRng { inner: StdRng::from_os_rng() }
    }

    /// Restarts the stream from `seed`, discarding the current state.
    pub fn reseed(&mut self, seed: u64) {
        trace!("reseeding sample generator with {seed}");
        self.inner = StdRng::seed_from_u64(seed);
    }

    /// Draws a uniform value in `[0, 1)`.
    pub fn next_uniform(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

impl Default for SampleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for SampleRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}
