//! Uniform random source
//!
//! Wraps an explicitly owned, explicitly seedable generator instance so that
//! runs are reproducible and never share process-global state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::source::RandomSource;

/// Independent uniform draws over [0, 1)
#[derive(Debug, Clone)]
pub struct UniformSource<R: Rng = StdRng> {
    rng: R,
}

impl UniformSource<StdRng> {
    /// Create a source with a fixed seed for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a source seeded from system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> UniformSource<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for UniformSource<R> {
    fn draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
