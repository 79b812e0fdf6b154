//! Chaotic random source
//!
//! Generates values with the logistic map `z <- 4z(1 - z)`, run in its fully
//! chaotic regime (growth parameter 4). The sequence is deterministic given a
//! starting state; a guard reseeds the state from the owned uniform generator
//! whenever it drifts within `1e-6` of the map's unstable fixed points at 0
//! and 1, where the sequence would otherwise degenerate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::source::RandomSource;

/// Default starting state. Must avoid 0.25, 0.5 and 0.75, which fall into
/// short or degenerate cycles under the map.
const INITIAL_STATE: f64 = 0.51;

/// Distance from 0 or 1 at which the state is considered degenerate
const FIXED_POINT_EPS: f64 = 1e-6;

/// Logistic-map sequence over (0, 1]
#[derive(Debug, Clone)]
pub struct ChaoticSource<R: Rng = StdRng> {
    state: f64,
    rng: R,
}

impl ChaoticSource<StdRng> {
    /// Create a source whose reseed draws come from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a source whose reseed draws come from system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ChaoticSource<R> {
    /// Create a source with the default starting state
    pub fn new(rng: R) -> Self {
        Self {
            state: INITIAL_STATE,
            rng,
        }
    }

    /// Create a source with an explicit starting state
    pub fn with_state(state: f64, rng: R) -> Self {
        Self { state, rng }
    }

    /// Current map state
    pub fn state(&self) -> f64 {
        self.state
    }
}

impl<R: Rng> RandomSource for ChaoticSource<R> {
    fn draw(&mut self) -> f64 {
        // Restart away from the fixed points; floating-point rounding can
        // still land exactly on 0 or 1 once, in which case the next call's
        // guard catches it.
        if self.state < FIXED_POINT_EPS || self.state > 1.0 - FIXED_POINT_EPS {
            self.state = self.rng.gen_range(0.1..0.9);
        }
        self.state = 4.0 * self.state * (1.0 - self.state);
        self.state
    }
}
