//! Random value sources
//!
//! The update rule consumes a stream of values in [0, 1). Two sources are
//! provided: independent uniform draws and a deterministic chaotic sequence
//! generated by the logistic map.

pub mod chaotic;
pub mod uniform;

pub use chaotic::ChaoticSource;
pub use uniform::UniformSource;

/// A stream of values in [0, 1)
///
/// Sources are owned by exactly one optimizer per run; every draw advances
/// the source's internal state.
pub trait RandomSource {
    /// Produce the next value in [0, 1)
    fn draw(&mut self) -> f64;
}

pub mod prelude {
    pub use super::{ChaoticSource, RandomSource, UniformSource};
}
