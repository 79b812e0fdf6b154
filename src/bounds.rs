//! Initialization bounds
//!
//! The box the initial pack is placed in. Bounds constrain initialization
//! only; the update rule is free to move wolves outside the box afterwards.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::source::RandomSource;

/// Half-open initialization interval [min, max)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (exclusive)
    pub max: f64,
}

impl Bounds {
    /// Create new bounds, rejecting non-finite or inverted intervals
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigError::Bounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create symmetric bounds centered at 0
    pub fn symmetric(half_width: f64) -> Result<Self, ConfigError> {
        Self::new(-half_width, half_width)
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value lies within [min, max)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    /// Draw a coordinate in [min, max) from the given source
    pub fn sample<S: RandomSource>(&self, source: &mut S) -> f64 {
        self.range() * source.draw() + self.min
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: -10.0,
            max: 10.0,
        }
    }
}
