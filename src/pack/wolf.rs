//! Wolf wrapper type
//!
//! This module provides the Wolf type that pairs a candidate position with
//! its cached fitness.

use serde::{Deserialize, Serialize};

/// One candidate solution in the pack
///
/// The cached fitness always describes the current position: `set_position`
/// clears it, and `replace` installs a position together with its fitness.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wolf {
    position: Vec<f64>,
    fitness: Option<f64>,
}

impl Wolf {
    /// Create a wolf with an unevaluated position
    pub fn new(position: Vec<f64>) -> Self {
        Self {
            position,
            fitness: None,
        }
    }

    /// Create a wolf with a known fitness
    pub fn with_fitness(position: Vec<f64>, fitness: f64) -> Self {
        Self {
            position,
            fitness: Some(fitness),
        }
    }

    /// Number of coordinates
    pub fn dimension(&self) -> usize {
        self.position.len()
    }

    /// Get the position
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Check if this wolf has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Cached fitness, if evaluated
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Cached fitness, panicking if not evaluated
    pub fn fitness_value(&self) -> f64 {
        self.fitness.expect("wolf has not been evaluated")
    }

    /// Record the fitness of the current position
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Overwrite the position, invalidating the cached fitness
    pub fn set_position(&mut self, position: Vec<f64>) {
        self.position = position;
        self.fitness = None;
    }

    /// Install a new position together with its fitness
    pub fn replace(&mut self, position: Vec<f64>, fitness: f64) {
        self.position = position;
        self.fitness = Some(fitness);
    }

    /// Take the position out of this wolf
    pub fn into_position(self) -> Vec<f64> {
        self.position
    }
}
