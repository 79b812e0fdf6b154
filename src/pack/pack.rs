//! Pack container type
//!
//! This module provides the Pack container and the leader snapshot taken at
//! the start of each update pass.

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{GwoError, GwoResult};
use crate::objective::traits::Objective;
use crate::pack::wolf::Wolf;
use crate::source::RandomSource;

/// The population of candidate solutions maintained across iterations
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pack {
    wolves: Vec<Wolf>,
}

impl Pack {
    /// Create an empty pack
    pub fn new() -> Self {
        Self { wolves: Vec::new() }
    }

    /// Create a pack from a vector of wolves
    pub fn from_wolves(wolves: Vec<Wolf>) -> Self {
        Self { wolves }
    }

    /// Place `pack_size` wolves uniformly inside the bounds
    pub fn random<S: RandomSource>(
        pack_size: usize,
        vector_size: usize,
        bounds: Bounds,
        source: &mut S,
    ) -> Self {
        let wolves = (0..pack_size)
            .map(|_| Wolf::new((0..vector_size).map(|_| bounds.sample(source)).collect()))
            .collect();
        Self { wolves }
    }

    /// Get the pack size
    pub fn len(&self) -> usize {
        self.wolves.len()
    }

    /// Check if the pack is empty
    pub fn is_empty(&self) -> bool {
        self.wolves.is_empty()
    }

    /// Get a wolf by index
    pub fn get(&self, index: usize) -> Option<&Wolf> {
        self.wolves.get(index)
    }

    /// Get an iterator over the wolves
    pub fn iter(&self) -> impl Iterator<Item = &Wolf> {
        self.wolves.iter()
    }

    /// Get the underlying slice of wolves
    pub fn wolves(&self) -> &[Wolf] {
        &self.wolves
    }

    /// Take the wolves out of this pack
    pub fn into_wolves(self) -> Vec<Wolf> {
        self.wolves
    }

    /// Evaluate every unevaluated wolf, returning how many evaluations ran
    ///
    /// A non-finite fitness aborts the run.
    pub fn evaluate<O: Objective>(&mut self, objective: &O) -> GwoResult<usize> {
        let mut evaluated = 0;
        for wolf in &mut self.wolves {
            if !wolf.is_evaluated() {
                let fitness = objective.evaluate(wolf.position());
                if !fitness.is_finite() {
                    return Err(GwoError::NonFiniteFitness { value: fitness });
                }
                wolf.set_fitness(fitness);
                evaluated += 1;
            }
        }
        Ok(evaluated)
    }

    /// Sort the pack by ascending fitness
    ///
    /// The sort is stable: ties keep their original order. Unevaluated wolves
    /// sink to the back.
    pub fn rank(&mut self) {
        self.wolves.sort_by(|a, b| {
            let fa = a.fitness().unwrap_or(f64::INFINITY);
            let fb = b.fitness().unwrap_or(f64::INFINITY);
            fa.partial_cmp(&fb).unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// The wolf with the lowest cached fitness
    pub fn best(&self) -> Option<&Wolf> {
        self.wolves
            .iter()
            .filter(|w| w.is_evaluated())
            .min_by(|a, b| {
                a.fitness_value()
                    .partial_cmp(&b.fitness_value())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Value copies of the three best-ranked wolves
    ///
    /// Leaders are snapshots, never live references: replacing a top-ranked
    /// wolf mid-pass must not move the attractors the rest of the pass
    /// computes against. Requires a ranked pack of at least 3 wolves.
    pub fn leaders(&self) -> Option<Leaders> {
        if self.wolves.len() < 3 {
            return None;
        }
        Some(Leaders {
            alpha: self.wolves[0].clone(),
            beta: self.wolves[1].clone(),
            delta: self.wolves[2].clone(),
        })
    }
}

impl std::ops::Index<usize> for Pack {
    type Output = Wolf;

    fn index(&self, index: usize) -> &Self::Output {
        &self.wolves[index]
    }
}

impl std::ops::IndexMut<usize> for Pack {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.wolves[index]
    }
}

impl FromIterator<Wolf> for Pack {
    fn from_iter<I: IntoIterator<Item = Wolf>>(iter: I) -> Self {
        Self::from_wolves(iter.into_iter().collect())
    }
}

/// Snapshot of the leader triple for one update pass
#[derive(Clone, Debug, PartialEq)]
pub struct Leaders {
    /// Best-ranked wolf
    pub alpha: Wolf,
    /// Second best
    pub beta: Wolf,
    /// Third best
    pub delta: Wolf,
}
