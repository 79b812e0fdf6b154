//! The hunt loop
//!
//! One engine, parameterized by its random source: the conventional and
//! chaotic variants share every line of the update loop and differ only in
//! the source they draw from.

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{ConfigError, GwoError, GwoResult};
use crate::objective::traits::Objective;
use crate::optimizer::config::GwoConfig;
use crate::pack::pack::{Leaders, Pack};
use crate::source::{ChaoticSource, RandomSource, UniformSource};

/// GWO engine driven by independent uniform draws
pub type ConventionalGwo<O> = Gwo<O, UniformSource>;

/// GWO engine driven by the logistic-map sequence
pub type ChaoticGwo<O> = Gwo<O, ChaoticSource>;

/// Per-iteration progress report
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    /// Iteration index (0-based)
    pub iteration: usize,
    /// Alpha's fitness at the start of the iteration
    pub best_fitness: f64,
}

/// Outcome of a hunt
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HuntResult {
    /// Fitness of the best wolf after the final iteration
    pub best_fitness: f64,
    /// Position of the best wolf
    pub best_position: Vec<f64>,
    /// Total objective evaluations across the run
    pub evaluations: usize,
}

/// Grey wolf optimizer
///
/// Owns the configuration, the objective and the random source. The pack
/// lives only for the duration of a hunt; each hunt starts from a fresh one.
pub struct Gwo<O, S> {
    config: GwoConfig,
    objective: O,
    source: S,
}

impl<O: Objective> ConventionalGwo<O> {
    /// Engine with a uniform source under a fixed seed
    pub fn seeded(config: GwoConfig, objective: O, seed: u64) -> GwoResult<Self> {
        Gwo::new(config, objective, UniformSource::seeded(seed))
    }
}

impl<O: Objective> ChaoticGwo<O> {
    /// Engine with the logistic-map source; `seed` drives its reseed draws
    pub fn seeded(config: GwoConfig, objective: O, seed: u64) -> GwoResult<Self> {
        Gwo::new(config, objective, ChaoticSource::seeded(seed))
    }
}

impl<O: Objective, S: RandomSource> Gwo<O, S> {
    /// Create an engine, validating the configuration
    pub fn new(config: GwoConfig, objective: O, source: S) -> GwoResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            objective,
            source,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &GwoConfig {
        &self.config
    }

    /// Run a full hunt from a fresh random pack
    pub fn hunt(&mut self) -> GwoResult<HuntResult> {
        self.hunt_with_progress(|_| {})
    }

    /// Run a full hunt, reporting per-iteration progress
    pub fn hunt_with_progress<P>(&mut self, progress: P) -> GwoResult<HuntResult>
    where
        P: FnMut(Progress),
    {
        let pack = Pack::random(
            self.config.pack_size,
            self.config.vector_size,
            self.config.bounds,
            &mut self.source,
        );
        self.run(pack, progress)
    }

    /// Run a full hunt from a caller-built pack
    ///
    /// The pack must match the configured pack and vector sizes. Fitness
    /// values already cached on its wolves are trusted, not recomputed.
    pub fn hunt_from(&mut self, pack: Pack) -> GwoResult<HuntResult> {
        self.hunt_from_with_progress(pack, |_| {})
    }

    /// [`Gwo::hunt_from`] with a progress observer
    pub fn hunt_from_with_progress<P>(&mut self, pack: Pack, progress: P) -> GwoResult<HuntResult>
    where
        P: FnMut(Progress),
    {
        if pack.len() != self.config.pack_size {
            return Err(GwoError::PackShape {
                expected: self.config.pack_size,
                actual: pack.len(),
            });
        }
        if let Some(wolf) = pack.iter().find(|w| w.dimension() != self.config.vector_size) {
            return Err(GwoError::WolfShape {
                expected: self.config.vector_size,
                actual: wolf.dimension(),
            });
        }
        self.run(pack, progress)
    }

    fn run<P>(&mut self, mut pack: Pack, mut progress: P) -> GwoResult<HuntResult>
    where
        P: FnMut(Progress),
    {
        let mut evaluations = pack.evaluate(&self.objective)?;
        pack.rank();

        for k in 0..self.config.iterations {
            // Value snapshot: replacing a top-ranked wolf mid-pass must not
            // move the attractors for the rest of the pass.
            let leaders = pack
                .leaders()
                .expect("validated configuration guarantees at least 3 wolves");
            let a = decay(k, self.config.iterations);

            // Alpha's fitness is already cached from the ranking step.
            progress(Progress {
                iteration: k,
                best_fitness: leaders.alpha.fitness_value(),
            });

            for i in 0..pack.len() {
                let coefficients = Coefficients::draw(a, &mut self.source);
                let candidate = coefficients.candidate(&leaders, pack[i].position());

                let fitness = self.objective.evaluate(&candidate);
                if !fitness.is_finite() {
                    return Err(GwoError::NonFiniteFitness { value: fitness });
                }
                evaluations += 1;

                // Greedy acceptance: a wolf only ever improves.
                if fitness < pack[i].fitness_value() {
                    pack[i].replace(candidate, fitness);
                }
            }

            pack.rank();
        }

        let best = &pack[0];
        Ok(HuntResult {
            best_fitness: best.fitness_value(),
            best_position: best.position().to_vec(),
            evaluations,
        })
    }
}

/// Exploration coefficient, linear from 2 toward (but never reaching) 0
fn decay(iteration: usize, iterations: usize) -> f64 {
    2.0 * (1.0 - iteration as f64 / iterations as f64)
}

/// The coefficient triples driving one wolf's position update
///
/// Drawn once per wolf and reused across all of its coordinates: randomness
/// varies per wolf and per leader, not per coordinate.
struct Coefficients {
    a: [f64; 3],
    c: [f64; 3],
}

impl Coefficients {
    /// Draw six values and form the A and C triples
    fn draw<S: RandomSource>(decay: f64, source: &mut S) -> Self {
        let mut a = [0.0; 3];
        let mut c = [0.0; 3];
        for a_m in &mut a {
            *a_m = decay * (2.0 * source.draw() - 1.0);
        }
        for c_m in &mut c {
            *c_m = 2.0 * source.draw();
        }
        Self { a, c }
    }

    /// Candidate position: the mean of the three leader-guided steps
    fn candidate(&self, leaders: &Leaders, current: &[f64]) -> Vec<f64> {
        let alpha = leaders.alpha.position();
        let beta = leaders.beta.position();
        let delta = leaders.delta.position();

        (0..current.len())
            .map(|j| {
                let x1 = step(alpha[j], self.a[0], self.c[0], current[j]);
                let x2 = step(beta[j], self.a[1], self.c[1], current[j]);
                let x3 = step(delta[j], self.a[2], self.c[2], current[j]);
                (x1 + x2 + x3) / 3.0
            })
            .collect()
    }
}

/// One leader-guided step along a single coordinate
fn step(leader: f64, a_m: f64, c_m: f64, current: f64) -> f64 {
    leader - a_m * (c_m * leader - current).abs()
}

/// Builder for the GWO engine
///
/// The objective and source fix the engine's type parameters as they are
/// supplied.
pub struct GwoBuilder<O, S> {
    config: GwoConfig,
    objective: Option<O>,
    source: Option<S>,
}

impl GwoBuilder<(), ()> {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: GwoConfig::default(),
            objective: None,
            source: None,
        }
    }
}

impl Default for GwoBuilder<(), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, S> GwoBuilder<O, S> {
    /// Set the iteration budget
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Set the pack size
    pub fn pack_size(mut self, pack_size: usize) -> Self {
        self.config.pack_size = pack_size;
        self
    }

    /// Set the search-space dimensionality
    pub fn vector_size(mut self, vector_size: usize) -> Self {
        self.config.vector_size = vector_size;
        self
    }

    /// Set the initialization box
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.config.bounds = bounds;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: GwoConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the objective function
    pub fn objective<NewO: Objective>(self, objective: NewO) -> GwoBuilder<NewO, S> {
        GwoBuilder {
            config: self.config,
            objective: Some(objective),
            source: self.source,
        }
    }

    /// Set the random source
    pub fn source<NewS: RandomSource>(self, source: NewS) -> GwoBuilder<O, NewS> {
        GwoBuilder {
            config: self.config,
            objective: self.objective,
            source: Some(source),
        }
    }
}

impl<O: Objective, S: RandomSource> GwoBuilder<O, S> {
    /// Build the engine, validating the configuration
    pub fn build(self) -> GwoResult<Gwo<O, S>> {
        let objective = self.objective.ok_or(ConfigError::Missing("objective"))?;
        let source = self.source.ok_or(ConfigError::Missing("random source"))?;
        Gwo::new(self.config, objective, source)
    }
}
