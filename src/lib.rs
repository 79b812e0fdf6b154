//! # greywolf
//!
//! A grey wolf optimizer (GWO) for continuous minimization problems.
//!
//! Every iteration the pack of candidate solutions is ranked by fitness and
//! the three best wolves (alpha, beta, delta) act as attractors: each wolf
//! moves toward a randomized interpolation of the three under a linearly
//! decaying exploration coefficient. Moves are accepted greedily, so the best
//! solution never regresses.
//!
//! Two entropy sources drive the update rule:
//!
//! - **Uniform**: independent draws from an explicitly seedable generator
//! - **Chaotic**: a deterministic logistic-map sequence, `z <- 4z(1 - z)`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use greywolf::prelude::*;
//!
//! let mut gwo = GwoBuilder::new()
//!     .iterations(20)
//!     .pack_size(10)
//!     .vector_size(3)
//!     .objective(Sphere::new(3))
//!     .source(UniformSource::seeded(42))
//!     .build()?;
//!
//! let result = gwo.hunt()?;
//! println!("{} at {:?}", result.best_fitness, result.best_position);
//! ```

pub mod bounds;
pub mod error;
pub mod objective;
pub mod optimizer;
pub mod pack;
pub mod source;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bounds::Bounds;
    pub use crate::error::*;
    pub use crate::objective::prelude::*;
    pub use crate::optimizer::prelude::*;
    pub use crate::pack::prelude::*;
    pub use crate::source::prelude::*;
}
