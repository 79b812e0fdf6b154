//! Objective functions
//!
//! This module provides the fitness contract the optimizer minimizes against,
//! plus standard benchmark functions.

pub mod benchmarks;
pub mod traits;

pub mod prelude {
    pub use super::benchmarks::*;
    pub use super::traits::*;
}
