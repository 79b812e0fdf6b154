//! GWO engine
//!
//! This module provides the run configuration and the hunt loop.

pub mod config;
pub mod engine;

pub mod prelude {
    pub use super::config::GwoConfig;
    pub use super::engine::{
        ChaoticGwo, ConventionalGwo, Gwo, GwoBuilder, HuntResult, Progress,
    };
}
