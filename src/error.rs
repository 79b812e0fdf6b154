//! Error types for greywolf
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for invalid run configurations
///
/// Configuration problems are fatal and surface synchronously at
/// construction, before any iteration runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Fewer than 3 wolves cannot form the alpha/beta/delta triple
    #[error("pack size must be at least 3, got {0}")]
    PackSize(usize),

    /// Zero-dimensional search space
    #[error("vector size must be at least 1, got {0}")]
    VectorSize(usize),

    /// Empty iteration budget
    #[error("iteration count must be at least 1, got {0}")]
    Iterations(usize),

    /// Non-finite or inverted initialization bounds
    #[error("invalid bounds [{min}, {max})")]
    Bounds { min: f64, max: f64 },

    /// A required builder field was not supplied
    #[error("{0} must be specified")]
    Missing(&'static str),
}

/// Top-level error type for optimization runs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GwoError {
    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The objective function produced a non-finite fitness
    #[error("objective function returned a non-finite value: {value}")]
    NonFiniteFitness { value: f64 },

    /// A caller-supplied pack does not match the configured pack size
    #[error("pack has {actual} wolves, configuration expects {expected}")]
    PackShape { expected: usize, actual: usize },

    /// A caller-supplied wolf does not match the configured dimensionality
    #[error("wolf has {actual} coordinates, configuration expects {expected}")]
    WolfShape { expected: usize, actual: usize },
}

/// Result type alias for optimization operations
pub type GwoResult<T> = Result<T, GwoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::PackSize(2);
        assert_eq!(err.to_string(), "pack size must be at least 3, got 2");

        let err = ConfigError::Bounds {
            min: f64::NAN,
            max: 10.0,
        };
        assert_eq!(err.to_string(), "invalid bounds [NaN, 10)");

        let err = ConfigError::Missing("objective");
        assert_eq!(err.to_string(), "objective must be specified");
    }

    #[test]
    fn test_gwo_error_display() {
        let err = GwoError::NonFiniteFitness {
            value: f64::INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "objective function returned a non-finite value: inf"
        );

        let err = GwoError::PackShape {
            expected: 10,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "pack has 4 wolves, configuration expects 10"
        );
    }

    #[test]
    fn test_gwo_error_from_config_error() {
        let config_err = ConfigError::Iterations(0);
        let err: GwoError = config_err.into();
        assert!(matches!(err, GwoError::Config(_)));
    }
}
