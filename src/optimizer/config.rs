//! Run configuration

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::ConfigError;

/// Construction parameters for a hunt
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GwoConfig {
    /// Number of optimization rounds
    pub iterations: usize,
    /// Number of wolves; at least 3 are needed to form the leader triple
    pub pack_size: usize,
    /// Search-space dimensionality
    pub vector_size: usize,
    /// Initialization box
    pub bounds: Bounds,
}

impl GwoConfig {
    /// Create a configuration over the default initialization box
    pub fn new(iterations: usize, pack_size: usize, vector_size: usize) -> Self {
        Self {
            iterations,
            pack_size,
            vector_size,
            bounds: Bounds::default(),
        }
    }

    /// Set the initialization box
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Reject configurations the hunt loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pack_size < 3 {
            return Err(ConfigError::PackSize(self.pack_size));
        }
        if self.vector_size < 1 {
            return Err(ConfigError::VectorSize(self.vector_size));
        }
        if self.iterations < 1 {
            return Err(ConfigError::Iterations(self.iterations));
        }
        // Fields are public, so the box is re-checked here even though
        // Bounds::new already validated constructed values.
        Bounds::new(self.bounds.min, self.bounds.max)?;
        Ok(())
    }
}

impl Default for GwoConfig {
    fn default() -> Self {
        Self {
            iterations: 20,
            pack_size: 10,
            vector_size: 3,
            bounds: Bounds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GwoConfig::default();
        assert_eq!(config.iterations, 20);
        assert_eq!(config.pack_size, 10);
        assert_eq!(config.vector_size, 3);
        assert_eq!(config.bounds, Bounds::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_small_pack() {
        let config = GwoConfig::new(10, 2, 3);
        assert_eq!(config.validate(), Err(ConfigError::PackSize(2)));
    }

    #[test]
    fn test_config_rejects_zero_vector_size() {
        let config = GwoConfig::new(10, 5, 0);
        assert_eq!(config.validate(), Err(ConfigError::VectorSize(0)));
    }

    #[test]
    fn test_config_rejects_zero_iterations() {
        let config = GwoConfig::new(0, 5, 3);
        assert_eq!(config.validate(), Err(ConfigError::Iterations(0)));
    }

    #[test]
    fn test_config_rejects_non_finite_bounds() {
        let mut config = GwoConfig::default();
        config.bounds.max = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Bounds { .. })
        ));
    }

    #[test]
    fn test_config_with_bounds() {
        let bounds = Bounds::new(-1.0, 1.0).unwrap();
        let config = GwoConfig::new(10, 5, 3).with_bounds(bounds);
        assert_eq!(config.bounds, bounds);
    }

    #[test]
    fn test_config_serialization() {
        let config = GwoConfig::default();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: GwoConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }
}
