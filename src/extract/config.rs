// src/extract/config.rs

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::extract::{
    MAX_DOOR_NEIGHBORS, MAX_SEARCH_RADIUS, SEED_SEARCH_RADIUS, SIMPLIFY_TOLERANCE,
};

/// Tunables for one extraction pass. Missing fields fall back to the
/// defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub search_radius: i32,
    pub simplify_tolerance: f64,
    pub max_door_neighbors: usize,
    /// Process rooms on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            search_radius: SEED_SEARCH_RADIUS,
            simplify_tolerance: SIMPLIFY_TOLERANCE,
            max_door_neighbors: MAX_DOOR_NEIGHBORS,
            parallel: true,
        }
    }
}

impl ExtractionConfig {
    /// Rejects a negative or oversized search radius and a tolerance that
    /// is negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=MAX_SEARCH_RADIUS).contains(&self.search_radius) {
            return Err(ConfigError::SearchRadius {
                radius: self.search_radius,
                max: MAX_SEARCH_RADIUS,
            });
        }
        if !self.simplify_tolerance.is_finite() || self.simplify_tolerance < 0.0 {
            return Err(ConfigError::Tolerance(self.simplify_tolerance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: ExtractionConfig = serde_json::from_str(r#"{"parallel": false}"#).unwrap();
        assert!(!cfg.parallel);
        assert_eq!(cfg.search_radius, 3);
        assert_eq!(cfg.max_door_neighbors, 2);
        assert_eq!(cfg.simplify_tolerance, 0.1);
    }

    #[test]
    fn test_empty_object_is_default() {
        let cfg: ExtractionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ExtractionConfig::default());
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_validate_ranges() {
        let zero = ExtractionConfig { search_radius: 0, simplify_tolerance: 0.0, ..Default::default() };
        assert_eq!(zero.validate(), Ok(()));

        let wide = ExtractionConfig { search_radius: MAX_SEARCH_RADIUS + 1, ..Default::default() };
        assert_eq!(
            wide.validate(),
            Err(ConfigError::SearchRadius { radius: MAX_SEARCH_RADIUS + 1, max: MAX_SEARCH_RADIUS })
        );

        let negative = ExtractionConfig { search_radius: -1, ..Default::default() };
        assert!(matches!(negative.validate(), Err(ConfigError::SearchRadius { radius: -1, .. })));

        for tolerance in [-1.0, f64::NAN, f64::INFINITY] {
            let cfg = ExtractionConfig { simplify_tolerance: tolerance, ..Default::default() };
            assert!(matches!(cfg.validate(), Err(ConfigError::Tolerance(_))));
        }
    }
}
