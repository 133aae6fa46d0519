//! Scoring configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable scoring constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Minimum best-match score for open-set recognition to report a pose
    pub acceptance_threshold: f64,

    /// Multiple of the tolerance up to which a joint still `needs_improvement`
    pub needs_improvement_factor: f64,

    /// Multiple of the tolerance at which a joint's similarity reaches zero
    pub falloff_factor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            acceptance_threshold: 0.6,
            needs_improvement_factor: 1.5,
            falloff_factor: 2.0,
        }
    }
}

/// Scoring constant outside its usable range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("acceptance_threshold {0} is outside [0, 1]")]
    AcceptanceThreshold(f64),

    #[error("needs_improvement_factor {0} must be at least 1")]
    NeedsImprovementFactor(f64),

    #[error("falloff_factor {0} must be positive")]
    FalloffFactor(f64),
}

impl ScoringConfig {
    /// Check that scores stay within [0, 1] and tiers stay ordered
    pub fn validate(&self) -> Result<(), ScoringError> {
        if !(0.0..=1.0).contains(&self.acceptance_threshold) {
            return Err(ScoringError::AcceptanceThreshold(self.acceptance_threshold));
        }
        if self.needs_improvement_factor.is_nan() || self.needs_improvement_factor < 1.0 {
            return Err(ScoringError::NeedsImprovementFactor(
                self.needs_improvement_factor,
            ));
        }
        if !self.falloff_factor.is_finite() || self.falloff_factor <= 0.0 {
            return Err(ScoringError::FalloffFactor(self.falloff_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"acceptance_threshold": 0.75}"#).unwrap();
        assert_eq!(config.acceptance_threshold, 0.75);
        assert_eq!(config.needs_improvement_factor, 1.5);
        assert_eq!(config.falloff_factor, 2.0);
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(ScoringConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let bad_threshold = ScoringConfig {
            acceptance_threshold: 1.2,
            ..Default::default()
        };
        assert_eq!(
            bad_threshold.validate(),
            Err(ScoringError::AcceptanceThreshold(1.2))
        );

        let bad_factor = ScoringConfig {
            needs_improvement_factor: 0.5,
            ..Default::default()
        };
        assert_eq!(
            bad_factor.validate(),
            Err(ScoringError::NeedsImprovementFactor(0.5))
        );

        for falloff in [0.0, -2.0, f64::NAN] {
            let bad_falloff = ScoringConfig {
                falloff_factor: falloff,
                ..Default::default()
            };
            assert!(matches!(
                bad_falloff.validate(),
                Err(ScoringError::FalloffFactor(_))
            ));
        }
    }

    #[test]
    fn test_boundary_values_are_valid() {
        let config = ScoringConfig {
            acceptance_threshold: 1.0,
            needs_improvement_factor: 1.0,
            falloff_factor: 0.5,
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
