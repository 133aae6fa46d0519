//! Engine configuration

use std::str::FromStr;

use recognizer::ScoringConfig;
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::PipelineError;

/// Prefix for environment overrides, e.g. `POSE_SCORING__ACCEPTANCE_THRESHOLD`
pub const ENV_PREFIX: &str = "POSE";

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Recognition and evaluation thresholds
    pub scoring: ScoringConfig,

    /// Maximum tracing level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load from an optional config file, then `POSE_`-prefixed environment
    /// variables. Anything unset keeps its default; scoring values are
    /// validated before the config is returned.
    pub fn load(path: &str) -> Result<Self, PipelineError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.scoring.validate()?;
        Ok(config)
    }

    /// Parsed tracing level
    pub fn level(&self) -> Result<Level, PipelineError> {
        Level::from_str(&self.log_level)
            .map_err(|_| PipelineError::InvalidLogLevel(self.log_level.clone()))
    }
}
