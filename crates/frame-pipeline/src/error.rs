//! Pipeline error types

use thiserror::Error;

/// Errors at the pipeline's configuration and wiring boundaries
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration file or environment could not be read
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Scoring constants outside their usable range
    #[error("Invalid scoring configuration: {0}")]
    InvalidScoring(#[from] recognizer::ScoringError),

    /// Log level string not recognised
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// A global tracing subscriber was already installed
    #[error("Logging already initialized: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// Report could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
