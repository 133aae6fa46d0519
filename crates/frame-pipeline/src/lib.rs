//! Frame Pipeline
//!
//! Transport-independent handling of one landmark frame: open-set
//! recognition when no target pose is given, otherwise orientation-gated
//! evaluation of the target, followed by rule-based coaching feedback.
//!
//! Counters emitted through `metrics`:
//! - `pose_frames_processed_total`
//! - `pose_frames_without_body_total`
//! - `pose_orientation_rejections_total`

pub mod config;
mod error;
pub mod pipeline;
pub mod report;

pub use config::EngineConfig;
pub use error::PipelineError;
pub use pipeline::{FramePipeline, NO_PERSON, POSE_NOT_DETECTED};
pub use report::{FrameReport, FrameRequest, NO_POSE_DETECTED};

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize logging at the given level
pub fn init_logging(level: Level) -> Result<(), PipelineError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Initialize logging from the configured level and build a pipeline
pub fn start(config: &EngineConfig) -> Result<FramePipeline, PipelineError> {
    init_logging(config.level()?)?;
    info!("Pose engine v{} starting", env!("CARGO_PKG_VERSION"));
    Ok(FramePipeline::new(config))
}
