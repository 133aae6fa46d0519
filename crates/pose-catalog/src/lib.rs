//! Reference Pose Catalog
//!
//! Immutable table of the yoga poses the engine knows about. Each entry
//! carries the target angle for the joints that matter to it, a single
//! tolerance, and the camera orientations in which it can be attempted.

mod pose;
mod reference;

pub use pose::PoseName;
pub use reference::{catalog, reference, ReferencePose};

use thiserror::Error;

/// Catalog lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown pose: {0}")]
    UnknownPose(String),
}
