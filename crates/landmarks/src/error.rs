//! Landmark Error Types

use thiserror::Error;

/// Errors when building a skeleton view
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandmarkError {
    /// Fewer landmarks than a full skeleton
    #[error("Expected at least {expected} landmarks, got {found}")]
    Insufficient { expected: usize, found: usize },
}
