//! Frame request and report wire types

use landmarks::{Landmark, Orientation};
use recognizer::Breakdown;
use serde::{Deserialize, Serialize};

/// Pose name reported for a frame without a body in recognition mode
pub const NO_POSE_DETECTED: &str = "No Pose Detected";

/// One frame of detected landmarks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameRequest {
    /// Detected landmarks, empty when no body was found
    #[serde(default)]
    pub landmarks: Vec<Landmark>,

    /// Pose the user is practising; absent for open recognition
    #[serde(default)]
    pub target_pose: Option<String>,
}

impl FrameRequest {
    pub fn recognize(landmarks: Vec<Landmark>) -> Self {
        Self {
            landmarks,
            target_pose: None,
        }
    }

    pub fn evaluate(landmarks: Vec<Landmark>, target_pose: impl Into<String>) -> Self {
        Self {
            landmarks,
            target_pose: Some(target_pose.into()),
        }
    }

    /// Target pose, treating an empty name as none
    pub fn target(&self) -> Option<&str> {
        self.target_pose.as_deref().filter(|name| !name.is_empty())
    }
}

/// Result of processing one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub landmarks: Vec<Landmark>,
    pub pose_name: String,
    /// `None` when the target pose cannot be scored from this orientation
    pub confidence: Option<f64>,
    pub feedback: Vec<String>,
    #[serde(skip_serializing_if = "Breakdown::is_empty", default)]
    pub breakdown: Breakdown,
    pub orientation: Orientation,
    pub orientation_valid: bool,
    /// Milliseconds since the Unix epoch
    #[serde(rename = "timestamp")]
    pub timestamp_ms: u64,
}

impl FrameReport {
    /// Encode as a JSON event payload
    pub fn to_json(&self) -> Result<String, crate::PipelineError> {
        Ok(serde_json::to_string(self)?)
    }
}
