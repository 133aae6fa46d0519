//! Body Landmarks
//!
//! Data model for the 33-point body skeleton produced by an external pose
//! estimator, plus the geometry built on top of it:
//! - Joint angle computation
//! - Joint angle maps for the 8 tracked joints
//! - Camera-relative orientation classification

mod error;
pub mod geometry;
pub mod joints;
pub mod orientation;
mod skeleton;

pub use error::LandmarkError;
pub use geometry::angle_at;
pub use joints::{Joint, JointAngles};
pub use orientation::{classify, classify_skeleton, Orientation};
pub use skeleton::Skeleton;

use serde::{Deserialize, Serialize};

/// Number of landmarks in a complete skeleton
pub const LANDMARK_COUNT: usize = 33;

/// Single tracked body point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized horizontal position (0-1, image relative)
    pub x: f64,
    /// Normalized vertical position (0-1, grows downward)
    pub y: f64,
    /// Camera-relative depth (unitless, smaller is nearer)
    pub z: f64,
    /// Detection confidence (0-1)
    pub visibility: f64,
}

impl Landmark {
    /// Create a fully visible landmark
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            visibility: 1.0,
        }
    }

    /// Set the visibility score
    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = visibility;
        self
    }
}

/// MediaPipe pose landmark indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(usize)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkIndex {
    #[cfg(test)]
    const ALL: [LandmarkIndex; LANDMARK_COUNT] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    /// Position in the skeleton
    pub fn index(self) -> usize {
        self as usize
    }
}
