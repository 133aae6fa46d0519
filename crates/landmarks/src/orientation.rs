//! Camera-relative body orientation

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Landmark, LandmarkIndex, Skeleton};

/// Hips must sit this far above the shoulders (image units) to count as lying down
pub const SUPINE_MARGIN: f64 = 0.15;

/// Shoulder spread below which the body is seen edge-on
pub const EDGE_ON_SHOULDER_WIDTH: f64 = 0.15;

/// Gross facing direction relative to the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Front,
    SideLeft,
    SideRight,
    Supine,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Front => "front",
            Orientation::SideLeft => "side_left",
            Orientation::SideRight => "side_right",
            Orientation::Supine => "supine",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify orientation from a raw landmark slice.
///
/// Anything short of a full skeleton reports `Front`.
pub fn classify(landmarks: &[Landmark]) -> Orientation {
    match Skeleton::new(landmarks) {
        Ok(skeleton) => classify_skeleton(&skeleton),
        Err(_) => Orientation::Front,
    }
}

/// Classify orientation of a complete skeleton
pub fn classify_skeleton(skeleton: &Skeleton<'_>) -> Orientation {
    let left_shoulder = &skeleton[LandmarkIndex::LeftShoulder];
    let right_shoulder = &skeleton[LandmarkIndex::RightShoulder];

    // y grows downward: hips above shoulders means a smaller y
    if skeleton.mid_hip_y() < skeleton.mid_shoulder_y() - SUPINE_MARGIN {
        trace!("Orientation: supine");
        return Orientation::Supine;
    }

    let shoulder_width = (left_shoulder.x - right_shoulder.x).abs();
    if shoulder_width < EDGE_ON_SHOULDER_WIDTH {
        let depth_diff = left_shoulder.z - right_shoulder.z;
        let side = if depth_diff > 0.0 {
            Orientation::SideLeft
        } else {
            Orientation::SideRight
        };
        trace!(shoulder_width, depth_diff, "Orientation: {}", side);
        return side;
    }

    Orientation::Front
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LANDMARK_COUNT;

    fn body(shoulder_y: f64, hip_y: f64, left_x: f64, right_x: f64) -> Vec<Landmark> {
        let mut points = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        points[11] = Landmark::new(left_x, shoulder_y, 0.0);
        points[12] = Landmark::new(right_x, shoulder_y, 0.0);
        points[23] = Landmark::new(left_x, hip_y, 0.0);
        points[24] = Landmark::new(right_x, hip_y, 0.0);
        points
    }

    #[test]
    fn test_short_input_defaults_to_front() {
        assert_eq!(classify(&[]), Orientation::Front);
        assert_eq!(classify(&vec![Landmark::default(); 12]), Orientation::Front);
    }

    #[test]
    fn test_standing_facing_camera() {
        assert_eq!(classify(&body(0.25, 0.5, 0.4, 0.6)), Orientation::Front);
    }

    #[test]
    fn test_hips_well_above_shoulders_is_supine() {
        // hip_y < shoulder_y - 0.2
        assert_eq!(classify(&body(0.7, 0.45, 0.4, 0.6)), Orientation::Supine);
    }

    #[test]
    fn test_supine_checked_before_edge_on() {
        assert_eq!(classify(&body(0.7, 0.45, 0.5, 0.52)), Orientation::Supine);
    }

    #[test]
    fn test_hips_slightly_above_is_not_supine() {
        assert_eq!(classify(&body(0.5, 0.4, 0.4, 0.6)), Orientation::Front);
    }

    #[test]
    fn test_edge_on_uses_shoulder_depth() {
        let mut points = body(0.25, 0.5, 0.5, 0.55);
        points[11].z = 0.2;
        points[12].z = -0.1;
        assert_eq!(classify(&points), Orientation::SideLeft);

        points[11].z = -0.2;
        assert_eq!(classify(&points), Orientation::SideRight);

        // Equal depth falls to the right-side label
        points[11].z = -0.1;
        assert_eq!(classify(&points), Orientation::SideRight);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Orientation::SideLeft).unwrap(), "\"side_left\"");
        assert_eq!(Orientation::Supine.to_string(), "supine");
    }
}
