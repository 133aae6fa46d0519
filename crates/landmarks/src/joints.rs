//! Joint vocabulary and per-frame joint angle maps

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{LandmarkIndex, Skeleton};

/// Tracked joints, each measured at a vertex landmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    LeftElbow,
    RightElbow,
    LeftKnee,
    RightKnee,
    LeftHip,
    RightHip,
    LeftShoulder,
    RightShoulder,
}

impl Joint {
    /// All joints in map order
    pub const ALL: [Joint; 8] = [
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftShoulder,
        Joint::RightShoulder,
    ];

    /// Snake-case joint name
    pub fn as_str(self) -> &'static str {
        match self {
            Joint::LeftElbow => "left_elbow",
            Joint::RightElbow => "right_elbow",
            Joint::LeftKnee => "left_knee",
            Joint::RightKnee => "right_knee",
            Joint::LeftHip => "left_hip",
            Joint::RightHip => "right_hip",
            Joint::LeftShoulder => "left_shoulder",
            Joint::RightShoulder => "right_shoulder",
        }
    }

    /// Landmarks forming the joint as `(first, vertex, third)`
    pub fn landmarks(self) -> (LandmarkIndex, LandmarkIndex, LandmarkIndex) {
        use LandmarkIndex::*;
        match self {
            Joint::LeftElbow => (LeftShoulder, LeftElbow, LeftWrist),
            Joint::RightElbow => (RightShoulder, RightElbow, RightWrist),
            Joint::LeftKnee => (LeftHip, LeftKnee, LeftAnkle),
            Joint::RightKnee => (RightHip, RightKnee, RightAnkle),
            Joint::LeftHip => (LeftShoulder, LeftHip, LeftKnee),
            Joint::RightHip => (RightShoulder, RightHip, RightKnee),
            Joint::LeftShoulder => (LeftElbow, LeftShoulder, LeftHip),
            Joint::RightShoulder => (RightElbow, RightShoulder, RightHip),
        }
    }

    /// Same joint on the other side of the body
    pub fn mirror(self) -> Joint {
        match self {
            Joint::LeftElbow => Joint::RightElbow,
            Joint::RightElbow => Joint::LeftElbow,
            Joint::LeftKnee => Joint::RightKnee,
            Joint::RightKnee => Joint::LeftKnee,
            Joint::LeftHip => Joint::RightHip,
            Joint::RightHip => Joint::LeftHip,
            Joint::LeftShoulder => Joint::RightShoulder,
            Joint::RightShoulder => Joint::LeftShoulder,
        }
    }

    /// Current angle of this joint in degrees
    pub fn angle(self, skeleton: &Skeleton<'_>) -> f64 {
        let (first, vertex, third) = self.landmarks();
        skeleton.angle(first, vertex, third)
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joint angle map for a single frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JointAngles {
    angles: BTreeMap<Joint, f64>,
}

impl JointAngles {
    /// Compute all 8 joint angles from a skeleton
    pub fn compute(skeleton: &Skeleton<'_>) -> Self {
        let angles: BTreeMap<Joint, f64> = Joint::ALL
            .iter()
            .map(|&joint| (joint, joint.angle(skeleton)))
            .collect();
        trace!("Joint angles: {:?}", angles);
        Self { angles }
    }

    /// Angle for a joint, if measured
    pub fn get(&self, joint: Joint) -> Option<f64> {
        self.angles.get(&joint).copied()
    }

    /// Iterate measured joints in joint order
    pub fn iter(&self) -> impl Iterator<Item = (Joint, f64)> + '_ {
        self.angles.iter().map(|(&j, &a)| (j, a))
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}

impl FromIterator<(Joint, f64)> for JointAngles {
    fn from_iter<I: IntoIterator<Item = (Joint, f64)>>(iter: I) -> Self {
        Self {
            angles: iter.into_iter().collect(),
        }
    }
}
