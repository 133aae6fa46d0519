//! Reference angles and orientation requirements

use landmarks::{Joint, Orientation};

use crate::PoseName;

use Joint::*;
use Orientation::{Front, SideLeft, SideRight, Supine};

/// Target geometry for one pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePose {
    pub name: PoseName,
    /// Ideal angle (degrees) for each joint the pose cares about
    pub angles: &'static [(Joint, f64)],
    /// Allowed deviation in degrees, shared by all joints
    pub tolerance: f64,
    /// Orientations in which the pose can be attempted
    pub orientations: &'static [Orientation],
}

impl ReferencePose {
    /// Target angle for a joint, if the pose specifies one
    #[cfg(test)]
    fn target(&self, joint: Joint) -> Option<f64> {
        self.angles
            .iter()
            .find(|(j, _)| *j == joint)
            .map(|&(_, angle)| angle)
    }

    /// Whether the pose can be scored from this orientation
    pub fn accepts(&self, orientation: Orientation) -> bool {
        self.orientations.contains(&orientation)
    }
}

const SIDE_VIEW: &[Orientation] = &[SideLeft, SideRight];
const FRONT_VIEW: &[Orientation] = &[Front];
const LYING_DOWN: &[Orientation] = &[Front, Supine];
const ANY_UPRIGHT: &[Orientation] = &[Front, SideLeft, SideRight];

static CATALOG: [ReferencePose; 18] = [
    ReferencePose {
        name: PoseName::MountainPose,
        angles: &[
            (LeftElbow, 180.0),
            (RightElbow, 180.0),
            (LeftKnee, 180.0),
            (RightKnee, 180.0),
            (LeftHip, 180.0),
            (RightHip, 180.0),
        ],
        tolerance: 20.0,
        orientations: FRONT_VIEW,
    },
    ReferencePose {
        name: PoseName::WarriorTwoLeft,
        angles: &[
            (LeftKnee, 90.0),
            (RightKnee, 180.0),
            (LeftShoulder, 90.0),
            (RightShoulder, 90.0),
        ],
        tolerance: 25.0,
        orientations: FRONT_VIEW,
    },
    ReferencePose {
        name: PoseName::WarriorTwoRight,
        angles: &[
            (LeftKnee, 180.0),
            (RightKnee, 90.0),
            (LeftShoulder, 90.0),
            (RightShoulder, 90.0),
        ],
        tolerance: 25.0,
        orientations: FRONT_VIEW,
    },
    ReferencePose {
        name: PoseName::TreePoseLeft,
        angles: &[
            (LeftKnee, 180.0),
            (RightKnee, 90.0),
            (LeftHip, 180.0),
            (RightHip, 45.0),
        ],
        tolerance: 25.0,
        orientations: FRONT_VIEW,
    },
    ReferencePose {
        name: PoseName::TreePoseRight,
        angles: &[
            (LeftKnee, 90.0),
            (RightKnee, 180.0),
            (LeftHip, 45.0),
            (RightHip, 180.0),
        ],
        tolerance: 25.0,
        orientations: FRONT_VIEW,
    },
    ReferencePose {
        name: PoseName::DownwardDog,
        angles: &[
            (LeftHip, 45.0),
            (RightHip, 45.0),
            (LeftKnee, 180.0),
            (RightKnee, 180.0),
            (LeftShoulder, 180.0),
            (RightShoulder, 180.0),
        ],
        tolerance: 25.0,
        orientations: SIDE_VIEW,
    },
    ReferencePose {
        name: PoseName::Plank,
        angles: &[
            (LeftElbow, 180.0),
            (RightElbow, 180.0),
            (LeftHip, 180.0),
            (RightHip, 180.0),
            (LeftKnee, 180.0),
            (RightKnee, 180.0),
        ],
        tolerance: 15.0,
        orientations: SIDE_VIEW,
    },
    ReferencePose {
        name: PoseName::SupineBoundAngle,
        angles: &[
            (LeftKnee, 55.0),
            (RightKnee, 55.0),
            (LeftHip, 55.0),
            (RightHip, 55.0),
        ],
        tolerance: 20.0,
        orientations: LYING_DOWN,
    },
    ReferencePose {
        name: PoseName::HugTheKnees,
        angles: &[
            (LeftKnee, 50.0),
            (RightKnee, 50.0),
            (LeftHip, 50.0),
            (RightHip, 50.0),
        ],
        tolerance: 20.0,
        orientations: LYING_DOWN,
    },
    ReferencePose {
        name: PoseName::EasySeat,
        angles: &[
            (LeftKnee, 55.0),
            (RightKnee, 55.0),
            (LeftHip, 85.0),
            (RightHip, 85.0),
        ],
        tolerance: 30.0,
        orientations: FRONT_VIEW,
    },
    ReferencePose {
        name: PoseName::SeatedHandsBehindBackStretch,
        angles: &[
            (LeftElbow, 165.0),
            (RightElbow, 165.0),
            (LeftShoulder, 35.0),
            (RightShoulder, 35.0),
        ],
        tolerance: 20.0,
        orientations: FRONT_VIEW,
    },
    ReferencePose {
        name: PoseName::GomukasanaLegsFold,
        angles: &[
            (LeftKnee, 90.0),
            (RightKnee, 90.0),
            (LeftHip, 85.0),
            (RightHip, 85.0),
        ],
        tolerance: 20.0,
        orientations: FRONT_VIEW,
    },
    ReferencePose {
        name: PoseName::JanuSirsasanaTwistLeft,
        angles: &[
            (LeftKnee, 180.0),
            (RightKnee, 90.0),
            (LeftHip, 90.0),
            (RightHip, 90.0),
        ],
        tolerance: 25.0,
        orientations: ANY_UPRIGHT,
    },
    ReferencePose {
        name: PoseName::JanuSirsasanaTwistRight,
        angles: &[
            (LeftKnee, 90.0),
            (RightKnee, 180.0),
            (LeftHip, 90.0),
            (RightHip, 90.0),
        ],
        tolerance: 25.0,
        orientations: ANY_UPRIGHT,
    },
    ReferencePose {
        name: PoseName::JanuSirsasanaRevolvedLeft,
        angles: &[
            (LeftKnee, 180.0),
            (RightKnee, 90.0),
            (LeftHip, 70.0),
            (RightHip, 90.0),
        ],
        tolerance: 25.0,
        orientations: ANY_UPRIGHT,
    },
    ReferencePose {
        name: PoseName::JanuSirsasanaRevolvedRight,
        angles: &[
            (LeftKnee, 90.0),
            (RightKnee, 180.0),
            (LeftHip, 90.0),
            (RightHip, 70.0),
        ],
        tolerance: 25.0,
        orientations: ANY_UPRIGHT,
    },
    ReferencePose {
        name: PoseName::ReverseTableTop,
        angles: &[
            (LeftElbow, 180.0),
            (RightElbow, 180.0),
            (LeftHip, 90.0),
            (RightHip, 90.0),
            (LeftShoulder, 90.0),
            (RightShoulder, 90.0),
        ],
        tolerance: 20.0,
        orientations: SIDE_VIEW,
    },
    ReferencePose {
        name: PoseName::SupineBentKnees,
        angles: &[
            (LeftKnee, 90.0),
            (RightKnee, 90.0),
            (LeftHip, 90.0),
            (RightHip, 90.0),
        ],
        tolerance: 20.0,
        orientations: LYING_DOWN,
    },
];

/// All reference poses in catalog order.
///
/// Recognition ties resolve to the earliest entry, so this order is stable.
pub fn catalog() -> &'static [ReferencePose] {
    &CATALOG
}

/// Reference entry for a pose
pub fn reference(pose: PoseName) -> &'static ReferencePose {
    &CATALOG[pose.index()]
}
