//! Pose identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Known poses, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PoseName {
    #[serde(rename = "Mountain Pose")]
    MountainPose,
    #[serde(rename = "Warrior II Left")]
    WarriorTwoLeft,
    #[serde(rename = "Warrior II Right")]
    WarriorTwoRight,
    #[serde(rename = "Tree Pose Left")]
    TreePoseLeft,
    #[serde(rename = "Tree Pose Right")]
    TreePoseRight,
    #[serde(rename = "Downward Dog")]
    DownwardDog,
    #[serde(rename = "Plank")]
    Plank,
    #[serde(rename = "Supine Bound Angle")]
    SupineBoundAngle,
    #[serde(rename = "Hug the Knees")]
    HugTheKnees,
    #[serde(rename = "Easy Seat")]
    EasySeat,
    #[serde(rename = "Seated Hands Behind Back Stretch")]
    SeatedHandsBehindBackStretch,
    #[serde(rename = "Gomukasana Legs Fold")]
    GomukasanaLegsFold,
    #[serde(rename = "Janu Sirsasana Twist Left")]
    JanuSirsasanaTwistLeft,
    #[serde(rename = "Janu Sirsasana Twist Right")]
    JanuSirsasanaTwistRight,
    #[serde(rename = "Janu Sirsasana Revolved Left")]
    JanuSirsasanaRevolvedLeft,
    #[serde(rename = "Janu Sirsasana Revolved Right")]
    JanuSirsasanaRevolvedRight,
    #[serde(rename = "Reverse Table Top")]
    ReverseTableTop,
    #[serde(rename = "Supine Bent Knees")]
    SupineBentKnees,
}

/// Poses practiced once per side
const ASYMMETRIC_PAIRS: [(PoseName, PoseName); 4] = [
    (PoseName::WarriorTwoLeft, PoseName::WarriorTwoRight),
    (PoseName::TreePoseLeft, PoseName::TreePoseRight),
    (PoseName::JanuSirsasanaTwistLeft, PoseName::JanuSirsasanaTwistRight),
    (PoseName::JanuSirsasanaRevolvedLeft, PoseName::JanuSirsasanaRevolvedRight),
];

impl PoseName {
    /// Every pose, in catalog order
    pub const ALL: [PoseName; 18] = [
        PoseName::MountainPose,
        PoseName::WarriorTwoLeft,
        PoseName::WarriorTwoRight,
        PoseName::TreePoseLeft,
        PoseName::TreePoseRight,
        PoseName::DownwardDog,
        PoseName::Plank,
        PoseName::SupineBoundAngle,
        PoseName::HugTheKnees,
        PoseName::EasySeat,
        PoseName::SeatedHandsBehindBackStretch,
        PoseName::GomukasanaLegsFold,
        PoseName::JanuSirsasanaTwistLeft,
        PoseName::JanuSirsasanaTwistRight,
        PoseName::JanuSirsasanaRevolvedLeft,
        PoseName::JanuSirsasanaRevolvedRight,
        PoseName::ReverseTableTop,
        PoseName::SupineBentKnees,
    ];

    /// Display name used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            PoseName::MountainPose => "Mountain Pose",
            PoseName::WarriorTwoLeft => "Warrior II Left",
            PoseName::WarriorTwoRight => "Warrior II Right",
            PoseName::TreePoseLeft => "Tree Pose Left",
            PoseName::TreePoseRight => "Tree Pose Right",
            PoseName::DownwardDog => "Downward Dog",
            PoseName::Plank => "Plank",
            PoseName::SupineBoundAngle => "Supine Bound Angle",
            PoseName::HugTheKnees => "Hug the Knees",
            PoseName::EasySeat => "Easy Seat",
            PoseName::SeatedHandsBehindBackStretch => "Seated Hands Behind Back Stretch",
            PoseName::GomukasanaLegsFold => "Gomukasana Legs Fold",
            PoseName::JanuSirsasanaTwistLeft => "Janu Sirsasana Twist Left",
            PoseName::JanuSirsasanaTwistRight => "Janu Sirsasana Twist Right",
            PoseName::JanuSirsasanaRevolvedLeft => "Janu Sirsasana Revolved Left",
            PoseName::JanuSirsasanaRevolvedRight => "Janu Sirsasana Revolved Right",
            PoseName::ReverseTableTop => "Reverse Table Top",
            PoseName::SupineBentKnees => "Supine Bent Knees",
        }
    }

    /// Position in the catalog
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the pose has a mirrored counterpart
    pub fn is_asymmetric(self) -> bool {
        self.mirror().is_some()
    }

    /// The same pose performed on the other side of the body
    pub fn mirror(self) -> Option<PoseName> {
        ASYMMETRIC_PAIRS.iter().find_map(|&(left, right)| {
            if self == left {
                Some(right)
            } else if self == right {
                Some(left)
            } else {
                None
            }
        })
    }
}

impl fmt::Display for PoseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PoseName {
    type Err = CatalogError;

    /// Exact, case-sensitive match against catalog names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PoseName::ALL
            .iter()
            .copied()
            .find(|pose| pose.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownPose(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("Plank".parse::<PoseName>(), Ok(PoseName::Plank));
        assert_eq!(
            "Hug the Knees".parse::<PoseName>(),
            Ok(PoseName::HugTheKnees)
        );
        assert!("plank".parse::<PoseName>().is_err());
        assert!(" Plank".parse::<PoseName>().is_err());
        assert_eq!(
            "Unknown Pose Name".parse::<PoseName>(),
            Err(CatalogError::UnknownPose("Unknown Pose Name".into()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for pose in PoseName::ALL {
            assert_eq!(pose.to_string().parse::<PoseName>(), Ok(pose));
        }
    }

    #[test]
    fn test_serde_uses_display_name() {
        for pose in PoseName::ALL {
            let json = serde_json::to_string(&pose).unwrap();
            assert_eq!(json, format!("\"{}\"", pose.as_str()));
        }
    }

    #[test]
    fn test_index_matches_catalog_order() {
        for (i, pose) in PoseName::ALL.iter().enumerate() {
            assert_eq!(pose.index(), i);
        }
    }

    #[test]
    fn test_mirror_pairs() {
        assert_eq!(PoseName::TreePoseLeft.mirror(), Some(PoseName::TreePoseRight));
        assert_eq!(
            PoseName::JanuSirsasanaRevolvedRight.mirror(),
            Some(PoseName::JanuSirsasanaRevolvedLeft)
        );
        assert_eq!(PoseName::MountainPose.mirror(), None);
        assert!(!PoseName::Plank.is_asymmetric());

        for pose in PoseName::ALL {
            if let Some(other) = pose.mirror() {
                assert_eq!(other.mirror(), Some(pose));
            }
        }
    }
}
