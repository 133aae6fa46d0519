//! Per-pose rule functions

mod floor;
mod seated;
mod standing;
mod supine;

use landmarks::{Joint, LandmarkIndex, Skeleton};
use pose_catalog::PoseName;

/// A pose's rule function: corrections, or one affirmation
pub type RuleFn = fn(&Skeleton<'_>) -> Vec<String>;

/// Rule function for a pose
pub(crate) fn rule_for(pose: PoseName) -> RuleFn {
    match pose {
        PoseName::MountainPose => standing::mountain_pose,
        PoseName::WarriorTwoLeft => standing::warrior_two_left,
        PoseName::WarriorTwoRight => standing::warrior_two_right,
        PoseName::TreePoseLeft => standing::tree_pose_left,
        PoseName::TreePoseRight => standing::tree_pose_right,
        PoseName::DownwardDog => floor::downward_dog,
        PoseName::Plank => floor::plank,
        PoseName::SupineBoundAngle => supine::supine_bound_angle,
        PoseName::HugTheKnees => supine::hug_the_knees,
        PoseName::EasySeat => seated::easy_seat,
        PoseName::SeatedHandsBehindBackStretch => seated::hands_behind_back_stretch,
        PoseName::GomukasanaLegsFold => seated::gomukasana_legs_fold,
        PoseName::JanuSirsasanaTwistLeft => seated::janu_twist_left,
        PoseName::JanuSirsasanaTwistRight => seated::janu_twist_right,
        PoseName::JanuSirsasanaRevolvedLeft => seated::janu_revolved_left,
        PoseName::JanuSirsasanaRevolvedRight => seated::janu_revolved_right,
        PoseName::ReverseTableTop => floor::reverse_table_top,
        PoseName::SupineBentKnees => supine::supine_bent_knees,
    }
}

/// Corrections collected by a rule
struct Feedback(Vec<String>);

impl Feedback {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// Corrections, or the affirmation if there were none
    fn or_affirm(mut self, affirmation: impl Into<String>) -> Vec<String> {
        if self.0.is_empty() {
            self.0.push(affirmation.into());
        }
        self.0
    }
}

/// Body side for mirrored poses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// Capitalised, as used in pose names
    fn title(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }

    fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    fn hip(self) -> LandmarkIndex {
        match self {
            Side::Left => LandmarkIndex::LeftHip,
            Side::Right => LandmarkIndex::RightHip,
        }
    }

    fn knee(self) -> LandmarkIndex {
        match self {
            Side::Left => LandmarkIndex::LeftKnee,
            Side::Right => LandmarkIndex::RightKnee,
        }
    }

    fn ankle(self) -> LandmarkIndex {
        match self {
            Side::Left => LandmarkIndex::LeftAnkle,
            Side::Right => LandmarkIndex::RightAnkle,
        }
    }

    /// Hip-knee-ankle angle on this side
    fn knee_angle(self, skeleton: &Skeleton<'_>) -> f64 {
        match self {
            Side::Left => Joint::LeftKnee.angle(skeleton),
            Side::Right => Joint::RightKnee.angle(skeleton),
        }
    }
}

/// Vertical gap between two landmarks
fn y_gap(skeleton: &Skeleton<'_>, a: LandmarkIndex, b: LandmarkIndex) -> f64 {
    (skeleton[a].y - skeleton[b].y).abs()
}

/// Horizontal gap between two landmarks
fn x_gap(skeleton: &Skeleton<'_>, a: LandmarkIndex, b: LandmarkIndex) -> f64 {
    (skeleton[a].x - skeleton[b].x).abs()
}

/// Either knee bent tighter than `min` degrees
fn either_knee_below(skeleton: &Skeleton<'_>, min: f64) -> bool {
    Joint::LeftKnee.angle(skeleton) < min || Joint::RightKnee.angle(skeleton) < min
}

/// Either elbow bent tighter than `min` degrees
fn either_elbow_below(skeleton: &Skeleton<'_>, min: f64) -> bool {
    Joint::LeftElbow.angle(skeleton) < min || Joint::RightElbow.angle(skeleton) < min
}
