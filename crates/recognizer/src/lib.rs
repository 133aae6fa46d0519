//! Pose Recognizer / Evaluator
//!
//! Scores a frame's joint angles against the reference catalog:
//! - Open-set recognition picks the best-matching pose
//! - Closed-set evaluation scores one target pose with a per-joint
//!   breakdown, gated by camera orientation
//!
//! The recognizer holds only its scoring configuration and is safe to
//! share across any number of concurrent frame streams.

pub mod config;
pub mod evaluation;

pub use config::{ScoringConfig, ScoringError};
pub use evaluation::{
    Breakdown, Confidence, Evaluation, JointComparison, JointStatus, Recognition, UNKNOWN_LABEL,
};

use landmarks::{classify_skeleton, JointAngles, Landmark, Skeleton};
use pose_catalog::{catalog, reference, PoseName, ReferencePose};
use tracing::{debug, trace};

use evaluation::round_tenth;

/// Graded credit for one joint: 1 on target, 0 at `falloff` away
pub fn joint_similarity(current: f64, target: f64, falloff: f64) -> f64 {
    (1.0 - (current - target).abs() / falloff).max(0.0)
}

/// Mean joint similarity over the joints both the pose and the frame have.
///
/// A pose with no comparable joints scores 0.
pub fn pose_similarity(angles: &JointAngles, pose: &ReferencePose, falloff_factor: f64) -> f64 {
    let falloff = pose.tolerance * falloff_factor;
    let (total, count) = pose
        .angles
        .iter()
        .filter_map(|&(joint, target)| angles.get(joint).map(|current| (current, target)))
        .fold((0.0, 0usize), |(total, count), (current, target)| {
            (total + joint_similarity(current, target, falloff), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Pose recognizer and evaluator
#[derive(Debug, Clone, Default)]
pub struct PoseRecognizer {
    config: ScoringConfig,
}

impl PoseRecognizer {
    /// Create a recognizer with the given scoring constants
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Best-matching catalog pose for a frame.
    ///
    /// Fewer than 33 landmarks yields `Unknown` with zero confidence.
    pub fn recognize(&self, landmarks: &[Landmark]) -> Recognition {
        let Ok(skeleton) = Skeleton::new(landmarks) else {
            return Recognition::unknown(0.0);
        };
        self.recognize_angles(&JointAngles::compute(&skeleton))
    }

    /// Best-matching catalog pose for precomputed joint angles
    pub fn recognize_angles(&self, angles: &JointAngles) -> Recognition {
        let mut best: Option<PoseName> = None;
        let mut best_score = 0.0;

        // Strict comparison: the earliest catalog entry wins ties
        for entry in catalog() {
            let score = pose_similarity(angles, entry, self.config.falloff_factor);
            trace!("{}: {:.3}", entry.name, score);
            if score > best_score {
                best_score = score;
                best = Some(entry.name);
            }
        }

        if best_score < self.config.acceptance_threshold {
            debug!(
                "No pose accepted (best {:?} at {:.3})",
                best.map(PoseName::as_str),
                best_score
            );
            return Recognition::unknown(best_score);
        }

        debug!("Recognized {:?} with confidence {:.3}", best, best_score);
        Recognition {
            pose: best,
            confidence: best_score,
        }
    }

    /// Evaluate a frame against a target pose given by its catalog name.
    ///
    /// Names that are not in the catalog score 0 with an empty breakdown.
    pub fn evaluate_against(&self, landmarks: &[Landmark], target_pose: &str) -> Evaluation {
        let Ok(skeleton) = Skeleton::new(landmarks) else {
            return Evaluation::no_body();
        };

        match target_pose.parse::<PoseName>() {
            Ok(pose) => self.evaluate_skeleton(&skeleton, pose),
            Err(e) => {
                debug!("{}", e);
                Evaluation {
                    orientation: classify_skeleton(&skeleton),
                    ..Evaluation::no_body()
                }
            }
        }
    }

    /// Evaluate a frame against a known target pose
    pub fn evaluate_pose(&self, landmarks: &[Landmark], pose: PoseName) -> Evaluation {
        match Skeleton::new(landmarks) {
            Ok(skeleton) => self.evaluate_skeleton(&skeleton, pose),
            Err(_) => Evaluation::no_body(),
        }
    }

    fn evaluate_skeleton(&self, skeleton: &Skeleton<'_>, pose: PoseName) -> Evaluation {
        let orientation = classify_skeleton(skeleton);
        let entry = reference(pose);

        if !entry.accepts(orientation) {
            debug!("{} cannot be scored from {} view", pose, orientation);
            return Evaluation {
                confidence: Confidence::NotApplicable,
                breakdown: Breakdown::new(),
                orientation,
                orientation_valid: false,
            };
        }

        let angles = JointAngles::compute(skeleton);
        let (score, breakdown) = self.score_against(&angles, entry);

        Evaluation {
            confidence: Confidence::Scored(score),
            breakdown,
            orientation,
            orientation_valid: true,
        }
    }

    /// Similarity and per-joint breakdown against one reference pose.
    ///
    /// The aggregate is graded while each joint is tiered, so a pose can
    /// clear the acceptance threshold with individual joints still `Poor`.
    pub fn score_against(&self, angles: &JointAngles, entry: &ReferencePose) -> (f64, Breakdown) {
        let score = pose_similarity(angles, entry, self.config.falloff_factor);

        let breakdown = entry
            .angles
            .iter()
            .filter_map(|&(joint, target)| {
                let current = angles.get(joint)?;
                let difference = (current - target).abs();
                let status = JointStatus::classify(
                    difference,
                    entry.tolerance,
                    self.config.needs_improvement_factor,
                );
                Some((
                    joint,
                    JointComparison {
                        current: round_tenth(current),
                        target,
                        difference: round_tenth(difference),
                        status,
                    },
                ))
            })
            .collect();

        (score, breakdown)
    }
}
