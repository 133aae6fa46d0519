//! Pose Quality Analyzer
//!
//! Rule-based alignment corrections for a pose that has already been
//! identified. Each catalog pose has one rule function; a rule returns
//! its corrections in check order, or a single pose-specific affirmation
//! when nothing needs fixing.

mod rules;

pub use rules::RuleFn;

use landmarks::{Landmark, Skeleton};
use pose_catalog::PoseName;
use tracing::debug;

/// Message returned when the frame has no complete skeleton
pub const INSUFFICIENT_LANDMARKS: &str = "Unable to analyze pose - not enough landmarks detected";

/// Dispatches a pose to its rule function
#[derive(Clone)]
pub struct PoseQualityAnalyzer {
    rules: [RuleFn; 18],
}

impl PoseQualityAnalyzer {
    pub fn new() -> Self {
        Self {
            rules: PoseName::ALL.map(rules::rule_for),
        }
    }

    /// Feedback for a pose given by its catalog name.
    ///
    /// Short landmark sets produce one insufficiency message; names
    /// outside the catalog produce no feedback at all.
    pub fn analyze(&self, pose_name: &str, landmarks: &[Landmark]) -> Vec<String> {
        let Ok(skeleton) = Skeleton::new(landmarks) else {
            return vec![INSUFFICIENT_LANDMARKS.to_string()];
        };

        match pose_name.parse::<PoseName>() {
            Ok(pose) => self.analyze_pose(pose, &skeleton),
            Err(e) => {
                debug!("No feedback rules: {}", e);
                Vec::new()
            }
        }
    }

    /// Feedback for a known pose. Never empty.
    pub fn analyze_pose(&self, pose: PoseName, skeleton: &Skeleton<'_>) -> Vec<String> {
        let feedback = (self.rules[pose.index()])(skeleton);
        debug!("{}: {} feedback item(s)", pose, feedback.len());
        feedback
    }
}

impl Default for PoseQualityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
