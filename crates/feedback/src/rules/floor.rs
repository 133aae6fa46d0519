//! Weight-bearing floor poses: Downward Dog, Plank, Reverse Table Top

use landmarks::{LandmarkIndex::*, Skeleton};

use super::{either_elbow_below, either_knee_below, x_gap, y_gap, Feedback};

pub(super) fn downward_dog(s: &Skeleton<'_>) -> Vec<String> {
    let mut feedback = Feedback::new();

    if either_knee_below(s, 160.0) {
        feedback.push("Straighten your legs more");
    }

    if either_elbow_below(s, 160.0) {
        feedback.push("Straighten your arms");
    }

    // Head below the hips
    if s[Nose].y > s.mid_hip_y() {
        feedback.push("Lift your hips higher");
    }

    feedback.or_affirm("Great Downward Dog!")
}

pub(super) fn plank(s: &Skeleton<'_>) -> Vec<String> {
    let mut feedback = Feedback::new();
    let shoulders_y = s.mid_shoulder_y();
    let hips_y = s.mid_hip_y();

    if hips_y > shoulders_y + 0.1 {
        feedback.push("Engage your core - don't let your hips sag");
    }

    if hips_y < shoulders_y - 0.05 {
        feedback.push("Lower your hips - keep your body in a straight line");
    }

    if either_elbow_below(s, 160.0) {
        feedback.push("Keep your arms straight");
    }

    if x_gap(s, LeftShoulder, LeftWrist) > 0.1 {
        feedback.push("Keep your shoulders over your wrists");
    }

    feedback.or_affirm("Perfect plank form!")
}

pub(super) fn reverse_table_top(s: &Skeleton<'_>) -> Vec<String> {
    let mut feedback = Feedback::new();

    if s.mid_hip_y() > s.mid_shoulder_y() {
        feedback.push("Lift your hips higher - press through your hands");
    }

    if either_elbow_below(s, 160.0) {
        feedback.push("Straighten your arms - press firmly into the ground");
    }

    if either_knee_below(s, 80.0) {
        feedback.push("Keep your knees at 90 degrees - shins vertical");
    }

    if y_gap(s, LeftHip, RightHip) > 0.08 {
        feedback.push("Keep your hips level");
    }

    feedback.or_affirm("Excellent form! Engage your core")
}
