//! Standing poses: Mountain, Warrior II, Tree

use landmarks::{LandmarkIndex::*, Skeleton};

use super::{x_gap, y_gap, Feedback, Side};

/// Tadasana
pub(super) fn mountain_pose(s: &Skeleton<'_>) -> Vec<String> {
    let mut feedback = Feedback::new();

    if y_gap(s, LeftShoulder, RightShoulder) > 0.05 {
        if s[LeftShoulder].y < s[RightShoulder].y {
            feedback.push("Level your shoulders - right shoulder is lower");
        } else {
            feedback.push("Level your shoulders - left shoulder is lower");
        }
    }

    if y_gap(s, LeftHip, RightHip) > 0.05 {
        feedback.push("Keep your hips level");
    }

    if x_gap(s, LeftKnee, LeftAnkle) > 0.1 {
        feedback.push("Keep your legs straight and aligned");
    }

    feedback.or_affirm("Great form! Maintain this position")
}

pub(super) fn warrior_two_left(s: &Skeleton<'_>) -> Vec<String> {
    warrior_two(s, Side::Left)
}

pub(super) fn warrior_two_right(s: &Skeleton<'_>) -> Vec<String> {
    warrior_two(s, Side::Right)
}

/// Warrior II with `front` as the bent leg
fn warrior_two(s: &Skeleton<'_>, front: Side) -> Vec<String> {
    let mut feedback = Feedback::new();
    let side = front.name();

    let knee_angle = front.knee_angle(s);
    if knee_angle < 80.0 {
        feedback.push(format!("Bend your {side} knee more - aim for 90 degrees"));
    } else if knee_angle > 100.0 {
        feedback.push(format!("Don't bend your {side} knee too much"));
    }

    if x_gap(s, front.knee(), front.ankle()) > 0.05 {
        feedback.push(format!("Keep your {side} knee over your ankle"));
    }

    // Arms level with shoulders
    if y_gap(s, LeftWrist, LeftShoulder) > 0.1 {
        feedback.push("Extend your left arm at shoulder height");
    }
    if y_gap(s, RightWrist, RightShoulder) > 0.1 {
        feedback.push("Extend your right arm at shoulder height");
    }

    feedback.or_affirm(format!("Excellent Warrior II {} form!", front.title()))
}

pub(super) fn tree_pose_left(s: &Skeleton<'_>) -> Vec<String> {
    tree_pose(s, Side::Left)
}

pub(super) fn tree_pose_right(s: &Skeleton<'_>) -> Vec<String> {
    tree_pose(s, Side::Right)
}

/// Tree pose balancing on `standing`
fn tree_pose(s: &Skeleton<'_>, standing: Side) -> Vec<String> {
    let mut feedback = Feedback::new();
    let raised = standing.other();

    if standing.knee_angle(s) < 170.0 {
        feedback.push(format!("Keep your {} standing leg straight", standing.name()));
    }

    // Raised foot should sit above the standing knee
    if s[raised.ankle()].y > s[standing.knee()].y {
        feedback.push(format!(
            "Try to raise your {} foot higher on the inner thigh",
            raised.name()
        ));
    }

    if y_gap(s, standing.hip(), raised.hip()) > 0.08 {
        feedback.push("Keep your hips level");
    }

    if (s[Nose].x - s.mid_hip_x()).abs() > 0.1 {
        feedback.push(format!("Center your body over your {} leg", standing.name()));
    }

    feedback.or_affirm(format!(
        "Perfect balance on your {} leg! Keep it up",
        standing.name()
    ))
}
