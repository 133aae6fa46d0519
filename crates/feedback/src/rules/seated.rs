//! Seated poses: Easy Seat, hands-behind-back stretch, Gomukasana legs,
//! and the Janu Sirsasana twist and revolved variants

use landmarks::{LandmarkIndex::*, Skeleton};

use super::{x_gap, y_gap, Feedback, Side};

/// Shoulders sagging below the hips
fn slouched(s: &Skeleton<'_>) -> bool {
    s.mid_shoulder_y() > s.mid_hip_y() + 0.05
}

/// Sukhasana
pub(super) fn easy_seat(s: &Skeleton<'_>) -> Vec<String> {
    let mut feedback = Feedback::new();

    if slouched(s) {
        feedback.push("Sit up taller - lengthen your spine");
    }

    if y_gap(s, LeftShoulder, RightShoulder) > 0.08 {
        feedback.push("Level your shoulders");
    }

    if y_gap(s, LeftHip, RightHip) > 0.08 {
        feedback.push("Balance your weight evenly on both hips");
    }

    feedback.or_affirm("Perfect seated posture! Stay grounded and tall")
}

pub(super) fn hands_behind_back_stretch(s: &Skeleton<'_>) -> Vec<String> {
    let mut feedback = Feedback::new();

    // Elbow drawn back past the shoulder opens the chest
    if s[LeftElbow].x < s[LeftShoulder].x + 0.05 {
        feedback.push("Move your hands further behind your back");
    }

    if y_gap(s, LeftShoulder, RightShoulder) > 0.08 {
        feedback.push("Keep your shoulders level");
    }

    if slouched(s) {
        feedback.push("Sit up taller and lengthen your spine");
    }

    feedback.or_affirm("Excellent chest opening! Feel the stretch")
}

/// Cow face legs, knees stacked
pub(super) fn gomukasana_legs_fold(s: &Skeleton<'_>) -> Vec<String> {
    let mut feedback = Feedback::new();

    if x_gap(s, LeftKnee, RightKnee) > 0.15 {
        feedback.push("Bring your knees closer together - stack them");
    }

    if slouched(s) {
        feedback.push("Sit up tall - keep your spine straight");
    }

    if y_gap(s, LeftHip, RightHip) > 0.1 {
        feedback.push("Keep your hips square and balanced");
    }

    feedback.or_affirm("Great leg position! Hold and breathe")
}

pub(super) fn janu_twist_left(s: &Skeleton<'_>) -> Vec<String> {
    janu_twist(s, Side::Left)
}

pub(super) fn janu_twist_right(s: &Skeleton<'_>) -> Vec<String> {
    janu_twist(s, Side::Right)
}

/// Head-to-knee twist over the `extended` leg
fn janu_twist(s: &Skeleton<'_>, extended: Side) -> Vec<String> {
    let mut feedback = Feedback::new();
    let bent = extended.other();
    let side = extended.name();

    if extended.knee_angle(s) < 160.0 {
        feedback.push(format!("Extend your {side} leg straight out in front"));
    }
    if bent.knee_angle(s) > 100.0 {
        feedback.push(format!(
            "Bend your {} knee more and bring foot to inner thigh",
            bent.name()
        ));
    }

    // A rotated torso shows as uneven shoulder heights
    if y_gap(s, LeftShoulder, RightShoulder) < 0.05 {
        feedback.push(format!("Twist deeper - rotate your torso toward the {side}"));
    }

    if s[Nose].y > s[extended.ankle()].y - 0.2 {
        feedback.push(format!("Fold forward over your {side} leg"));
    }

    feedback.or_affirm(format!(
        "Beautiful twist to the {side}! Breathe into the stretch"
    ))
}

pub(super) fn janu_revolved_left(s: &Skeleton<'_>) -> Vec<String> {
    janu_revolved(s, Side::Left)
}

pub(super) fn janu_revolved_right(s: &Skeleton<'_>) -> Vec<String> {
    janu_revolved(s, Side::Right)
}

/// Revolved head-to-knee fold over the `extended` leg
fn janu_revolved(s: &Skeleton<'_>, extended: Side) -> Vec<String> {
    let mut feedback = Feedback::new();
    let bent = extended.other();
    let side = extended.name();

    if extended.knee_angle(s) < 160.0 {
        feedback.push(format!("Straighten your {side} leg fully"));
    }
    if bent.knee_angle(s) > 100.0 {
        feedback.push(format!("Bend your {} knee to the side", bent.name()));
    }

    if s[Nose].y > s.mid_hip_y() {
        feedback.push(format!(
            "Fold deeper from your hips - hinge forward over {side} leg"
        ));
    }

    if slouched(s) {
        feedback.push("Keep lengthening your spine as you fold");
    }

    feedback.or_affirm(format!(
        "Perfect forward fold over {side} leg! Hold and breathe"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{mirrored, place, run, standing};
    use landmarks::Landmark;

    /// Left leg long, right knee bent out to the side, shoulders tilted
    fn janu_left_body() -> Vec<Landmark> {
        let mut points = standing();
        place(&mut points, RightKnee, 0.55, 0.7);
        place(&mut points, RightAnkle, 0.75, 0.7);
        place(&mut points, RightShoulder, 0.6, 0.32);
        points
    }

    #[test]
    fn test_easy_seat_upright_body_affirmed() {
        assert_eq!(
            run(easy_seat, &standing()),
            vec!["Perfect seated posture! Stay grounded and tall"]
        );
    }

    #[test]
    fn test_easy_seat_slumped_and_tilted() {
        let mut points = standing();
        place(&mut points, LeftShoulder, 0.4, 0.6);
        place(&mut points, RightShoulder, 0.6, 0.7);
        place(&mut points, RightHip, 0.55, 0.6);
        assert_eq!(
            run(easy_seat, &points),
            vec![
                "Sit up taller - lengthen your spine",
                "Level your shoulders",
                "Balance your weight evenly on both hips",
            ]
        );
    }

    #[test]
    fn test_back_stretch_needs_elbows_behind() {
        assert_eq!(
            run(hands_behind_back_stretch, &standing()),
            vec!["Move your hands further behind your back"]
        );

        let mut points = standing();
        place(&mut points, LeftElbow, 0.5, 0.4);
        assert_eq!(
            run(hands_behind_back_stretch, &points),
            vec!["Excellent chest opening! Feel the stretch"]
        );
    }

    #[test]
    fn test_back_stretch_uneven_and_slouched() {
        let mut points = standing();
        place(&mut points, LeftElbow, 0.5, 0.4);
        place(&mut points, LeftShoulder, 0.4, 0.6);
        place(&mut points, RightShoulder, 0.6, 0.7);
        assert_eq!(
            run(hands_behind_back_stretch, &points),
            vec![
                "Keep your shoulders level",
                "Sit up taller and lengthen your spine",
            ]
        );
    }

    #[test]
    fn test_gomukasana_good_form() {
        assert_eq!(
            run(gomukasana_legs_fold, &standing()),
            vec!["Great leg position! Hold and breathe"]
        );
    }

    #[test]
    fn test_gomukasana_all_corrections_in_order() {
        let mut points = standing();
        place(&mut points, RightKnee, 0.75, 0.7);
        place(&mut points, RightHip, 0.55, 0.62);
        place(&mut points, LeftShoulder, 0.4, 0.7);
        place(&mut points, RightShoulder, 0.6, 0.7);
        assert_eq!(
            run(gomukasana_legs_fold, &points),
            vec![
                "Bring your knees closer together - stack them",
                "Sit up tall - keep your spine straight",
                "Keep your hips square and balanced",
            ]
        );
    }

    #[test]
    fn test_janu_twist_left_good_form() {
        assert_eq!(
            run(janu_twist_left, &janu_left_body()),
            vec!["Beautiful twist to the left! Breathe into the stretch"]
        );
    }

    #[test]
    fn test_janu_twist_left_from_standing() {
        assert_eq!(
            run(janu_twist_left, &standing()),
            vec![
                "Bend your right knee more and bring foot to inner thigh",
                "Twist deeper - rotate your torso toward the left",
            ]
        );
    }

    #[test]
    fn test_janu_twist_left_not_folded() {
        let mut points = janu_left_body();
        place(&mut points, Nose, 0.5, 0.75);
        assert_eq!(
            run(janu_twist_left, &points),
            vec!["Fold forward over your left leg"]
        );
    }

    #[test]
    fn test_janu_twist_right_mirrors_left() {
        assert_eq!(
            run(janu_twist_right, &mirrored(&janu_left_body())),
            vec!["Beautiful twist to the right! Breathe into the stretch"]
        );
        assert_eq!(
            run(janu_twist_right, &standing()),
            vec![
                "Bend your left knee more and bring foot to inner thigh",
                "Twist deeper - rotate your torso toward the right",
            ]
        );
    }

    #[test]
    fn test_janu_revolved_left_good_form() {
        assert_eq!(
            run(janu_revolved_left, &janu_left_body()),
            vec!["Perfect forward fold over left leg! Hold and breathe"]
        );
        assert_eq!(
            run(janu_revolved_left, &standing()),
            vec!["Bend your right knee to the side"]
        );
    }

    #[test]
    fn test_janu_revolved_left_corrections_in_order() {
        let mut points = janu_left_body();
        place(&mut points, LeftKnee, 0.6, 0.7);
        place(&mut points, Nose, 0.5, 0.6);
        place(&mut points, LeftShoulder, 0.4, 0.6);
        place(&mut points, RightShoulder, 0.6, 0.6);
        assert_eq!(
            run(janu_revolved_left, &points),
            vec![
                "Straighten your left leg fully",
                "Fold deeper from your hips - hinge forward over left leg",
                "Keep lengthening your spine as you fold",
            ]
        );
    }

    #[test]
    fn test_janu_revolved_right_mirrors_left() {
        assert_eq!(
            run(janu_revolved_right, &mirrored(&janu_left_body())),
            vec!["Perfect forward fold over right leg! Hold and breathe"]
        );
    }
}
