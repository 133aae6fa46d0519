//! Lying poses: Supine Bound Angle, Hug the Knees, Supine Bent Knees

use landmarks::{Joint, LandmarkIndex::*, Skeleton};

use super::{either_knee_below, x_gap, y_gap, Feedback};

/// Either knee opened wider than `max` degrees
fn either_knee_above(s: &Skeleton<'_>, max: f64) -> bool {
    Joint::LeftKnee.angle(s) > max || Joint::RightKnee.angle(s) > max
}

/// Supta Baddha Konasana
pub(super) fn supine_bound_angle(s: &Skeleton<'_>) -> Vec<String> {
    let mut feedback = Feedback::new();

    if either_knee_below(s, 40.0) {
        feedback.push("Let your knees fall outward naturally");
    } else if either_knee_above(s, 70.0) {
        feedback.push("Bring the soles of your feet closer together");
    }

    if y_gap(s, LeftHip, RightHip) > 0.08 {
        feedback.push("Keep your hips level and relaxed");
    }

    feedback.or_affirm("Excellent! Breathe deeply and relax into the pose")
}

pub(super) fn hug_the_knees(s: &Skeleton<'_>) -> Vec<String> {
    let mut feedback = Feedback::new();
    let reach = s[Nose].y + 0.2;

    if s[LeftKnee].y > reach || s[RightKnee].y > reach {
        feedback.push("Draw your knees closer to your chest");
    }

    if y_gap(s, LeftKnee, RightKnee) > 0.1 {
        feedback.push("Keep both knees at the same height");
    }

    if y_gap(s, LeftShoulder, RightShoulder) > 0.08 {
        feedback.push("Relax your shoulders and keep them level");
    }

    feedback.or_affirm("Great! Keep breathing and gently hug your knees")
}

pub(super) fn supine_bent_knees(s: &Skeleton<'_>) -> Vec<String> {
    let mut feedback = Feedback::new();

    if either_knee_below(s, 70.0) {
        feedback.push("Let your knees bend more comfortably");
    } else if either_knee_above(s, 110.0) {
        feedback.push("Bring your feet closer to your hips");
    }

    // Knees roughly hip-width apart
    let knee_spread = x_gap(s, LeftKnee, RightKnee);
    if knee_spread < 0.1 {
        feedback.push("Widen your knees to hip-width apart");
    } else if knee_spread > 0.3 {
        feedback.push("Bring your knees closer together");
    }

    if y_gap(s, LeftShoulder, RightShoulder) > 0.08 {
        feedback.push("Relax your shoulders flat on the ground");
    }

    feedback.or_affirm("Perfect! Relax and breathe deeply")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{place, run, standing};
    use landmarks::Landmark;

    /// Knees folded to about 55 degrees with the soles together
    fn bound_angle_body() -> Vec<Landmark> {
        let (sin, cos) = 55f64.to_radians().sin_cos();
        let mut points = standing();
        place(&mut points, LeftKnee, 0.45, 0.7);
        place(&mut points, RightKnee, 0.55, 0.7);
        place(&mut points, LeftAnkle, 0.45 + 0.2 * sin, 0.7 - 0.2 * cos);
        place(&mut points, RightAnkle, 0.55 - 0.2 * sin, 0.7 - 0.2 * cos);
        points
    }

    fn bent_knees_body() -> Vec<Landmark> {
        let mut points = standing();
        place(&mut points, RightHip, 0.65, 0.5);
        place(&mut points, LeftKnee, 0.45, 0.7);
        place(&mut points, RightKnee, 0.65, 0.7);
        place(&mut points, LeftAnkle, 0.25, 0.7);
        place(&mut points, RightAnkle, 0.85, 0.7);
        points
    }

    #[test]
    fn test_bound_angle_good_form() {
        assert_eq!(
            run(supine_bound_angle, &bound_angle_body()),
            vec!["Excellent! Breathe deeply and relax into the pose"]
        );
    }

    #[test]
    fn test_bound_angle_straight_legs() {
        assert_eq!(
            run(supine_bound_angle, &standing()),
            vec!["Bring the soles of your feet closer together"]
        );
    }

    #[test]
    fn test_bound_angle_knees_too_closed_and_uneven_hips() {
        let mut points = bound_angle_body();
        place(&mut points, LeftAnkle, 0.47, 0.52);
        place(&mut points, RightHip, 0.55, 0.6);
        assert_eq!(
            run(supine_bound_angle, &points),
            vec![
                "Let your knees fall outward naturally",
                "Keep your hips level and relaxed",
            ]
        );
    }

    #[test]
    fn test_hug_knees_good_form() {
        let mut points = standing();
        place(&mut points, LeftKnee, 0.45, 0.25);
        place(&mut points, RightKnee, 0.55, 0.28);
        assert_eq!(
            run(hug_the_knees, &points),
            vec!["Great! Keep breathing and gently hug your knees"]
        );
    }

    #[test]
    fn test_hug_knees_from_standing() {
        let mut points = standing();
        place(&mut points, RightKnee, 0.55, 0.9);
        place(&mut points, RightShoulder, 0.6, 0.35);
        assert_eq!(
            run(hug_the_knees, &points),
            vec![
                "Draw your knees closer to your chest",
                "Keep both knees at the same height",
                "Relax your shoulders and keep them level",
            ]
        );
    }

    #[test]
    fn test_bent_knees_good_form() {
        assert_eq!(
            run(supine_bent_knees, &bent_knees_body()),
            vec!["Perfect! Relax and breathe deeply"]
        );
    }

    #[test]
    fn test_bent_knees_straight_legs() {
        let feedback = run(supine_bent_knees, &standing());
        assert_eq!(feedback[0], "Bring your feet closer to your hips");
    }

    #[test]
    fn test_bent_knees_spread_checks() {
        let mut points = bent_knees_body();
        place(&mut points, RightKnee, 0.5, 0.7);
        place(&mut points, RightAnkle, 0.7, 0.7);
        place(&mut points, RightHip, 0.5, 0.5);
        assert_eq!(
            run(supine_bent_knees, &points),
            vec!["Widen your knees to hip-width apart"]
        );

        let mut points = bent_knees_body();
        place(&mut points, RightHip, 0.85, 0.5);
        place(&mut points, RightKnee, 0.85, 0.7);
        place(&mut points, RightAnkle, 1.05, 0.7);
        assert_eq!(
            run(supine_bent_knees, &points),
            vec!["Bring your knees closer together"]
        );
    }

    #[test]
    fn test_bent_knees_over_folded() {
        let mut points = bent_knees_body();
        place(&mut points, LeftAnkle, 0.5, 0.55);
        let feedback = run(supine_bent_knees, &points);
        assert_eq!(feedback, vec!["Let your knees bend more comfortably"]);
    }
}
