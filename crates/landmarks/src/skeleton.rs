//! Validated skeleton view

use std::ops::Index;

use crate::geometry::angle_at;
use crate::{Landmark, LandmarkError, LandmarkIndex, LANDMARK_COUNT};

/// Borrowed view over a landmark slice holding a complete skeleton.
///
/// Construction is the only place the length is checked; every
/// `LandmarkIndex` is in bounds afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Skeleton<'a> {
    points: &'a [Landmark],
}

impl<'a> Skeleton<'a> {
    /// Wrap a landmark slice, rejecting anything shorter than 33 points
    pub fn new(points: &'a [Landmark]) -> Result<Self, LandmarkError> {
        if points.len() < LANDMARK_COUNT {
            return Err(LandmarkError::Insufficient {
                expected: LANDMARK_COUNT,
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Angle in degrees at `vertex` formed with `first` and `third`
    pub fn angle(&self, first: LandmarkIndex, vertex: LandmarkIndex, third: LandmarkIndex) -> f64 {
        angle_at(&self[first], &self[vertex], &self[third])
    }

    /// Mean vertical position of both shoulders
    pub fn mid_shoulder_y(&self) -> f64 {
        (self[LandmarkIndex::LeftShoulder].y + self[LandmarkIndex::RightShoulder].y) / 2.0
    }

    /// Mean vertical position of both hips
    pub fn mid_hip_y(&self) -> f64 {
        (self[LandmarkIndex::LeftHip].y + self[LandmarkIndex::RightHip].y) / 2.0
    }

    /// Mean horizontal position of both hips
    pub fn mid_hip_x(&self) -> f64 {
        (self[LandmarkIndex::LeftHip].x + self[LandmarkIndex::RightHip].x) / 2.0
    }
}

impl Index<LandmarkIndex> for Skeleton<'_> {
    type Output = Landmark;

    fn index(&self, index: LandmarkIndex) -> &Landmark {
        &self.points[index.index()]
    }
}

impl<'a> TryFrom<&'a [Landmark]> for Skeleton<'a> {
    type Error = LandmarkError;

    fn try_from(points: &'a [Landmark]) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_partial_skeleton() {
        let points = vec![Landmark::new(0.5, 0.5, 0.0); 20];
        let err = Skeleton::new(&points).unwrap_err();
        assert_eq!(
            err,
            LandmarkError::Insufficient {
                expected: 33,
                found: 20
            }
        );
        assert!(Skeleton::new(&[]).is_err());
    }

    #[test]
    fn test_midpoints() {
        let mut points = vec![Landmark::default(); LANDMARK_COUNT];
        points[11].y = 0.2;
        points[12].y = 0.4;
        points[23] = Landmark::new(0.4, 0.6, 0.0);
        points[24] = Landmark::new(0.6, 0.8, 0.0);

        let skeleton = Skeleton::new(&points).unwrap();
        assert!((skeleton.mid_shoulder_y() - 0.3).abs() < 1e-12);
        assert!((skeleton.mid_hip_y() - 0.7).abs() < 1e-12);
        assert!((skeleton.mid_hip_x() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_accepts_longer_slices() {
        let points = vec![Landmark::default(); 40];
        assert!(Skeleton::try_from(points.as_slice()).is_ok());
    }
}
