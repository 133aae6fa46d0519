//! Planar joint-angle geometry

use crate::Landmark;

/// Offset added to the magnitude product so coincident points stay finite
pub const ANGLE_EPSILON: f64 = 1e-6;

/// Angle in degrees at `vertex` between the rays to `p1` and `p3`.
///
/// Only the image-plane `x`/`y` components are used; depth is ignored.
/// The result is always in `[0, 180]`. Coincident points do not fail but
/// the returned angle carries no physical meaning.
pub fn angle_at(p1: &Landmark, vertex: &Landmark, p3: &Landmark) -> f64 {
    let (ax, ay) = (p1.x - vertex.x, p1.y - vertex.y);
    let (bx, by) = (p3.x - vertex.x, p3.y - vertex.y);

    let dot = ax * bx + ay * by;
    let norms = ax.hypot(ay) * bx.hypot(by);

    let cos = (dot / (norms + ANGLE_EPSILON)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
