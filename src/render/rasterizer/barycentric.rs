//! Barycentric coordinates via the cross-product method.
//!
//! For a triangle ABC and a point P, the vector `(u, v, 1)` satisfying
//! `P = A + u*(C - A) + v*(B - A)` is orthogonal to both
//!
//! ```text
//! (C.x - A.x, B.x - A.x, A.x - P.x)
//! (C.y - A.y, B.y - A.y, A.y - P.y)
//! ```
//!
//! so their cross product `(u', v', d)` is proportional to it. `d` is the
//! doubled signed area of the triangle and does not depend on P; when it is
//! near zero the triangle is degenerate and no weights exist.

use crate::math::{Vec2, Vec3};

/// Doubled-area threshold below which a triangle is treated as degenerate,
/// in pixel units.
pub const DEGENERATE_EPSILON: f32 = 1e-2;

/// Weights below this reject the point. Slightly negative so that pixels
/// exactly on an edge survive floating-point rounding and neighbouring
/// triangles leave no seams.
pub const EDGE_TOLERANCE: f32 = -1e-3;

/// Doubled signed area of the triangle (the barycentric denominator).
#[inline]
pub fn signed_area2(points: &[Vec3; 3]) -> f32 {
    let [a, b, c] = points;
    (c.x - a.x) * (b.y - a.y) - (b.x - a.x) * (c.y - a.y)
}

#[inline]
pub fn is_degenerate(points: &[Vec3; 3]) -> bool {
    signed_area2(points).abs() <= DEGENERATE_EPSILON
}

/// Weights `(w0, w1, w2)` of `p` with respect to the x/y of `points`.
///
/// Returns `None` for degenerate triangles.
#[inline]
pub fn barycentric(points: &[Vec3; 3], p: Vec2) -> Option<Vec3> {
    let [a, b, c] = points;
    let s = Vec3::new(c.x - a.x, b.x - a.x, a.x - p.x).cross(Vec3::new(
        c.y - a.y,
        b.y - a.y,
        a.y - p.y,
    ));
    if s.z.abs() <= DEGENERATE_EPSILON {
        return None;
    }
    // 1 - (u' + v') / d is steadier at edges than 1 - u'/d - v'/d
    Some(Vec3::new(1.0 - (s.x + s.y) / s.z, s.y / s.z, s.x / s.z))
}

/// Whether the weights place the point inside the triangle, edges included.
#[inline]
pub fn covers(weights: Vec3) -> bool {
    weights.x >= EDGE_TOLERANCE && weights.y >= EDGE_TOLERANCE && weights.z >= EDGE_TOLERANCE
}

/// The region [`covers`] accepts: the triangle scaled about its centroid.
///
/// All three weights are `>= t` exactly when the point lies in the triangle
/// scaled by `1 - 3t` about its centroid. Rasterizers take their candidate
/// pixels from these bounds rather than the exact triangle, so the tolerance
/// band along long edges (about a pixel wide per thousand pixels of size) is
/// tested the same way by every traversal.
pub fn coverage_bounds(points: &[Vec3; 3]) -> [Vec3; 3] {
    let [a, b, c] = *points;
    let centroid = (a + b + c) / 3.0;
    let scale = 1.0 - 3.0 * EDGE_TOLERANCE;
    points.map(|p| centroid + (p - centroid) * scale)
}

/// Weighted sum of a per-vertex scalar.
#[inline]
pub fn interpolate(weights: Vec3, values: [f32; 3]) -> f32 {
    weights.x * values[0] + weights.y * values[1] + weights.z * values[2]
}

/// Weighted sum of a per-vertex 2D attribute.
#[inline]
pub fn interpolate_vec2(weights: Vec3, values: [Vec2; 3]) -> Vec2 {
    values[0] * weights.x + values[1] * weights.y + values[2] * weights.z
}
