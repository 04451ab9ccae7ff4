//! Projection from camera space into the canonical cube.

use serde::{Deserialize, Serialize};

use crate::math::{Matrix, EPSILON};

/// Which projection the render pass applies after the view transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectionKind {
    /// No perspective divide; camera-space x/y map straight to the viewport.
    Orthographic,
    /// Central projection toward an eye on the positive Z axis.
    #[default]
    Perspective,
}

/// Projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Orthographic,
    /// `eye_distance` is the distance from the eye to the view-space origin.
    Perspective { eye_distance: f32 },
}

impl Projection {
    pub fn perspective(eye_distance: f32) -> Self {
        Projection::Perspective { eye_distance }
    }

    /// The projection matrix.
    ///
    /// For perspective this is the identity with `-1/eye_distance` in row 3,
    /// column 2, so that the homogeneous divide scales x, y and z by
    /// `1 / (1 - z/eye_distance)`. There are no near or far planes. An eye
    /// distance at or below [`EPSILON`] has no finite projection and falls
    /// back to orthographic.
    pub fn matrix(&self) -> Matrix {
        let mut m = Matrix::identity(4);
        match *self {
            Projection::Orthographic => {}
            Projection::Perspective { eye_distance } if eye_distance.abs() > EPSILON => {
                m[(3, 2)] = -1.0 / eye_distance;
            }
            Projection::Perspective { eye_distance } => {
                log::warn!(
                    "eye distance {} is too small for a perspective projection, using orthographic",
                    eye_distance
                );
            }
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_orthographic_is_identity() {
        assert_eq!(Projection::Orthographic.matrix(), Matrix::identity(4));
    }

    #[test]
    fn test_perspective_entry() {
        let m = Projection::perspective(4.0).matrix();
        assert_eq!(m.get(3, 2), -0.25);
        assert_eq!(m.get(3, 3), 1.0);
        assert_eq!(m.get(0, 0), 1.0);
    }

    #[test]
    fn test_perspective_divide() {
        let m = Projection::perspective(3.0).matrix();
        // z = 0 plane is unchanged
        assert_eq!(m.transform_point(Vec3::new(1.0, 2.0, 0.0)), Some(Vec3::new(1.0, 2.0, 0.0)));
        // Nearer points grow: w = 1 - 1/3
        let p = m.transform_point(Vec3::new(1.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(p.x, 1.5, epsilon = 1e-5);
        assert_relative_eq!(p.z, 1.5, epsilon = 1e-5);
        // Farther points shrink: w = 1 + 1/3
        let p = m.transform_point(Vec3::new(1.0, 0.0, -1.0)).unwrap();
        assert_relative_eq!(p.x, 0.75, epsilon = 1e-5);
    }

    #[test]
    fn test_point_at_eye_has_no_projection() {
        let m = Projection::perspective(2.0).matrix();
        assert_eq!(m.transform_point(Vec3::new(0.0, 0.0, 2.0)), None);
    }

    #[test]
    fn test_zero_eye_distance_falls_back_to_orthographic() {
        assert_eq!(Projection::perspective(0.0).matrix(), Matrix::identity(4));
    }
}
