//! Object space to screen space.
//!
//! The full chain for one vertex is
//!
//! ```text
//! screen = Viewport * Projection * View * Model * [v, 1]
//! ```
//!
//! followed by the homogeneous divide. The product is computed once per
//! render so each vertex costs a single 4x4 by 4x1 multiply.

use crate::camera::Camera;
use crate::math::{Matrix, Vec3};
use crate::projection::Projection;
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    matrix: Matrix,
}

impl Pipeline {
    /// Composes `viewport * projection * view * model`.
    pub fn new(model: &Matrix, view: &Matrix, projection: &Projection, viewport: &Viewport) -> Self {
        let matrix = viewport.matrix() * projection.matrix() * view * model;
        Self { matrix }
    }

    /// Full perspective pipeline looking through `camera`.
    pub fn perspective(model: &Matrix, camera: &Camera, viewport: &Viewport) -> Self {
        Self::new(
            model,
            &camera.view_matrix(),
            &Projection::perspective(camera.eye_distance()),
            viewport,
        )
    }

    /// The simplest mapping: no camera and no projection, world-space
    /// `[-1, 1]` straight onto the viewport.
    pub fn orthographic(model: &Matrix, viewport: &Viewport) -> Self {
        Self::new(model, &Matrix::identity(4), &Projection::Orthographic, viewport)
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Screen position of an object-space point: pixel x/y and depth in z.
    ///
    /// Returns `None` when the homogeneous `w` is (near) zero, i.e. the point
    /// lies on the eye plane and has no projection.
    #[inline]
    pub fn to_screen(&self, v: Vec3) -> Option<Vec3> {
        self.matrix.transform_point(v)
    }
}
