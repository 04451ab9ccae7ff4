//! Look-at camera.
//!
//! # Coordinate System
//!
//! Right-handed, as in the input models:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer
//!
//! The view matrix rotates world space into the camera basis and moves the
//! look-at target to the origin. The eye then sits on the positive Z axis at
//! [`Camera::eye_distance`], which is the distance the perspective
//! projection divides by.

use crate::error::{Error, Result};
use crate::math::{Matrix, Vec3};

/// Camera defined by an eye position, a target and an up direction.
///
/// The orthonormal basis is computed once on construction, so a `Camera`
/// always has a well-defined view matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Vec3,
    center: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
}

impl Camera {
    /// Creates a camera at `eye` looking at `center`.
    ///
    /// Fails if `eye` and `center` coincide or if `up` is parallel to the
    /// viewing direction, since no basis exists in either case.
    pub fn new(eye: Vec3, center: Vec3, up: Vec3) -> Result<Self> {
        let forward = (eye - center).try_normalize().ok_or_else(|| {
            Error::InvalidConfig(format!("eye {:?} coincides with center {:?}", eye, center))
        })?;
        let right = up.cross(forward).try_normalize().ok_or_else(|| {
            Error::InvalidConfig(format!("up {:?} is parallel to the view direction", up))
        })?;
        let up = forward.cross(right);
        Ok(Self {
            eye,
            center,
            right,
            up,
            forward,
        })
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Unit vector pointing from the target back toward the eye.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Orthogonalized up vector.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Distance between eye and target.
    pub fn eye_distance(&self) -> f32 {
        (self.eye - self.center).magnitude()
    }

    /// World-to-camera matrix: `basis * translate(-center)`.
    pub fn view_matrix(&self) -> Matrix {
        let mut basis = Matrix::identity(4);
        let mut translation = Matrix::identity(4);
        for i in 0..3 {
            basis[(0, i)] = self.right[i];
            basis[(1, i)] = self.up[i];
            basis[(2, i)] = self.forward[i];
            translation[(i, 3)] = -self.center[i];
        }
        basis * translation
    }
}
