//! Model-to-world transform.
//!
//! Provides a [`Transform`] struct with a fluent API for managing position,
//! rotation (Euler angles), and scale.

use serde::{Deserialize, Serialize};

use crate::math::{Matrix, Vec3};

/// A 3D transform with position, rotation (Euler angles), and scale.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position(Vec3::new(5.0, 2.0, 0.0))
///     .rotate_y(0.1)
///     .set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3, // Euler angles in radians: x=pitch, y=yaw, z=roll
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    /// Euler angles in radians.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self
    }

    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.rotation.x += angle;
        self
    }

    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.rotation.y += angle;
        self
    }

    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        self.rotation.z += angle;
        self
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::new(s, s, s);
        self
    }

    /// Generate the model matrix.
    ///
    /// Order: Translation * RotationX * RotationY * RotationZ * Scale
    /// (Scale applied first, then rotations, then translation)
    pub fn to_matrix(&self) -> Matrix {
        Matrix::translation(self.position.x, self.position.y, self.position.z)
            * Matrix::rotation_x(self.rotation.x)
            * Matrix::rotation_y(self.rotation.y)
            * Matrix::rotation_z(self.rotation.z)
            * Matrix::scaling(self.scale.x, self.scale.y, self.scale.z)
    }
}
