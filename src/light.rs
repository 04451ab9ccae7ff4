//! Lighting types for the renderer.

use crate::math::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directional lights are ideal for simulating distant light sources like the sun,
/// where all rays are effectively parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light is pointing (not where it comes from).
    direction: Vec3,
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    ///
    /// Returns `None` for a zero-length direction.
    pub fn new(direction: Vec3) -> Option<Self> {
        direction.try_normalize().map(|direction| Self { direction })
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Diffuse intensity of a surface with the given normal, in [0.0, 1.0].
    ///
    /// The normal need not be unit length. Zero-length normals (from
    /// degenerate faces) receive no light.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        match normal.try_normalize() {
            // Negate direction: light pointing at surface = positive dot product
            Some(n) => (-self.direction).dot(n).max(0.0),
            None => 0.0,
        }
    }

    /// Intensity of the triangle `(a, b, c)`, using the counter-clockwise
    /// face normal `(b - a) x (c - a)`.
    pub fn face_intensity(&self, [a, b, c]: [Vec3; 3]) -> f32 {
        self.intensity((b - a).cross(c - a))
    }
}
