//! Vector and matrix math.
//!
//! All types are plain `Copy` values except [`Matrix`], which owns its
//! storage and is cloned explicitly when needed.

pub mod matrix;
pub mod vec2;
pub mod vec3;

pub use matrix::Matrix;
pub use vec2::{Vec2, Vec2i};
pub use vec3::{Vec3, Vec3i};

/// Magnitudes at or below this are treated as zero when normalizing or
/// dividing by a homogeneous `w`.
pub const EPSILON: f32 = 1e-6;
