use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// 3D vector with `f32` components.
///
/// Used for object/world positions, directions, screen positions with depth
/// in `z`, and barycentric weight triples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// # Precondition
    /// The vector must have a nonzero magnitude. Callers that cannot
    /// guarantee this use [`Vec3::try_normalize`].
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Normalizes the vector, or returns `None` if its magnitude is at or
    /// below [`super::EPSILON`].
    pub fn try_normalize(&self) -> Option<Self> {
        let magnitude = self.magnitude();
        (magnitude > super::EPSILON).then(|| *self / magnitude)
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    ///
    /// The result is perpendicular to both inputs and its magnitude is the
    /// area of the parallelogram they span (twice the triangle area).
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Drops `z`.
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Scalar division of a vector.
impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

/// 3D vector with integer components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3i {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn to_f32(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<Vec3i> for Vec3 {
    fn from(v: Vec3i) -> Self {
        v.to_f32()
    }
}

impl Add for Vec3i {
    type Output = Vec3i;

    fn add(self, rhs: Vec3i) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3i {
    type Output = Vec3i;

    fn sub(self, rhs: Vec3i) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i32> for Vec3i {
    type Output = Vec3i;

    fn mul(self, rhs: i32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Index<usize> for Vec3i {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3i index out of range: {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross_is_orthogonal() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);
        let c = a.cross(b);
        assert_relative_eq!(c.dot(a), 0.0, epsilon = 1e-5);
        assert_relative_eq!(c.dot(b), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_cross_magnitude_is_twice_triangle_area() {
        // Right triangle with legs 4 and 3: area 6
        let ab = Vec3::new(4.0, 0.0, 0.0);
        let ac = Vec3::new(0.0, 3.0, 0.0);
        assert_relative_eq!(ab.cross(ac).magnitude(), 12.0);
    }

    #[test]
    fn test_cross_axes() {
        assert_eq!(Vec3::RIGHT.cross(Vec3::UP), Vec3::FORWARD);
    }

    #[test]
    fn test_normalize() {
        let n = Vec3::new(0.0, 3.0, 4.0).normalize();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n.z, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_try_normalize_rejects_zero_length() {
        assert_eq!(Vec3::ZERO.try_normalize(), None);
        assert!(Vec3::UP.try_normalize().is_some());
    }

    #[test]
    fn test_indexing() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v[2] = 7.0;
        assert_eq!([v[0], v[1], v[2]], [1.0, 2.0, 7.0]);
    }

    #[test]
    fn test_integer_cross() {
        let a = Vec3i::new(1, 0, 0);
        let b = Vec3i::new(0, 1, 0);
        assert_eq!(a.cross(b), Vec3i::new(0, 0, 1));
        assert_eq!((a + b).dot(a - b), 0);
        assert_eq!(Vec3::from(a * 2), Vec3::new(2.0, 0.0, 0.0));
    }
}
