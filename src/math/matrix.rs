//! Dynamically sized row-major matrix.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `M * v`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! Only 4x4 (transforms) and 4x1 (homogeneous points) shapes are used by
//! the renderer, but multiplication works for any compatible shapes.

use std::ops::{Index, IndexMut, Mul};

use super::vec3::Vec3;
use super::EPSILON;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Creates a `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Builds a 4x4 matrix from rows.
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self {
            rows: 4,
            cols: 4,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Embeds a point as a 4x1 homogeneous column (w = 1).
    pub fn from_point(v: Vec3) -> Self {
        Self {
            rows: 4,
            cols: 1,
            data: vec![v.x, v.y, v.z, 1.0],
        }
    }

    /// Converts a 4x1 homogeneous column back to a point by dividing the
    /// first three components by the fourth.
    ///
    /// Returns `None` when `|w|` is at or below [`EPSILON`] (point at
    /// infinity, e.g. a vertex on the camera plane).
    pub fn to_point(&self) -> Option<Vec3> {
        debug_assert_eq!((self.rows, self.cols), (4, 1), "Not a homogeneous column");
        let w = self.data[3];
        if w.abs() <= EPSILON {
            return None;
        }
        Some(Vec3::new(
            self.data[0] / w,
            self.data[1] / w,
            self.data[2] / w,
        ))
    }

    /// Transforms a point: `self * [v, 1]` followed by homogeneous division.
    pub fn transform_point(&self, v: Vec3) -> Option<Vec3> {
        (self * &Matrix::from_point(v)).to_point()
    }

    /// Creates a translation matrix.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Counter-clockwise rotation around the X axis (right-handed).
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Counter-clockwise rotation around the Y axis (right-handed).
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Counter-clockwise rotation around the Z axis (right-handed).
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Access element at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self[(row, col)]
    }

    /// Set element at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self[(row, col)] = value;
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(row < self.rows && col < self.cols, "Matrix index ({row}, {col}) out of range");
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(row < self.rows && col < self.cols, "Matrix index ({row}, {col}) out of range");
        &mut self.data[row * self.cols + col]
    }
}

/// Row-by-column matrix product.
///
/// # Panics
/// Panics if `self.cols() != rhs.rows()`.
impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        assert_eq!(
            self.cols, rhs.rows,
            "Cannot multiply {}x{} by {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols
        );
        let mut result = Matrix::zeros(self.rows, rhs.cols);
        for row in 0..self.rows {
            for col in 0..rhs.cols {
                result[(row, col)] = (0..self.cols)
                    .map(|k| self[(row, k)] * rhs[(k, col)])
                    .sum();
            }
        }
        result
    }
}

impl Mul<Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        &self * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_is_neutral() {
        let m = Matrix::translation(1.0, 2.0, 3.0) * Matrix::rotation_y(0.3);
        assert_eq!(&Matrix::identity(4) * &m, m);
        assert_eq!(&m * &Matrix::identity(4), m);
    }

    #[test]
    fn test_product_shape() {
        let m = Matrix::identity(4);
        let p = Matrix::from_point(Vec3::new(1.0, 2.0, 3.0));
        let r = &m * &p;
        assert_eq!((r.rows(), r.cols()), (4, 1));
    }

    #[test]
    #[should_panic]
    fn test_incompatible_shapes_panic() {
        let _ = &Matrix::zeros(4, 1) * &Matrix::zeros(4, 1);
    }

    #[test]
    fn test_row_by_column() {
        let a = Matrix::from_rows([
            [1.0, 2.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let b = Matrix::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [3.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let ab = &a * &b;
        assert_eq!(ab.get(0, 0), 7.0);
        assert_eq!(ab.get(0, 1), 2.0);
        assert_eq!(ab.get(1, 0), 3.0);
    }

    #[test]
    fn test_translation_moves_points() {
        let t = Matrix::translation(1.0, 2.0, 3.0);
        let p = t.transform_point(Vec3::ZERO).unwrap();
        assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));

        let column = &t * &Matrix::from_point(Vec3::UP);
        assert_eq!((column.rows(), column.cols()), (4, 1));
        assert_eq!(column.get(1, 0), 3.0);
        assert_eq!(column.get(3, 0), 1.0);
    }

    #[test]
    fn test_homogeneous_division() {
        let mut column = Matrix::from_point(Vec3::new(2.0, 4.0, 6.0));
        column.set(3, 0, 2.0);
        assert_eq!(column.to_point(), Some(Vec3::new(1.0, 2.0, 3.0)));

        column.set(3, 0, 0.0);
        assert_eq!(column.to_point(), None);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let p = Matrix::rotation_z(FRAC_PI_2)
            .transform_point(Vec3::RIGHT)
            .unwrap();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
    }
}
