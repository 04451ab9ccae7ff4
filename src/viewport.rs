//! Mapping from the canonical cube to pixels.

use serde::{Deserialize, Serialize};

use crate::math::Matrix;

/// Target rectangle in pixels plus the depth range `[0, depth]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Depth resolution: `z = 1` maps to `depth`, `z = -1` to 0.
    pub depth: f32,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: u32, height: u32, depth: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            depth,
        }
    }

    /// Viewport covering a whole `width x height` image.
    pub fn full(width: u32, height: u32, depth: f32) -> Self {
        Self::new(0, 0, width, height, depth)
    }

    /// Scale and translate per axis: `[-1,1]` to `[x, x+w]`, `[y, y+h]`
    /// and `[0, depth]`.
    pub fn matrix(&self) -> Matrix {
        let half_w = self.width as f32 / 2.0;
        let half_h = self.height as f32 / 2.0;
        let half_d = self.depth / 2.0;
        Matrix::from_rows([
            [half_w, 0.0, 0.0, self.x as f32 + half_w],
            [0.0, half_h, 0.0, self.y as f32 + half_h],
            [0.0, 0.0, half_d, half_d],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn test_corners_map_to_rectangle() {
        let m = Viewport::new(100, 50, 600, 400, 255.0).matrix();
        assert_eq!(
            m.transform_point(Vec3::new(-1.0, -1.0, -1.0)),
            Some(Vec3::new(100.0, 50.0, 0.0))
        );
        assert_eq!(
            m.transform_point(Vec3::new(1.0, 1.0, 1.0)),
            Some(Vec3::new(700.0, 450.0, 255.0))
        );
        assert_eq!(
            m.transform_point(Vec3::ZERO),
            Some(Vec3::new(400.0, 250.0, 127.5))
        );
    }
}
