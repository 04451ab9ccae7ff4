//! Bounding-box triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Compute the bounding box of the region the edge tolerance accepts and
//!    clamp it to the render target
//! 2. For each pixel in the box, compute barycentric weights
//! 3. Keep pixels whose weights are all above the edge tolerance, interpolate
//!    depth, and write them if they pass the depth test
//!
//! Every pixel is tested independently, which makes the algorithm trivially
//! correct for any winding and any triangle shape. Thin diagonal triangles
//! waste most of their box; [`super::ScanlineRasterizer`] avoids that.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)
//! - Scratchapixel: <https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation>

use super::barycentric::{coverage_bounds, is_degenerate};
use super::{shade_pixel, PixelShader, Rasterizer, Triangle};
use crate::math::Vec3;
use crate::render::framebuffer::RenderTarget;

/// Triangle rasterizer that tests every pixel of the clamped bounding box.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeFunctionRasterizer;

/// Inclusive pixel bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// Bounds of `points`, clamped to `[0, width-1] x [0, height-1]`.
    ///
    /// Returns `None` when the clamped box is empty (triangle entirely off
    /// screen or zero-sized target).
    pub fn clamped(points: &[Vec3; 3], width: u32, height: u32) -> Option<Self> {
        let [v0, v1, v2] = points;
        let bbox = Self {
            min_x: (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0),
            min_y: (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0),
            max_x: (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(width as i32 - 1),
            max_y: (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(height as i32 - 1),
        };
        (bbox.min_x <= bbox.max_x && bbox.min_y <= bbox.max_y).then_some(bbox)
    }
}

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for EdgeFunctionRasterizer {
    fn rasterize<S: PixelShader>(
        &self,
        triangle: &Triangle,
        target: &mut RenderTarget,
        shader: &S,
    ) -> usize {
        let points = triangle.points();
        if is_degenerate(&points) {
            log::trace!("skipping degenerate triangle {:?}", points);
            return 0;
        }
        let bounds = coverage_bounds(&points);
        let Some(bbox) = BoundingBox::clamped(&bounds, target.width(), target.height()) else {
            return 0;
        };

        let mut written = 0;
        for y in bbox.min_y..=bbox.max_y {
            for x in bbox.min_x..=bbox.max_x {
                if shade_pixel(&points, x, y, target, shader) {
                    written += 1;
                }
            }
        }
        written
    }
}
