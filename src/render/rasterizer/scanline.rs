//! Scanline triangle rasterization.
//!
//! Vertices are sorted by y. Every row between the top and bottom vertex is
//! intersected with the long edge (top to bottom) and with whichever short
//! edge spans that row (top to middle above the middle vertex, middle to
//! bottom below it):
//!
//! ```text
//!        top
//!        /\
//!       /  \
//!      /----\  <- rows above mid use top-mid
//!    mid     \
//!      \------\ <- rows below mid use mid-bottom
//!        \     \
//!          \    \
//!            bottom
//! ```
//!
//! The edges walked are those of the region the edge tolerance accepts (the
//! triangle scaled slightly about its centroid), not the exact triangle.
//! Only pixels between the two intersections (widened to whole pixels) are
//! tested. Coverage, depth and shading come from the same barycentric test as
//! [`super::EdgeFunctionRasterizer`], so both algorithms produce identical
//! images; the span only prunes candidates.
//!
//! # References
//!
//! - Foley, van Dam et al., "Computer Graphics: Principles and Practice"
//! - Abrash, Michael, "Graphics Programming Black Book"

use super::barycentric::{coverage_bounds, is_degenerate};
use super::{shade_pixel, PixelShader, Rasterizer, Triangle};
use crate::math::Vec3;
use crate::render::framebuffer::RenderTarget;

#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices by Y coordinate, ascending.
    fn sort_vertices(v0: &mut Vec3, v1: &mut Vec3, v2: &mut Vec3) {
        if v1.y < v0.y {
            std::mem::swap(v0, v1);
        }
        if v2.y < v1.y {
            std::mem::swap(v1, v2);
        }
        if v1.y < v0.y {
            std::mem::swap(v0, v1);
        }
    }

    /// X where edge `a -> b` crosses row `y`.
    ///
    /// Rows outside the edge clamp to its endpoints. A zero-height edge has
    /// no single crossing and yields `a.x`.
    #[inline]
    fn edge_x(a: Vec3, b: Vec3, y: f32) -> f32 {
        let height = b.y - a.y;
        if height.abs() <= f32::EPSILON {
            return a.x;
        }
        let t = ((y - a.y) / height).clamp(0.0, 1.0);
        a.x + (b.x - a.x) * t
    }
}

impl Rasterizer for ScanlineRasterizer {
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
        let width = target.width() as i32;
        let height = target.height() as i32;

        let [mut top, mut mid, mut bottom] = coverage_bounds(&points);
        Self::sort_vertices(&mut top, &mut mid, &mut bottom);

        let min_y = (top.y.floor() as i32).max(0);
        let max_y = (bottom.y.ceil() as i32).min(height - 1);

        let mut written = 0;
        for y in min_y..=max_y {
            let row = y as f32;
            let long = Self::edge_x(top, bottom, row);
            let short = if row < mid.y {
                Self::edge_x(top, mid, row)
            } else {
                Self::edge_x(mid, bottom, row)
            };
            let (left, right) = if long <= short {
                (long, short)
            } else {
                (short, long)
            };

            let x_start = (left.floor() as i32).max(0);
            let x_end = (right.ceil() as i32).min(width - 1);
            for x in x_start..=x_end {
                if shade_pixel(&points, x, y, target, shader) {
                    written += 1;
                }
            }
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, RED};
    use crate::render::rasterizer::test_support::{buffers, pixels_with};
    use crate::render::rasterizer::Shading;

    #[test]
    fn test_sort_vertices() {
        let mut a = Vec3::new(0.0, 5.0, 0.0);
        let mut b = Vec3::new(1.0, 1.0, 0.0);
        let mut c = Vec3::new(2.0, 3.0, 0.0);
        ScanlineRasterizer::sort_vertices(&mut a, &mut b, &mut c);
        assert_eq!([a.y, b.y, c.y], [1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_edge_x_guards_zero_height() {
        let a = Vec3::new(2.0, 3.0, 0.0);
        let b = Vec3::new(9.0, 3.0, 0.0);
        assert_eq!(ScanlineRasterizer::edge_x(a, b, 3.0), 2.0);
    }

    #[test]
    fn test_edge_x_clamps_outside_rows() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(4.0, 4.0, 0.0);
        assert_eq!(ScanlineRasterizer::edge_x(a, b, 2.0), 2.0);
        assert_eq!(ScanlineRasterizer::edge_x(a, b, -1.0), 0.0);
        assert_eq!(ScanlineRasterizer::edge_x(a, b, 9.0), 4.0);
    }

    #[test]
    fn test_flat_top_and_flat_bottom() {
        let flat_top = Triangle::new([
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(7.0, 1.0, 0.0),
            Vec3::new(4.0, 6.0, 0.0),
        ]);
        let flat_bottom = Triangle::new([
            Vec3::new(4.0, 1.0, 0.0),
            Vec3::new(1.0, 6.0, 0.0),
            Vec3::new(7.0, 6.0, 0.0),
        ]);
        for tri in [flat_top, flat_bottom] {
            let (mut fb, mut db) = buffers(8, 8);
            let mut target = RenderTarget::new(&mut fb, &mut db);
            let written = ScanlineRasterizer::new().fill_triangle(&tri, &mut target, &Shading::Flat(RED));
            assert!(written > 0);
            for v in tri.points() {
                assert!(pixels_with(&fb, RED).contains(&(v.x as i32, v.y as i32)));
            }
        }
    }

    #[test]
    fn test_right_triangle_and_depth_override() {
        let tri = |depth: f32| {
            Triangle::new([
                Vec3::new(0.0, 0.0, depth),
                Vec3::new(4.0, 0.0, depth),
                Vec3::new(0.0, 4.0, depth),
            ])
        };
        let (mut fb, mut db) = buffers(8, 8);
        let mut target = RenderTarget::new(&mut fb, &mut db);
        let rasterizer = ScanlineRasterizer::new();
        assert_eq!(rasterizer.fill_triangle(&tri(0.0), &mut target, &Shading::Flat(RED)), 15);
        assert_eq!(rasterizer.fill_triangle(&tri(1.0), &mut target, &Shading::Flat(BLUE)), 15);
        assert_eq!(pixels_with(&fb, BLUE).len(), 15);
        assert_eq!(db.get(0, 4), Some(1.0));
    }

    #[test]
    fn test_horizontal_degenerate_triangle_draws_nothing() {
        let (mut fb, mut db) = buffers(8, 8);
        let mut target = RenderTarget::new(&mut fb, &mut db);
        let tri = Triangle::new([
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(3.0, 2.0, 0.0),
            Vec3::new(7.0, 2.0, 0.0),
        ]);
        assert_eq!(ScanlineRasterizer::new().fill_triangle(&tri, &mut target, &Shading::Flat(RED)), 0);
    }
}
