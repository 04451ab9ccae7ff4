//! Line drawing.
//!
//! Lines are written straight into the color buffer. They ignore the depth
//! buffer entirely and rely on [`FrameBuffer::set`] to drop pixels that fall
//! outside the image.

use super::framebuffer::FrameBuffer;
use crate::math::Vec2i;

/// Draws a line between two points using Bresenham's line algorithm.
///
/// Steep lines (|dy| > |dx|) are transposed so the loop always steps along
/// the longer axis, and the endpoints are ordered so the stepped coordinate
/// increases. Both choices depend only on the endpoint set, so drawing
/// `a -> b` and `b -> a` produces the same pixels.
///
/// The error term is kept in integers scaled by `2 * dx`: it grows by
/// `2 * |dy|` per step, and crossing `dx` (half a pixel) moves the minor
/// coordinate by one and pays back `2 * dx`.
///
/// Any endpoints are accepted. The walk along the major axis is clipped to
/// the buffer, starting from the error state the full walk would have
/// reached there, so off-screen lines cost nothing and the visible pixels
/// are unchanged.
pub fn draw_line(buffer: &mut FrameBuffer, from: Vec2i, to: Vec2i, color: u32) {
    let (mut x0, mut y0, mut x1, mut y1) = (
        i64::from(from.x),
        i64::from(from.y),
        i64::from(to.x),
        i64::from(to.y),
    );

    let steep = (x0 - x1).abs() < (y0 - y1).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let error_step = 2 * (y1 - y0).abs();
    let y_step = if y1 > y0 { 1 } else { -1 };

    let limit = i64::from(if steep { buffer.height() } else { buffer.width() });
    let first = x0.max(0);
    let last = x1.min(limit - 1);
    if first > last {
        return;
    }

    let (mut y, mut error) = skip_ahead(first - x0, dx, error_step);
    y = y0 + y_step * y;

    for x in first..=last {
        let (px, py) = if steep { (y, x) } else { (x, y) };
        if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
            buffer.set(px, py, color);
        }
        error += error_step;
        if error > dx {
            y += y_step;
            error -= 2 * dx;
        }
    }
}

/// Minor-axis advance and error term after `steps` iterations of the
/// Bresenham loop. At most one advance happens per step, so after `k` steps
/// the advance is the smallest `n` with `k * error_step - 2 * dx * n <= dx`.
fn skip_ahead(steps: i64, dx: i64, error_step: i64) -> (i64, i64) {
    if steps == 0 || dx == 0 {
        return (0, 0);
    }
    let accumulated = i128::from(steps) * i128::from(error_step);
    let (dx, twice_dx) = (i128::from(dx), 2 * i128::from(dx));
    let advanced = if accumulated <= dx {
        0
    } else {
        (accumulated + dx - 1) / twice_dx
    };
    // advanced <= steps and the remainder lies in (-dx, dx]
    (advanced as i64, (accumulated - twice_dx * advanced) as i64)
}

/// Outlines a triangle given its three screen-space corners.
pub fn draw_triangle_wireframe(buffer: &mut FrameBuffer, points: [Vec2i; 3], color: u32) {
    let [p0, p1, p2] = points;
    draw_line(buffer, p0, p1, color);
    draw_line(buffer, p1, p2, color);
    draw_line(buffer, p2, p0, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BACKGROUND, RED};
    use std::collections::BTreeSet;

    fn lit_pixels(fb: &FrameBuffer) -> BTreeSet<(i32, i32)> {
        let mut set = BTreeSet::new();
        for y in 0..fb.height() as i32 {
            for x in 0..fb.width() as i32 {
                if fb.get(x, y) != Some(BACKGROUND) {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    fn line_pixels(from: Vec2i, to: Vec2i) -> BTreeSet<(i32, i32)> {
        let mut fb = FrameBuffer::new(16, 16);
        draw_line(&mut fb, from, to, RED);
        lit_pixels(&fb)
    }

    #[test]
    fn test_horizontal_line() {
        let pixels = line_pixels(Vec2i::new(0, 0), Vec2i::new(5, 0));
        let expected: BTreeSet<_> = (0..=5).map(|x| (x, 0)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_steep_line_one_pixel_per_row() {
        let mut fb = FrameBuffer::new(16, 16);
        draw_line(&mut fb, Vec2i::new(0, 0), Vec2i::new(2, 4), RED);
        let pixels = lit_pixels(&fb);

        assert_eq!(pixels.len(), 5);
        let mut by_row: Vec<(i32, i32)> = pixels.iter().map(|&(x, y)| (y, x)).collect();
        by_row.sort();
        let rows: Vec<i32> = by_row.iter().map(|&(y, _)| y).collect();
        assert_eq!(rows, vec![0, 1, 2, 3, 4]);
        assert!(by_row.windows(2).all(|w| w[0].1 <= w[1].1));
        assert_eq!(by_row.first(), Some(&(0, 0)));
        assert_eq!(by_row.last(), Some(&(4, 2)));
    }

    #[test]
    fn test_direction_symmetry() {
        let cases = [
            (Vec2i::new(0, 0), Vec2i::new(5, 0)),
            (Vec2i::new(0, 0), Vec2i::new(2, 4)),
            (Vec2i::new(1, 13), Vec2i::new(14, 2)),
            (Vec2i::new(3, 3), Vec2i::new(9, 9)),
            (Vec2i::new(12, 1), Vec2i::new(4, 11)),
            (Vec2i::new(7, 7), Vec2i::new(7, 7)),
        ];
        for (a, b) in cases {
            assert_eq!(line_pixels(a, b), line_pixels(b, a), "{a:?} <-> {b:?}");
        }
    }

    #[test]
    fn test_endpoints_are_drawn() {
        let a = Vec2i::new(1, 13);
        let b = Vec2i::new(14, 2);
        let pixels = line_pixels(a, b);
        assert!(pixels.contains(&(1, 13)));
        assert!(pixels.contains(&(14, 2)));
        // One pixel per column along the major axis
        assert_eq!(pixels.len(), 14);
    }

    #[test]
    fn test_single_point() {
        let pixels = line_pixels(Vec2i::new(7, 7), Vec2i::new(7, 7));
        assert_eq!(pixels, BTreeSet::from([(7, 7)]));
    }

    #[test]
    fn test_clips_out_of_bounds() {
        let mut fb = FrameBuffer::new(4, 4);
        draw_line(&mut fb, Vec2i::new(-3, 1), Vec2i::new(10, 1), RED);
        let expected: BTreeSet<_> = (0..4).map(|x| (x, 1)).collect();
        assert_eq!(lit_pixels(&fb), expected);
    }

    #[test]
    fn test_clipped_walk_matches_unclipped() {
        // Same segments shifted fully inside a larger buffer, compared on
        // the 16x16 window they cover.
        let offset = 40;
        let cases = [
            (Vec2i::new(-20, -3), Vec2i::new(30, 12)),
            (Vec2i::new(-7, 25), Vec2i::new(22, -9)),
            (Vec2i::new(3, -30), Vec2i::new(9, 35)),
            (Vec2i::new(-1, -1), Vec2i::new(16, 5)),
        ];
        for (a, b) in cases {
            let mut big = FrameBuffer::new(120, 120);
            let shift = Vec2i::new(offset, offset);
            draw_line(&mut big, a + shift, b + shift, RED);
            let expected: BTreeSet<_> = lit_pixels(&big)
                .into_iter()
                .map(|(x, y)| (x - offset, y - offset))
                .filter(|&(x, y)| (0..16).contains(&x) && (0..16).contains(&y))
                .collect();
            assert_eq!(line_pixels(a, b), expected, "{a:?} -> {b:?}");
            assert_eq!(line_pixels(b, a), expected, "{b:?} -> {a:?}");
        }
    }

    #[test]
    fn test_extreme_endpoints() {
        let diagonal = line_pixels(Vec2i::new(i32::MIN, i32::MIN), Vec2i::new(i32::MAX, i32::MAX));
        let expected: BTreeSet<_> = (0..16).map(|i| (i, i)).collect();
        assert_eq!(diagonal, expected);

        let row = line_pixels(Vec2i::new(i32::MIN / 2, 3), Vec2i::new(i32::MAX / 2, 3));
        let expected: BTreeSet<_> = (0..16).map(|x| (x, 3)).collect();
        assert_eq!(row, expected);

        let column = line_pixels(Vec2i::new(5, i32::MAX), Vec2i::new(5, i32::MIN));
        let expected: BTreeSet<_> = (0..16).map(|y| (5, y)).collect();
        assert_eq!(column, expected);

        // Entirely off screen, including a minor axis far outside.
        let mut fb = FrameBuffer::new(16, 16);
        draw_line(&mut fb, Vec2i::new(0, i32::MAX), Vec2i::new(i32::MAX, i32::MAX - 1), RED);
        assert!(lit_pixels(&fb).is_empty());
    }

    #[test]
    fn test_wireframe_closes_outline() {
        let mut fb = FrameBuffer::new(8, 8);
        draw_triangle_wireframe(
            &mut fb,
            [Vec2i::new(0, 0), Vec2i::new(4, 0), Vec2i::new(0, 4)],
            RED,
        );
        let pixels = lit_pixels(&fb);
        for corner in [(0, 0), (4, 0), (0, 4)] {
            assert!(pixels.contains(&corner));
        }
        assert!(pixels.contains(&(2, 2)));
        assert!(!pixels.contains(&(1, 1)));
    }
}
