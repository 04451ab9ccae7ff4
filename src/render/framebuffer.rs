//! Color and depth storage for one frame.
//!
//! [`FrameBuffer`] and [`DepthBuffer`] own their pixels. [`RenderTarget`] is a
//! borrowed pair of the two that the rasterizers draw into; it is the only
//! place where the depth test and the matching color write happen, so a
//! color is written exactly when its depth cell was just raised.

use image::RgbaImage;

use crate::colors;

/// Dense row-major color store, `width * height` packed ARGB values.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, colors::BACKGROUND)
    }

    pub fn filled(width: u32, height: u32, color: u32) -> Self {
        Self {
            pixels: vec![color; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set the color at (x, y). Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Reverses row order, so that row 0 (the bottom row while rasterizing)
    /// becomes the last row of the output image.
    pub fn flip_vertically(&mut self) {
        let row_len = self.width as usize;
        let height = self.height as usize;
        for y in 0..height / 2 {
            let (top, bottom) = self.pixels.split_at_mut((height - 1 - y) * row_len);
            top[y * row_len..(y + 1) * row_len].swap_with_slice(&mut bottom[..row_len]);
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Converts to an RGBA image, row 0 first.
    pub fn to_image(&self) -> RgbaImage {
        let bytes = self.pixels.iter().flat_map(|&p| colors::to_rgba(p)).collect();
        // Length always equals width * height * 4
        RgbaImage::from_raw(self.width, self.height, bytes)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }
}

/// Per-pixel depth store. Larger values are nearer; a fresh buffer holds
/// `f32::NEG_INFINITY` everywhere, so anything drawn is nearer.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    depths: Vec<f32>,
    width: u32,
    height: u32,
}

impl DepthBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            depths: vec![f32::NEG_INFINITY; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|i| self.depths[i])
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, depth: f32) {
        if let Some(i) = self.index(x, y) {
            self.depths[i] = depth;
        }
    }

    /// Resets every cell to negative infinity.
    pub fn clear(&mut self) {
        self.depths.fill(f32::NEG_INFINITY);
    }
}

/// A color buffer and a depth buffer of identical dimensions, borrowed
/// together for the duration of a draw.
pub struct RenderTarget<'a> {
    color: &'a mut FrameBuffer,
    depth: &'a mut DepthBuffer,
}

impl<'a> RenderTarget<'a> {
    /// # Panics
    /// Panics if the two buffers have different dimensions.
    pub fn new(color: &'a mut FrameBuffer, depth: &'a mut DepthBuffer) -> Self {
        assert_eq!(
            (color.width(), color.height()),
            (depth.width(), depth.height()),
            "Color and depth buffer dimensions differ"
        );
        Self { color, depth }
    }

    pub fn width(&self) -> u32 {
        self.color.width
    }

    pub fn height(&self) -> u32 {
        self.color.height
    }

    /// Depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        self.depth.get(x, y)
    }

    /// Depth-tested write.
    ///
    /// If `depth` is strictly greater than the stored depth, stores it and
    /// writes `shade()` to the color buffer. `shade` is only evaluated for
    /// fragments that pass. Returns whether the pixel was written;
    /// out-of-bounds coordinates are never written.
    #[inline]
    pub fn test_and_set(&mut self, x: i32, y: i32, depth: f32, shade: impl FnOnce() -> u32) -> bool {
        let Some(i) = self.depth.index(x, y) else {
            return false;
        };
        if depth > self.depth.depths[i] {
            self.depth.depths[i] = depth;
            self.color.pixels[i] = shade();
            true
        } else {
            false
        }
    }

    /// Write without depth testing (lines, overlays).
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        self.color.set(x, y, color);
    }

    pub fn color_buffer(&self) -> &FrameBuffer {
        self.color
    }
}
