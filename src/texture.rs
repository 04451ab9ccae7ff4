use std::path::Path;

use image::RgbaImage;

use crate::colors;
use crate::error::{Error, Result};
use crate::math::Vec2;

/// Represents a 2D texture for texture mapping.
///
/// Texels are packed ARGB, stored row-major with the top row first (the
/// layout image files use).
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    data: Vec<u32>,
    width: u32,
    height: u32,
}

impl Texture {
    /// Creates a texture from raw texels.
    ///
    /// Fails if either dimension is zero or `data` does not hold exactly
    /// `width * height` texels.
    pub fn new(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize {
            return Err(Error::InvalidTexture {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Converts a decoded RGBA image.
    pub fn from_image(img: &RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        let data = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                colors::rgba(r, g, b, a)
            })
            .collect();
        Self::new(width, height, data)
    }

    /// Load a texture from an image file (PNG, TGA, JPG, ...).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = image::open(path.as_ref())?.to_rgba8();
        log::debug!(
            "loaded texture {} ({}x{})",
            path.as_ref().display(),
            img.width(),
            img.height()
        );
        Self::from_image(&img)
    }

    /// Sample the texture at UV coordinates using nearest-neighbor lookup.
    ///
    /// # UV Coordinate Convention
    /// - UV coordinates are in [0,1] range
    /// - (0,0) = bottom-left in OBJ convention, but texels are stored top row first
    /// - V is flipped to correct for this: v_corrected = 1.0 - v
    ///
    /// # Wrapping
    /// Uses repeat/wrap mode via rem_euclid for UVs outside [0,1]
    #[inline]
    pub fn sample(&self, uv: Vec2) -> u32 {
        let u = uv.x.rem_euclid(1.0);
        let v = (1.0 - uv.y).rem_euclid(1.0);

        // rem_euclid can return exactly 1.0 for tiny negative inputs
        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);

        self.data[(y * self.width + x) as usize]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
