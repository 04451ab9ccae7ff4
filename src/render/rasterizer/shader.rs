//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer decides coverage, computes barycentric weights and runs
//! the depth test. The shader turns the weights of a visible fragment into
//! a color. It is only called for fragments that pass the depth test.

use super::barycentric::interpolate_vec2;
use crate::colors::modulate;
use crate::math::{Vec2, Vec3};
use crate::texture::Texture;

/// How a triangle's covered pixels are colored.
#[derive(Debug, Clone, Copy)]
pub enum Shading<'a> {
    /// One color for the whole triangle.
    Flat(u32),
    /// Nearest texel at the interpolated texture coordinate, scaled by a
    /// per-triangle light intensity in [0, 1]. Requires the triangle to
    /// carry texture coordinates.
    Textured {
        texture: &'a Texture,
        intensity: f32,
    },
}

/// Per-pixel shading computation.
///
/// # Barycentric Coordinates
///
/// `lambda` holds the weights of the three vertices for the current pixel,
/// summing to 1.0 and used as `attr = λ₀*attr₀ + λ₁*attr₁ + λ₂*attr₂`.
pub trait PixelShader {
    fn shade(&self, lambda: Vec3) -> u32;
}

/// Returns a constant color for all pixels.
pub struct FlatShader {
    color: u32,
}

impl FlatShader {
    pub fn new(color: u32) -> Self {
        Self { color }
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, _lambda: Vec3) -> u32 {
        self.color
    }
}

/// Samples the texture at the interpolated UV and modulates it by the
/// triangle's light intensity.
pub struct TextureShader<'a> {
    texture: &'a Texture,
    uvs: [Vec2; 3],
    intensity: f32,
}

impl<'a> TextureShader<'a> {
    pub fn new(texture: &'a Texture, uvs: [Vec2; 3], intensity: f32) -> Self {
        Self {
            texture,
            uvs,
            intensity,
        }
    }
}

impl PixelShader for TextureShader<'_> {
    #[inline]
    fn shade(&self, lambda: Vec3) -> u32 {
        let uv = interpolate_vec2(lambda, self.uvs);
        modulate(self.texture.sample(uv), self.intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{gray, BLUE, GREEN, RED, WHITE};

    #[test]
    fn test_flat_shader_ignores_weights() {
        let shader = FlatShader::new(RED);
        assert_eq!(shader.shade(Vec3::new(1.0, 0.0, 0.0)), RED);
        assert_eq!(shader.shade(Vec3::new(0.2, 0.3, 0.5)), RED);
    }

    #[test]
    fn test_texture_shader_follows_interpolated_uv() {
        let texture = Texture::new(2, 2, vec![RED, GREEN, BLUE, WHITE]).unwrap();
        let uvs = [
            Vec2::new(0.25, 0.75),
            Vec2::new(0.75, 0.75),
            Vec2::new(0.25, 0.25),
        ];
        let shader = TextureShader::new(&texture, uvs, 1.0);
        assert_eq!(shader.shade(Vec3::new(1.0, 0.0, 0.0)), RED);
        assert_eq!(shader.shade(Vec3::new(0.0, 1.0, 0.0)), GREEN);
        assert_eq!(shader.shade(Vec3::new(0.0, 0.0, 1.0)), BLUE);
    }

    #[test]
    fn test_texture_shader_applies_intensity() {
        let texture = Texture::new(1, 1, vec![WHITE]).unwrap();
        let shader = TextureShader::new(&texture, [Vec2::ZERO; 3], 0.5);
        assert_eq!(shader.shade(Vec3::new(1.0, 0.0, 0.0)), gray(0.5));
    }
}
