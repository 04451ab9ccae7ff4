//! Packed ARGB8888 colors.
//!
//! Colors are stored as `0xAARRGGBB` in a `u32`, the same layout used by the
//! frame buffer and textures.

pub const BLACK: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;

pub const BACKGROUND: u32 = BLACK;
pub const WIREFRAME: u32 = WHITE;

/// Packs RGBA from 0-255 components.
#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpacks a color into `[r, g, b, a]` bytes.
#[inline]
pub const fn to_rgba(color: u32) -> [u8; 4] {
    [
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
        (color >> 24) as u8,
    ]
}

/// Packs RGBA from components in [0.0, 1.0]. Out-of-range values are clamped.
#[inline]
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    rgba(to_byte(r), to_byte(g), to_byte(b), to_byte(a))
}

/// Unpacks the RGB channels into [0.0, 1.0].
#[inline]
pub fn unpack_color(color: u32) -> (f32, f32, f32) {
    let [r, g, b, _] = to_rgba(color);
    (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

/// Scales the RGB channels by `intensity`, keeping alpha.
#[inline]
pub fn modulate(color: u32, intensity: f32) -> u32 {
    let (r, g, b) = unpack_color(color);
    let alpha = to_rgba(color)[3];
    let [r, g, b, _] = to_rgba(pack_color(r * intensity, g * intensity, b * intensity, 1.0));
    rgba(r, g, b, alpha)
}

/// Opaque gray of the given intensity, as used for flat diffuse shading.
#[inline]
pub fn gray(intensity: f32) -> u32 {
    pack_color(intensity, intensity, intensity, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_round_trip_layout() {
        let c = rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c, 0x78123456);
        assert_eq!(to_rgba(c), [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_pack_color_clamps() {
        assert_eq!(pack_color(2.0, -1.0, 1.0, 1.0), rgba(255, 0, 255, 255));
    }

    #[test]
    fn test_modulate() {
        assert_eq!(modulate(WHITE, 0.0), BLACK);
        assert_eq!(modulate(WHITE, 1.0), WHITE);
        assert_eq!(modulate(rgba(200, 100, 50, 10), 0.5), rgba(100, 50, 25, 10));
    }

    #[test]
    fn test_gray() {
        assert_eq!(gray(1.0), WHITE);
        assert_eq!(gray(0.0), BLACK);
    }
}
