//! Triangle rasterization algorithms.
//!
//! Both rasterizers share the same per-pixel rule: a candidate pixel is
//! covered when its barycentric weights are all above
//! [`barycentric::EDGE_TOLERANCE`], its depth is the weighted vertex depth,
//! and it is written only if that depth beats the depth buffer. They differ
//! only in how candidate pixels are enumerated.
//!
//! Available algorithms:
//! - [`EdgeFunctionRasterizer`]: every pixel of the clamped bounding box
//! - [`ScanlineRasterizer`]: per-row spans between the triangle's edges

pub mod barycentric;
mod edgefunction;
mod scanline;
mod shader;

use serde::{Deserialize, Serialize};

pub use edgefunction::EdgeFunctionRasterizer;
pub use scanline::ScanlineRasterizer;
pub use shader::{FlatShader, PixelShader, Shading, TextureShader};

use self::barycentric::{barycentric, covers, interpolate};
use super::framebuffer::RenderTarget;
use crate::math::{Vec2, Vec3};

/// A screen-space vertex: pixel x/y, depth in z (larger is nearer), and an
/// optional texture coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub uv: Option<Vec2>,
}

impl Vertex {
    pub fn new(position: Vec3) -> Self {
        Self { position, uv: None }
    }

    pub fn with_uv(position: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            uv: Some(uv),
        }
    }
}

/// A triangle ready for rasterization in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(points: [Vec3; 3]) -> Self {
        Self {
            vertices: points.map(Vertex::new),
        }
    }

    pub fn with_uvs(points: [Vec3; 3], uvs: [Vec2; 3]) -> Self {
        Self {
            vertices: [
                Vertex::with_uv(points[0], uvs[0]),
                Vertex::with_uv(points[1], uvs[1]),
                Vertex::with_uv(points[2], uvs[2]),
            ],
        }
    }

    pub fn points(&self) -> [Vec3; 3] {
        self.vertices.map(|v| v.position)
    }

    /// Texture coordinates, if all three vertices carry one.
    pub fn uvs(&self) -> Option<[Vec2; 3]> {
        let [a, b, c] = self.vertices;
        Some([a.uv?, b.uv?, c.uv?])
    }
}

/// Trait for triangle rasterization algorithms.
///
/// Implementors enumerate candidate pixels and hand each to
/// [`shade_pixel`]; [`Rasterizer::fill_triangle`] picks the shader.
pub trait Rasterizer {
    /// Rasterize with a concrete shader. Returns the number of pixels written.
    fn rasterize<S: PixelShader>(
        &self,
        triangle: &Triangle,
        target: &mut RenderTarget,
        shader: &S,
    ) -> usize;

    /// Fill a triangle into the render target with the given shading.
    ///
    /// Degenerate triangles, and textured shading of a triangle without
    /// texture coordinates, write nothing.
    fn fill_triangle(
        &self,
        triangle: &Triangle,
        target: &mut RenderTarget,
        shading: &Shading,
    ) -> usize {
        match *shading {
            Shading::Flat(color) => self.rasterize(triangle, target, &FlatShader::new(color)),
            Shading::Textured { texture, intensity } => match triangle.uvs() {
                Some(uvs) => {
                    let shader = TextureShader::new(texture, uvs, intensity);
                    self.rasterize(triangle, target, &shader)
                }
                None => {
                    log::warn!("textured shading requested for a triangle without texture coordinates");
                    0
                }
            },
        }
    }
}

/// Coverage test, depth interpolation and depth-tested write for one pixel.
#[inline]
pub(crate) fn shade_pixel<S: PixelShader>(
    points: &[Vec3; 3],
    x: i32,
    y: i32,
    target: &mut RenderTarget,
    shader: &S,
) -> bool {
    let Some(weights) = barycentric(points, Vec2::new(x as f32, y as f32)) else {
        return false;
    };
    if !covers(weights) {
        return false;
    }
    let depth = interpolate(weights, [points[0].z, points[1].z, points[2].z]);
    target.test_and_set(x, y, depth, || shader.shade(weights))
}

/// Available rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RasterizerType {
    /// Tests each pixel in the clamped bounding box.
    #[default]
    EdgeFunction,
    /// Walks rows between the top and bottom vertex and only tests pixels
    /// between the left and right edges. Cheaper for thin triangles.
    Scanline,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::EdgeFunction => write!(f, "EdgeFunction"),
            RasterizerType::Scanline => write!(f, "Scanline"),
        }
    }
}

/// Holds both rasterizer implementations and forwards to the active one.
#[derive(Debug, Default)]
pub struct RasterizerDispatcher {
    scanline: ScanlineRasterizer,
    edge_function: EdgeFunctionRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            scanline: ScanlineRasterizer::new(),
            edge_function: EdgeFunctionRasterizer::new(),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn rasterize<S: PixelShader>(
        &self,
        triangle: &Triangle,
        target: &mut RenderTarget,
        shader: &S,
    ) -> usize {
        match self.active {
            RasterizerType::EdgeFunction => self.edge_function.rasterize(triangle, target, shader),
            RasterizerType::Scanline => self.scanline.rasterize(triangle, target, shader),
        }
    }
}
