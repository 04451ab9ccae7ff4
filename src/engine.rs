//! Core rendering engine.
//!
//! A [`Renderer`] is an explicit render context: it holds the configuration
//! and the active fill algorithm, and every call to [`Renderer::render`]
//! produces a fresh, owned [`Frame`]. Nothing is global, so two renderers
//! with different settings can run side by side.

use std::path::Path;

use crate::colors;
use crate::config::{RenderConfig, RenderMode};
use crate::error::Result;
use crate::light::DirectionalLight;
use crate::math::{Matrix, Vec2i};
use crate::mesh::{Face, Mesh};
use crate::model::Model;
use crate::pipeline::Pipeline;
use crate::projection::ProjectionKind;
use crate::render::{
    draw_triangle_wireframe, DepthBuffer, FrameBuffer, Rasterizer, RasterizerDispatcher,
    RasterizerType, RenderTarget, Shading, Triangle,
};
use crate::texture::Texture;

/// Counters collected over one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Faces handed to the rasterizer or line drawer.
    pub faces_drawn: usize,
    /// Faces facing away from the light.
    pub faces_culled: usize,
    /// Faces dropped for bad indices or an unprojectable vertex.
    pub faces_skipped: usize,
    /// Pixels that passed the depth test.
    pub pixels_written: usize,
}

/// The result of one render: the color image, its depth buffer and stats.
///
/// Row 0 of [`Frame::color`] is the bottom of the image.
pub struct Frame {
    pub color: FrameBuffer,
    pub depth: DepthBuffer,
    pub stats: RenderStats,
}

impl Frame {
    /// Write the image to disk with row 0 at the bottom. The format follows
    /// the file extension (`.tga`, `.png`, ...).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut flipped = self.color.clone();
        flipped.flip_vertically();
        flipped.to_image().save(path.as_ref())?;
        log::debug!("wrote {}", path.as_ref().display());
        Ok(())
    }
}

pub struct Renderer {
    config: RenderConfig,
    rasterizer: RasterizerDispatcher,
}

impl Renderer {
    /// Create a renderer. The config is validated first.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rasterizer: RasterizerDispatcher::new(config.rasterizer),
            config,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.config.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.config.render_mode
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.config.rasterizer = rasterizer_type;
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    /// Object space to screen space for the given model matrix.
    pub fn pipeline(&self, model: &Matrix) -> Result<Pipeline> {
        let viewport = self.config.viewport();
        let pipeline = match self.config.projection {
            ProjectionKind::Perspective => {
                Pipeline::perspective(model, &self.config.camera()?, &viewport)
            }
            ProjectionKind::Orthographic => Pipeline::orthographic(model, &viewport),
        };
        Ok(pipeline)
    }

    /// Render every face of `model` into a new frame.
    pub fn render(&self, model: &Model) -> Result<Frame> {
        let config = &self.config;
        let model_matrix = model.transform().to_matrix();
        let pipeline = self.pipeline(&model_matrix)?;
        let light = config.light()?;
        let texture = model.texture().filter(|_| config.use_texture);

        let mut color = FrameBuffer::filled(config.width, config.height, config.background);
        let mut depth = DepthBuffer::new(config.width, config.height);
        let mut stats = RenderStats::default();

        for mesh in model.meshes() {
            let mut pass = MeshPass {
                mesh,
                model_matrix: &model_matrix,
                pipeline: &pipeline,
                light: &light,
                texture,
                stats: &mut stats,
            };
            for face in mesh.faces() {
                let Some(face) = pass.prepare(face) else {
                    continue;
                };
                if config.render_mode.draws_filled() {
                    let mut target = RenderTarget::new(&mut color, &mut depth);
                    pass.stats.pixels_written +=
                        self.rasterizer
                            .fill_triangle(&face.triangle, &mut target, &face.shading);
                }
                if config.render_mode.draws_wireframe() {
                    draw_triangle_wireframe(&mut color, face.pixels, config.wireframe_color);
                }
                pass.stats.faces_drawn += 1;
            }
        }

        log::debug!(
            "rendered '{}' with {}: {} drawn, {} culled, {} skipped, {} pixels",
            model.name(),
            self.rasterizer.active_type(),
            stats.faces_drawn,
            stats.faces_culled,
            stats.faces_skipped,
            stats.pixels_written,
        );

        Ok(Frame {
            color,
            depth,
            stats,
        })
    }
}

/// A face after lighting and projection, ready to draw.
struct PreparedFace<'a> {
    triangle: Triangle,
    shading: Shading<'a>,
    /// Rounded screen positions for the wireframe.
    pixels: [Vec2i; 3],
}

/// Per-mesh state shared by all of its faces during one render.
struct MeshPass<'a> {
    mesh: &'a Mesh,
    model_matrix: &'a Matrix,
    pipeline: &'a Pipeline,
    light: &'a DirectionalLight,
    texture: Option<&'a Texture>,
    stats: &'a mut RenderStats,
}

impl<'a> MeshPass<'a> {
    fn prepare(&mut self, face: &Face) -> Option<PreparedFace<'a>> {
        let Some(object) = self.mesh.face_vertices(face) else {
            log::warn!(
                "mesh '{}': face {:?} references a missing vertex",
                self.mesh.name(),
                face.vertices
            );
            self.stats.faces_skipped += 1;
            return None;
        };

        let world = object.map(|v| self.model_matrix.transform_point(v));
        let [Some(a), Some(b), Some(c)] = world else {
            self.stats.faces_skipped += 1;
            return None;
        };

        let intensity = self.light.face_intensity([a, b, c]);
        if intensity <= 0.0 {
            self.stats.faces_culled += 1;
            return None;
        }

        let screen = object.map(|v| self.pipeline.to_screen(v));
        let [Some(s0), Some(s1), Some(s2)] = screen else {
            log::trace!("face {:?} has a vertex on the eye plane", face.vertices);
            self.stats.faces_skipped += 1;
            return None;
        };
        let points = [s0, s1, s2];

        let uvs = self.mesh.face_uvs(face);
        let triangle = match uvs {
            Some(uvs) => Triangle::with_uvs(points, uvs),
            None => Triangle::new(points),
        };
        let shading = match (self.texture, uvs) {
            (Some(texture), Some(_)) => Shading::Textured { texture, intensity },
            _ => Shading::Flat(colors::gray(intensity)),
        };

        Some(PreparedFace {
            triangle,
            shading,
            pixels: points.map(|p| p.xy().round()),
        })
    }
}
