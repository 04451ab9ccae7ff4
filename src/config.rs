//! Render configuration and scene files.
//!
//! [`RenderConfig`] is everything a [`crate::Renderer`] reads. [`Scene`] adds
//! the files around a render: the model, its placement, an optional texture
//! and the output image.
//!
//! Scenes use RON (Rusty Object Notation). Every field has a default, so a
//! file only lists what it changes:
//!
//! ```ron
//! (
//!     render: (
//!         width: 1024,
//!         height: 1024,
//!         eye: (x: 1.0, y: 1.0, z: 3.0),
//!         render_mode: FilledWireframe,
//!     ),
//!     model_path: "obj/african_head.obj",
//!     texture_path: Some("obj/african_head_diffuse.tga"),
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::colors;
use crate::error::{Error, Result};
use crate::light::DirectionalLight;
use crate::model::Model;
use crate::texture::Texture;
use crate::math::Vec3;
use crate::projection::ProjectionKind;
use crate::render::RasterizerType;
use crate::transform::Transform;
use crate::viewport::Viewport;

/// What to draw for each face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// Edges only, no depth test.
    Wireframe,
    /// Depth-tested filled triangles.
    #[default]
    Filled,
    /// Filled triangles with their edges drawn on top.
    FilledWireframe,
}

impl RenderMode {
    pub fn draws_filled(self) -> bool {
        matches!(self, RenderMode::Filled | RenderMode::FilledWireframe)
    }

    pub fn draws_wireframe(self) -> bool {
        matches!(self, RenderMode::Wireframe | RenderMode::FilledWireframe)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output image size in pixels.
    pub width: u32,
    pub height: u32,
    /// Depth range of the viewport, `[0, depth]`. Only scales stored depth
    /// values; comparisons are in `f32`.
    pub depth: f32,
    /// Target rectangle; `None` covers the whole image.
    pub viewport: Option<Viewport>,
    /// Look-at camera. Only the perspective projection uses it; the
    /// orthographic mapping puts world `[-1, 1]` straight on the viewport.
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
    /// Direction the light travels in.
    pub light_dir: Vec3,
    pub projection: ProjectionKind,
    pub render_mode: RenderMode,
    pub rasterizer: RasterizerType,
    /// Sample the model's texture on faces that have texture coordinates.
    pub use_texture: bool,
    pub background: u32,
    pub wireframe_color: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            depth: 255.0,
            viewport: None,
            eye: Vec3::new(1.0, 1.0, 3.0),
            center: Vec3::ZERO,
            up: Vec3::UP,
            light_dir: Vec3::new(0.0, 0.0, -1.0),
            projection: ProjectionKind::Perspective,
            render_mode: RenderMode::Filled,
            rasterizer: RasterizerType::EdgeFunction,
            use_texture: true,
            background: colors::BACKGROUND,
            wireframe_color: colors::WIREFRAME,
        }
    }
}

/// A render configuration plus the files it reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub render: RenderConfig,
    /// Relative paths resolve against the scene file's directory.
    pub model_path: PathBuf,
    pub texture_path: Option<PathBuf>,
    pub output_path: PathBuf,
    /// Placement of the model in world space.
    pub model_transform: Transform,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            model_path: PathBuf::from("obj/african_head.obj"),
            texture_path: None,
            output_path: PathBuf::from("output.tga"),
            model_transform: Transform::default(),
        }
    }
}

impl Scene {
    /// Load and validate a scene file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let mut scene = Self::from_ron_str(&contents)?;
        if let Some(dir) = path.as_ref().parent() {
            scene.resolve_paths(dir);
        }
        Ok(scene)
    }

    /// Parse and validate a scene from a RON string.
    pub fn from_ron_str(s: &str) -> Result<Self> {
        let scene: Self = ron::from_str(s)?;
        scene.render.validate()?;
        Ok(scene)
    }

    /// Loads the model with the scene's transform and texture applied.
    pub fn load_model(&self) -> Result<Model> {
        let name = self
            .model_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());
        let mut model = Model::from_obj(name, &self.model_path)?;
        model.set_transform(self.model_transform);
        if let Some(texture_path) = &self.texture_path {
            model.set_texture(Texture::from_file(texture_path)?);
        }
        Ok(model)
    }

    fn resolve_paths(&mut self, dir: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = dir.join(&*p);
            }
        };
        resolve(&mut self.model_path);
        if let Some(p) = self.texture_path.as_mut() {
            resolve(p);
        }
        resolve(&mut self.output_path);
    }
}

impl RenderConfig {
    /// Checks everything a render relies on: a non-empty image, a usable
    /// camera basis and a light direction.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "image size {}x{} is empty",
                self.width, self.height
            )));
        }
        if !self.depth.is_finite() || self.depth <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "depth resolution must be positive, got {}",
                self.depth
            )));
        }
        self.camera()?;
        self.light()?;
        Ok(())
    }

    pub fn camera(&self) -> Result<Camera> {
        Camera::new(self.eye, self.center, self.up)
    }

    pub fn light(&self) -> Result<DirectionalLight> {
        DirectionalLight::new(self.light_dir)
            .ok_or_else(|| Error::InvalidConfig("light direction has zero length".to_string()))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
            .unwrap_or_else(|| Viewport::full(self.width, self.height, self.depth))
    }
}
