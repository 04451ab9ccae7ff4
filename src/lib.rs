//! A small CPU software rasterizer.
//!
//! Loads a triangle mesh, pushes it through a look-at, perspective and
//! viewport transform, and fills it into a color buffer with a z-buffer,
//! flat lighting and optional texturing. Everything runs on the CPU; the
//! result is written out as an image file.
//!
//! # Quick Start
//!
//! ```no_run
//! use tinyrast::prelude::*;
//!
//! # fn main() -> tinyrast::Result<()> {
//! let config = RenderConfig::default();
//! let renderer = Renderer::new(config)?;
//! let model = Model::from_obj("head", "obj/african_head.obj")?;
//! renderer.render(&model)?.save("output.tga")?;
//! # Ok(())
//! # }
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod model;
pub mod pipeline;
pub mod projection;
pub mod render;
pub mod texture;
pub mod transform;
pub mod viewport;

// Re-export commonly needed types at crate root for convenience
pub use config::{RenderConfig, RenderMode, Scene};
pub use engine::{Frame, RenderStats, Renderer};
pub use error::{Error, Result};
pub use mesh::Mesh;
pub use model::Model;
pub use projection::Projection;
pub use render::RasterizerType;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use tinyrast::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::Camera;
    pub use crate::light::DirectionalLight;
    pub use crate::model::Model;
    pub use crate::texture::Texture;
    pub use crate::transform::Transform;

    // Engine
    pub use crate::config::{RenderConfig, RenderMode, Scene};
    pub use crate::engine::{Frame, RenderStats, Renderer};

    // Transform chain
    pub use crate::pipeline::Pipeline;
    pub use crate::projection::{Projection, ProjectionKind};
    pub use crate::viewport::Viewport;

    // Math
    pub use crate::math::{Matrix, Vec2, Vec2i, Vec3, Vec3i};

    // Rendering
    pub use crate::render::{FrameBuffer, RasterizerType};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        DepthBuffer, EdgeFunctionRasterizer, FrameBuffer, Rasterizer, RenderTarget,
        ScanlineRasterizer, Shading, Triangle,
    };
}
