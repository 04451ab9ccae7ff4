//! Low-level rendering primitives: buffers, lines and triangle fill.

pub mod framebuffer;
pub mod line;
pub mod rasterizer;

pub use framebuffer::{DepthBuffer, FrameBuffer, RenderTarget};
pub use line::{draw_line, draw_triangle_wireframe};
pub use rasterizer::{
    EdgeFunctionRasterizer, Rasterizer, RasterizerDispatcher, RasterizerType, ScanlineRasterizer,
    Shading, Triangle, Vertex,
};
