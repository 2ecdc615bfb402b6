//! Pixel surfaces and the depth-resolved rasterizer.

mod framebuffer;
mod rasterizer;
mod renderer;
mod surface;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{
    edge, in_triangle, BoundingBox, EdgeFunctionRasterizer, Rasterizer, Triangle,
};
pub use renderer::Renderer;
pub use surface::{Surface, SurfaceError, SurfaceView};
