//! Triangle rasterization.
//!
//! Triangles arrive in screen space with a single encoded depth and a flat
//! fill color; the rasterizer decides coverage and hands covered pixels to
//! the [`FrameBuffer`] depth test.

mod edgefunction;

pub use edgefunction::{edge, in_triangle, BoundingBox, EdgeFunctionRasterizer};

use super::framebuffer::FrameBuffer;
use crate::math::vec2::Vec2;

/// A triangle ready for rasterization in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec2; 3],
    /// Encoded depth shared by every pixel of the triangle.
    pub depth: u32,
    pub color: u32,
}

impl Triangle {
    pub fn new(points: [Vec2; 3], depth: u32, color: u32) -> Self {
        Self {
            points,
            depth,
            color,
        }
    }
}

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how triangles are filled into a frame buffer.
pub trait Rasterizer {
    /// Fill a triangle into the frame buffer, depth-testing every covered
    /// pixel against `triangle.depth`.
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer);
}
