//! Owner of the color and depth surfaces.
//!
//! Provides the [`Renderer`] struct which keeps both surfaces the same size
//! and implements the overlay drawing that bypasses the depth test.

use super::framebuffer::FrameBuffer;
use super::surface::{Surface, SurfaceError, SurfaceView};
use crate::math::vec2::Vec2;

/// Side length of a vertex marker in pixels.
pub const VERTEX_MARKER_SIZE: i32 = 4;

pub struct Renderer {
    color: Surface,
    depth: Surface,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Ok(Self {
            color: Surface::new(width, height)?,
            depth: Surface::new(width, height)?,
        })
    }

    /// Reallocates both surfaces, zero-filled.
    ///
    /// Both allocations succeed before either surface is replaced, so a
    /// failure leaves the renderer at its old size.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        let color = Surface::new(width, height)?;
        let depth = Surface::new(width, height)?;
        self.color = color;
        self.depth = depth;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.color.width()
    }

    pub fn height(&self) -> u32 {
        self.color.height()
    }

    pub fn clear(&mut self, color: u32) {
        self.color.clear(color);
    }

    /// Clear the depth surface to the "maximum distance" sentinel.
    #[inline]
    pub fn clear_depth(&mut self, far: u32) {
        self.depth.clear(far);
    }

    /// Draws a square marker centered on `p`, ignoring depth.
    pub fn draw_vertex_marker(&mut self, p: Vec2, color: u32) {
        let p = p.truncate();
        let half = VERTEX_MARKER_SIZE / 2;
        self.color.fill_rect(
            p.x - half,
            p.y - half,
            VERTEX_MARKER_SIZE,
            VERTEX_MARKER_SIZE,
            color,
        );
    }

    pub fn color_surface(&self) -> &Surface {
        &self.color
    }

    pub fn depth_surface(&self) -> &Surface {
        &self.depth
    }

    pub fn view(&self) -> SurfaceView<'_> {
        self.color.view()
    }

    /// Get a mutable FrameBuffer view into the color and depth surfaces.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color, &mut self.depth)
    }
}
