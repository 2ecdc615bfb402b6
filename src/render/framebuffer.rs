//! Frame buffer abstraction for depth-tested pixel access.
//!
//! Pairs the color and depth surfaces so the rasterizer can resolve
//! visibility per pixel without owning either of them.

use super::surface::Surface;

/// A view into a color surface and its depth surface.
///
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass both surfaces together.
///
/// # Depth Surface
///
/// The depth surface stores encoded depths (`z * scale`, see
/// [`RenderConfig::encode_depth`](crate::config::RenderConfig::encode_depth)).
/// Smaller values are closer to the camera. It starts every frame cleared to
/// the "maximum distance" sentinel.
pub struct FrameBuffer<'a> {
    color: &'a mut Surface,
    depth: &'a mut Surface,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view over two surfaces.
    ///
    /// The surfaces are expected to share dimensions. If they do not, only
    /// pixels present in both are ever written.
    pub fn new(color: &'a mut Surface, depth: &'a mut Surface) -> Self {
        Self { color, depth }
    }

    pub fn width(&self) -> u32 {
        self.color.width()
    }

    pub fn height(&self) -> u32 {
        self.color.height()
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if `depth` is strictly less than the depth
    /// already stored there, in which case the stored depth is replaced too.
    /// Silently ignores out-of-bounds coordinates.
    ///
    /// Returns whether the pixel was written.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: u32, color: u32) -> bool {
        let (Some(depth_idx), Some(color_idx)) =
            (self.depth.index_of(x, y), self.color.index_of(x, y))
        else {
            return false;
        };
        if depth >= self.depth.get_at(depth_idx) {
            return false;
        }
        self.depth.set_at(depth_idx, depth);
        self.color.set_at(color_idx, color);
        true
    }

    /// Set a pixel without depth testing (for overlays).
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        self.color.set_pixel(x, y, color);
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.color.get_pixel(x, y)
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_depth(&self, x: i32, y: i32) -> Option<u32> {
        self.depth.get_pixel(x, y)
    }
}
