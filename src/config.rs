//! Window constants and per-frame render settings.

use crate::colors;

pub const WINDOW_TITLE: &str = "softraster";
pub const WINDOW_WIDTH: u32 = 500;
pub const WINDOW_HEIGHT: u32 = 500;
pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

/// Multiplier turning camera-space z into an encoded depth.
pub const DEPTH_SCALE: f32 = 0xFF00 as f32;

/// Settings the frame driver reads on every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Color the color surface is cleared to.
    pub background: u32,
    /// "Maximum distance" the depth surface is cleared to. Only encoded
    /// depths strictly below it can be drawn.
    pub depth_far: u32,
    /// See [`DEPTH_SCALE`].
    pub depth_scale: f32,
    /// Overlay a marker on every projected vertex.
    pub show_vertices: bool,
    /// Darken face colors with distance.
    pub depth_shading: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: colors::BACKGROUND,
            depth_far: u32::MAX,
            depth_scale: DEPTH_SCALE,
            show_vertices: false,
            depth_shading: false,
        }
    }
}

impl RenderConfig {
    /// Encodes camera-space `z` for the depth surface.
    ///
    /// Linear in z and not perspective-correct. The float-to-int conversion
    /// saturates, so negative depths encode as 0.
    #[inline]
    pub fn encode_depth(&self, z: f32) -> u32 {
        (z * self.depth_scale) as u32
    }
}
