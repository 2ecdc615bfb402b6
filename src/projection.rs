//! Perspective divide and the NDC-to-pixel mapping.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Returned by [`project`] for points on the camera plane.
///
/// Not a usable position: [`to_screen`] maps it to the surface's top-left
/// corner. Callers drop any triangle with such a vertex before projecting.
pub const DEGENERATE_PROJECTION: Vec2 = Vec2::new(-1.0, -1.0);

/// Perspective-divides a camera-space point: `(x / z, y / z)`.
///
/// `z == 0` yields [`DEGENERATE_PROJECTION`] instead of infinities.
pub fn project(p: Vec3) -> Vec2 {
    if p.z == 0.0 {
        return DEGENERATE_PROJECTION;
    }
    Vec2::new(p.x / p.z, p.y / p.z)
}

/// Maps normalized device coordinates in `[-1, 1]` to pixel coordinates.
///
/// No clamping; points outside `[-1, 1]` map outside the surface.
pub fn to_screen(width: u32, height: u32, p: Vec2) -> Vec2 {
    Vec2::new(
        (p.x + 1.0) / 2.0 * width as f32,
        (p.y + 1.0) / 2.0 * height as f32,
    )
}
