//! Edge function-based triangle rasterization with a depth test.
//!
//! # Algorithm Overview
//!
//! 1. Compute the triangle's bounding box and clamp it to the surface
//! 2. For each integer pixel in the box, evaluate three edge functions
//! 3. A pixel is inside if all three are strictly negative
//! 4. Covered pixels go through the frame buffer's depth test
//!
//! # Edge Function
//!
//! For an edge from point A to point B, the edge function at point P is:
//!
//! ```text
//! E(P) = (B.x - A.x) * (P.y - A.y) - (B.y - A.y) * (P.x - A.x)
//! ```
//!
//! This is the 2D cross product (B - A) × (P - A).
//!
//! # Winding Order
//!
//! Only one winding is accepted: all edge values negative. With surface rows
//! growing downwards that is the orientation camera-facing cube faces end up
//! with after projection, so faces turned away from the camera are rejected
//! as a side effect. A pixel exactly on an edge (`E == 0`) is outside, so
//! two triangles sharing an edge never both cover a pixel on it.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use super::{Rasterizer, Triangle};
use crate::math::vec2::Vec2;
use crate::render::framebuffer::FrameBuffer;

/// Computes the edge function value for point `p` relative to edge `a -> b`.
#[inline]
pub fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Whether `p` lies strictly inside `points` under the negative winding.
#[inline]
pub fn in_triangle(points: &[Vec2; 3], p: Vec2) -> bool {
    let [v0, v1, v2] = *points;
    edge(v0, v1, p) < 0.0 && edge(v1, v2, p) < 0.0 && edge(v2, v0, p) < 0.0
}

/// Inclusive integer pixel range covered by a triangle, clamped to a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// `floor(min)` to `ceil(max)` on both axes, clamped to
    /// `[0, width) x [0, height)`. `None` when nothing is left.
    pub fn clamped(points: &[Vec2; 3], width: u32, height: u32) -> Option<Self> {
        let [v0, v1, v2] = *points;

        // Float-to-int casts saturate, so huge or infinite coordinates clamp
        // like any other off-surface point.
        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(width as i32 - 1);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(height as i32 - 1);

        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }
}

/// Triangle rasterizer using the edge function algorithm.
///
/// Iterates over every pixel in the triangle's clamped bounding box and
/// samples the edge functions at the integer pixel coordinate. Each covered
/// pixel is written through [`FrameBuffer::set_pixel_with_depth`] with the
/// triangle's single encoded depth; there is no per-pixel interpolation.
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    /// Creates a new edge function rasterizer instance.
    pub fn new() -> Self {
        EdgeFunctionRasterizer {}
    }
}

impl Default for EdgeFunctionRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for EdgeFunctionRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        let [v0, v1, v2] = triangle.points;

        // The three edge values always sum to the signed area, so they can
        // only all be negative when the area is. This rejects back-facing and
        // degenerate triangles (and NaN geometry) before touching a pixel.
        let area = edge(v0, v1, v2);
        if area.is_nan() || area >= 0.0 {
            return;
        }

        let Some(bbox) = BoundingBox::clamped(&triangle.points, buffer.width(), buffer.height())
        else {
            return;
        };

        for y in bbox.min_y..=bbox.max_y {
            for x in bbox.min_x..=bbox.max_x {
                let p = Vec2::new(x as f32, y as f32);
                if in_triangle(&triangle.points, p) {
                    buffer.set_pixel_with_depth(x, y, triangle.depth, triangle.color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::Surface;

    const RED: u32 = 0xFFFF0000;
    const BLUE: u32 = 0xFF0000FF;

    fn surfaces(width: u32, height: u32) -> (Surface, Surface) {
        let color = Surface::new(width, height).unwrap();
        let mut depth = Surface::new(width, height).unwrap();
        depth.clear(u32::MAX);
        (color, depth)
    }

    /// Clockwise on screen (rows grow downwards), so it passes the test.
    fn square_half(depth: u32, color: u32) -> Triangle {
        Triangle::new(
            [
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, 9.0),
                Vec2::new(9.0, 1.0),
            ],
            depth,
            color,
        )
    }

    #[test]
    fn counter_clockwise_triangle_excludes_interior() {
        let ccw = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        assert!(!in_triangle(&ccw, Vec2::new(0.25, 0.25)));
    }

    #[test]
    fn clockwise_triangle_includes_interior() {
        let cw = [Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)];
        assert!(in_triangle(&cw, Vec2::new(0.25, 0.25)));
        assert!(!in_triangle(&cw, Vec2::new(0.75, 0.75)));
    }

    #[test]
    fn points_on_edges_are_outside() {
        let cw = [Vec2::new(0.0, 0.0), Vec2::new(0.0, 4.0), Vec2::new(4.0, 0.0)];
        assert!(!in_triangle(&cw, Vec2::new(0.0, 2.0)));
        assert!(!in_triangle(&cw, Vec2::new(2.0, 0.0)));
        assert!(!in_triangle(&cw, Vec2::new(2.0, 2.0)));
        assert!(!in_triangle(&cw, Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn edge_sign_follows_side() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(4.0, 0.0);
        assert!(edge(a, b, Vec2::new(1.0, 1.0)) > 0.0);
        assert!(edge(a, b, Vec2::new(1.0, -1.0)) < 0.0);
        assert_eq!(edge(a, b, Vec2::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn bounding_box_is_clamped() {
        let points = [
            Vec2::new(-5.5, 2.2),
            Vec2::new(3.1, -7.0),
            Vec2::new(20.0, 4.9),
        ];
        let bbox = BoundingBox::clamped(&points, 10, 8).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                min_x: 0,
                min_y: 0,
                max_x: 9,
                max_y: 5
            }
        );
    }

    #[test]
    fn off_surface_triangle_has_no_box() {
        let points = [
            Vec2::new(-10.0, -10.0),
            Vec2::new(-10.0, -2.0),
            Vec2::new(-2.0, -10.0),
        ];
        assert_eq!(BoundingBox::clamped(&points, 10, 10), None);
        assert_eq!(BoundingBox::clamped(&points, 0, 0), None);
    }

    #[test]
    fn fills_interior_pixels_only() {
        let (mut color, mut depth) = surfaces(12, 12);
        let mut fb = FrameBuffer::new(&mut color, &mut depth);
        EdgeFunctionRasterizer::new().fill_triangle(&square_half(10, RED), &mut fb);

        assert_eq!(fb.get_pixel(2, 2), Some(RED));
        assert_eq!(fb.get_depth(2, 2), Some(10));
        // Vertex and edge pixels sit exactly on an edge.
        assert_eq!(fb.get_pixel(1, 1), Some(0));
        assert_eq!(fb.get_pixel(1, 5), Some(0));
        // Beyond the hypotenuse.
        assert_eq!(fb.get_pixel(8, 8), Some(0));
        assert_eq!(fb.get_depth(8, 8), Some(u32::MAX));
    }

    #[test]
    fn reversed_winding_draws_nothing() {
        let (mut color, mut depth) = surfaces(12, 12);
        let mut fb = FrameBuffer::new(&mut color, &mut depth);
        let mut triangle = square_half(10, RED);
        triangle.points.swap(1, 2);
        EdgeFunctionRasterizer::new().fill_triangle(&triangle, &mut fb);

        assert!(color.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn nearer_triangle_wins_in_either_order() {
        let rasterizer = EdgeFunctionRasterizer::new();
        for order in [[100, 200], [200, 100]] {
            let (mut color, mut depth) = surfaces(12, 12);
            let mut fb = FrameBuffer::new(&mut color, &mut depth);
            for d in order {
                let c = if d == 100 { RED } else { BLUE };
                rasterizer.fill_triangle(&square_half(d, c), &mut fb);
            }
            assert_eq!(fb.get_pixel(3, 3), Some(RED));
            assert_eq!(fb.get_depth(3, 3), Some(100));
        }
    }

    #[test]
    fn partially_off_surface_triangle_is_clipped_by_box() {
        let (mut color, mut depth) = surfaces(8, 8);
        let mut fb = FrameBuffer::new(&mut color, &mut depth);
        let triangle = Triangle::new(
            [
                Vec2::new(-20.0, -20.0),
                Vec2::new(-20.0, 40.0),
                Vec2::new(40.0, -20.0),
            ],
            1,
            RED,
        );
        EdgeFunctionRasterizer::new().fill_triangle(&triangle, &mut fb);

        assert_eq!(fb.get_pixel(0, 0), Some(RED));
        assert_eq!(fb.get_pixel(7, 7), Some(RED));
    }
}
