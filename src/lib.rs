//! A CPU-based software rasterizer for a grid of spinning cubes.
//!
//! Vertices are rotated, translated, perspective-divided and mapped to
//! pixels, then every triangle is filled with an edge-function test and a
//! per-pixel depth comparison. SDL2 is used only to show the result.
//!
//! # Quick Start
//!
//! ```ignore
//! use softraster::prelude::*;
//!
//! let mut engine = Engine::new(500, 500)?;
//! if let Some(frame) = engine.tick() {
//!     present(frame.bytes, frame.pitch);
//! }
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod engine;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod scene;
pub mod snapshot;
pub mod transform;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use config::RenderConfig;
pub use engine::{Engine, FrameState};
pub use mesh::{Mesh, MeshError};
pub use render::{Surface, SurfaceError, SurfaceView};
pub use scene::{Instance, Scene};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softraster::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::config::RenderConfig;
    pub use crate::engine::{Engine, FrameState};

    // Scene
    pub use crate::mesh::Mesh;
    pub use crate::scene::{Instance, Scene};

    // Math
    pub use crate::math::{Vec2, Vec2i, Vec3};
    pub use crate::projection::{project, to_screen};
    pub use crate::transform::{rotate, translate};

    // Surfaces
    pub use crate::render::{Surface, SurfaceView};

    // Window
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        edge, in_triangle, BoundingBox, EdgeFunctionRasterizer, FrameBuffer, Rasterizer, Surface,
        Triangle,
    };
}
