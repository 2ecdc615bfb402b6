//! Frame driver.
//!
//! The [`Engine`] owns the surfaces, the scene and the frame counter. The
//! window shell holds it by value and drives it through three calls:
//! [`Engine::on_resize`], [`Engine::on_close_requested`] and
//! [`Engine::tick`].

use log::{debug, info, trace};

use crate::colors;
use crate::config::RenderConfig;
use crate::math::{Vec2, Vec3};
use crate::mesh::Mesh;
use crate::projection::{project, to_screen};
use crate::render::{
    EdgeFunctionRasterizer, Rasterizer, Renderer, Surface, SurfaceError, SurfaceView, Triangle,
};
use crate::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameState {
    #[default]
    Running,
    /// Terminal. Entered only through [`Engine::on_close_requested`].
    Closed,
}

pub struct Engine {
    renderer: Renderer,
    rasterizer: EdgeFunctionRasterizer,
    triangles_to_render: Vec<Triangle>,
    markers_to_render: Vec<(Vec2, u32)>,
    camera_triangles: Vec<[Vec3; 3]>,
    mesh: Mesh,
    scene: Scene,
    config: RenderConfig,
    frame: u32,
    state: FrameState,
}

impl Engine {
    /// Allocates both surfaces and sets up the cube-grid scene.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Self::with_config(width, height, RenderConfig::default())
    }

    pub fn with_config(
        width: u32,
        height: u32,
        config: RenderConfig,
    ) -> Result<Self, SurfaceError> {
        let renderer = Renderer::new(width, height)?;
        debug!("allocated {}x{} color and depth surfaces", width, height);

        Ok(Self {
            renderer,
            rasterizer: EdgeFunctionRasterizer::new(),
            triangles_to_render: Vec::new(),
            markers_to_render: Vec::new(),
            camera_triangles: Vec::new(),
            mesh: Mesh::cube(),
            scene: Scene::cube_grid(),
            config,
            frame: 0,
            state: FrameState::Running,
        })
    }

    /// Replaces the mesh and the placements drawn every frame.
    pub fn set_scene(&mut self, mesh: Mesh, scene: Scene) {
        if scene.is_empty() {
            info!("scene has no instances; frames will show only the background");
        }
        debug!(
            "scene set: {} instances of {} triangles",
            scene.len(),
            mesh.triangle_count()
        );
        self.mesh = mesh;
        self.scene = scene;
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == FrameState::Running
    }

    /// Index of the frame the next [`tick`](Self::tick) renders.
    pub fn frame_index(&self) -> u32 {
        self.frame
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    pub fn color_surface(&self) -> &Surface {
        self.renderer.color_surface()
    }

    pub fn depth_surface(&self) -> &Surface {
        self.renderer.depth_surface()
    }

    /// The color surface as handed to the presenter.
    pub fn view(&self) -> SurfaceView<'_> {
        self.renderer.view()
    }

    /// Reallocates both surfaces at the new size, zero-filled.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.renderer.resize(width, height)?;
        info!("resized surfaces to {}x{}", width, height);
        Ok(())
    }

    pub fn on_close_requested(&mut self) {
        if self.state == FrameState::Running {
            info!("close requested after {} frames", self.frame);
            self.state = FrameState::Closed;
        }
    }

    /// Renders the current frame and advances the frame counter.
    ///
    /// Returns `None` without rendering once the engine is closed.
    pub fn tick(&mut self) -> Option<SurfaceView<'_>> {
        if self.state == FrameState::Closed {
            return None;
        }
        self.render_frame(self.frame);
        self.frame = self.frame.wrapping_add(1);
        Some(self.renderer.view())
    }

    /// Renders `frame` without touching the frame counter.
    pub fn render_frame(&mut self, frame: u32) {
        self.update(frame);
        self.render();
    }

    /// Transforms, projects and colors every instance's triangles for
    /// `frame`.
    pub fn update(&mut self, frame: u32) {
        let width = self.renderer.width();
        let height = self.renderer.height();
        let config = self.config;

        self.triangles_to_render.clear();
        self.markers_to_render.clear();

        for instance in self.scene.instances(&self.mesh, frame) {
            self.camera_triangles.clear();
            self.camera_triangles.extend(instance.camera_space_triangles());

            for (i, &camera) in self.camera_triangles.iter().enumerate() {
                // A vertex on the camera plane has no screen position.
                if camera.iter().any(|p| p.z == 0.0) {
                    continue;
                }

                let first = i * 3;
                let points = camera.map(|p| to_screen(width, height, project(p)));
                // The first vertex stands in for the whole triangle's depth.
                let z = camera[0].z;

                let mut color = colors::face_color(first);
                if config.depth_shading {
                    color = colors::modulate(color, colors::depth_brightness(z));
                }

                self.triangles_to_render
                    .push(Triangle::new(points, config.encode_depth(z), color));

                if config.show_vertices {
                    for (screen, vertex) in points.into_iter().zip(camera) {
                        let brightness = colors::depth_brightness(vertex.z);
                        self.markers_to_render
                            .push((screen, colors::modulate(colors::VERTEX, brightness)));
                    }
                }
            }
        }

        trace!(
            "frame {}: {} instances, {} triangles, {} markers",
            frame,
            self.scene.len(),
            self.triangles_to_render.len(),
            self.markers_to_render.len()
        );
    }

    /// Clears both surfaces and draws what [`update`](Self::update) built.
    pub fn render(&mut self) {
        self.renderer.clear(self.config.background);
        self.renderer.clear_depth(self.config.depth_far);

        let mut fb = self.renderer.as_framebuffer();
        for triangle in &self.triangles_to_render {
            self.rasterizer.fill_triangle(triangle, &mut fb);
        }

        for &(point, color) in &self.markers_to_render {
            self.renderer.draw_vertex_marker(point, color);
        }
    }
}
