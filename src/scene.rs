//! Mesh instances and the fixed cube-grid scene.

use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::transform::{rotate, translate};

/// Frames it takes for the animation angle to advance by one radian.
pub const FRAMES_PER_RADIAN: f32 = 1000.0;

/// Shared rotation for every instance at `frame`.
///
/// `angle = frame / 1000`, giving yaw `3 * angle`, pitch `angle`, no roll.
pub fn rotation_for_frame(frame: u32) -> Vec3 {
    let angle = frame as f32 / FRAMES_PER_RADIAN;
    Vec3::new(angle * 3.0, angle, 0.0)
}

/// One placement of a mesh for the current frame.
#[derive(Debug, Clone, Copy)]
pub struct Instance<'a> {
    pub mesh: &'a Mesh,
    /// Euler yaw/pitch/roll in radians.
    pub rotation: Vec3,
    pub translation: Vec3,
}

impl<'a> Instance<'a> {
    pub fn new(mesh: &'a Mesh, rotation: Vec3, translation: Vec3) -> Self {
        Self {
            mesh,
            rotation,
            translation,
        }
    }

    /// The mesh triangles with every vertex rotated about the origin, then
    /// translated.
    pub fn camera_space_triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + 'a {
        let mesh: &'a Mesh = self.mesh;
        let rotation = self.rotation;
        let translation = self.translation;
        mesh.triangles()
            .map(move |tri| tri.map(|v| translate(rotate(v, rotation), translation)))
    }
}

/// A fixed, ordered list of world offsets sharing one mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    translations: Vec<Vec3>,
}

impl Scene {
    pub fn new(translations: Vec<Vec3>) -> Self {
        Self { translations }
    }

    /// Nine cubes on a 3x3 grid in front of the camera. The middle one is
    /// nearest; corners sit furthest back.
    pub fn cube_grid() -> Self {
        Self::new(vec![
            Vec3::new(-1.5, -1.5, 4.0),
            Vec3::new(0.0, -1.5, 3.5),
            Vec3::new(1.5, -1.5, 4.0),
            Vec3::new(-1.5, 0.0, 3.5),
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(1.5, 0.0, 3.5),
            Vec3::new(-1.5, 1.5, 4.0),
            Vec3::new(0.0, 1.5, 3.5),
            Vec3::new(1.5, 1.5, 4.0),
        ])
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// One instance of `mesh` per translation, all sharing the frame's
    /// rotation.
    pub fn instances<'a>(
        &'a self,
        mesh: &'a Mesh,
        frame: u32,
    ) -> impl Iterator<Item = Instance<'a>> + 'a {
        let rotation = rotation_for_frame(frame);
        self.translations
            .iter()
            .map(move |&translation| Instance::new(mesh, rotation, translation))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::cube_grid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rotation_follows_frame_counter() {
        assert_eq!(rotation_for_frame(0), Vec3::ZERO);
        assert_relative_eq!(rotation_for_frame(500), Vec3::new(1.5, 0.5, 0.0));
        assert_relative_eq!(rotation_for_frame(1000), Vec3::new(3.0, 1.0, 0.0));
    }

    #[test]
    fn grid_has_nine_distinct_placements() {
        let scene = Scene::cube_grid();
        assert_eq!(scene.len(), 9);
        for (i, a) in scene.translations.iter().enumerate() {
            for b in &scene.translations[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_instance_stays_in_front_of_the_camera() {
        // A rotated unit cube reaches at most sqrt(3)/2 from its center.
        let reach = 3.0f32.sqrt() / 2.0;
        let mesh = Mesh::cube();
        let scene = Scene::cube_grid();
        for frame in [0, 777, 3142, 100_000] {
            for instance in scene.instances(&mesh, frame) {
                for v in instance.camera_space_triangles().flatten() {
                    assert!(v.z >= instance.translation.z - reach - 1e-5);
                    assert!(v.z > 0.0);
                }
            }
        }
    }

    #[test]
    fn instances_share_rotation() {
        let mesh = Mesh::cube();
        let scene = Scene::cube_grid();
        let instances: Vec<_> = scene.instances(&mesh, 1234).collect();
        assert_eq!(instances.len(), 9);
        for instance in &instances {
            assert_eq!(instance.rotation, rotation_for_frame(1234));
        }
    }

    #[test]
    fn unrotated_instance_is_translated_mesh() {
        let mesh = Mesh::cube();
        let instance = Instance::new(&mesh, Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
        let [first, ..] = instance.camera_space_triangles().next().unwrap();
        assert_eq!(first, Vec3::new(1.5, 1.5, 2.5));
        assert_eq!(instance.camera_space_triangles().count(), 12);
    }
}
