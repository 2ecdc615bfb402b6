//! Flat triangle-list meshes.
//!
//! A mesh is just its vertices taken three at a time. There is no index
//! buffer: every triangle owns its own three vertex copies, and the face
//! palette relies on that exact layout.

use std::fmt;

use crate::math::vec3::Vec3;

pub const CUBE_VERTEX_COUNT: usize = 36;

// Unit cube centered on the origin, 6 faces x 2 triangles. Each triangle is
// wound counter-clockwise seen from outside the cube, which after projection
// (rows growing downwards) reads clockwise on screen for faces that point at
// the camera. Face order matches `colors::FACE_PALETTE`.
pub const CUBE_VERTICES: [Vec3; CUBE_VERTEX_COUNT] = [
    // -Z
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    // +Z
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    // -X
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    // +X
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    // -Y
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    // +Y
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, 0.5),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The vertex list cannot be split into whole triangles.
    VertexCountNotMultipleOfThree(usize),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::VertexCountNotMultipleOfThree(n) => {
                write!(f, "mesh has {} vertices, expected a multiple of 3", n)
            }
        }
    }
}

impl std::error::Error for MeshError {}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
}

impl Mesh {
    pub fn from_vertices(vertices: Vec<Vec3>) -> Result<Self, MeshError> {
        if vertices.len() % 3 != 0 {
            return Err(MeshError::VertexCountNotMultipleOfThree(vertices.len()));
        }
        Ok(Self { vertices })
    }

    /// The unit cube from [`CUBE_VERTICES`].
    pub fn cube() -> Self {
        Self {
            vertices: CUBE_VERTICES.to_vec(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Consecutive vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }
}
