// mesh.rs
use glam::Vec3;

use crate::vertex::Vertex;

/// CPU-side geometry: an ordered vertex list plus triangle indices into it.
/// Indices are consumed in groups of three with counter-clockwise winding.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Structural invariants: every index in bounds, index count a multiple
    /// of three. Generated meshes always satisfy this; tests lean on it.
    pub fn is_well_formed(&self) -> bool {
        let count = self.vertex_count();
        self.indices.len() % 3 == 0 && self.indices.iter().all(|&i| i < count)
    }

    /// Appends `other` translated by `offset`, rebasing its indices past the
    /// vertices already present.
    pub fn append_translated(&mut self, other: &MeshData, offset: Vec3) {
        let base = self.vertex_count();
        self.vertices
            .extend(compose_vertices(&[], &other.vertices, offset));
        self.indices
            .extend(other.indices.iter().map(|&i| i + base));
    }

    /// Pairwise composition: `base` as-is, `top` translated by `offset` with
    /// its indices rebased by `base`'s vertex count.
    pub fn composed(base: &MeshData, top: &MeshData, offset: Vec3) -> MeshData {
        MeshData {
            vertices: compose_vertices(&base.vertices, &top.vertices, offset),
            indices: compose_indices(&base.indices, &top.indices, base.vertex_count()),
        }
    }
}

/// `a` followed by `b`, each `b` vertex translated by `offset`.
pub fn compose_vertices(a: &[Vertex], b: &[Vertex], offset: Vec3) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend(b.iter().map(|v| {
        let mut v = *v;
        v.position = (v.position() + offset).to_array();
        v
    }));
    out
}

/// `a` followed by `b`, each `b` index incremented by `vertex_offset`.
/// `vertex_offset` must equal the vertex count of the mesh `a` indexes into.
pub fn compose_indices(a: &[u32], b: &[u32], vertex_offset: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend(b.iter().map(|&i| i + vertex_offset));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    fn quad() -> MeshData {
        let v = |x: f32, z: f32| {
            Vertex::new(
                Vec3::new(x, 0.0, z),
                Vec3::ONE,
                Vec3::Y,
                Vec2::new(x, z),
            )
        };
        MeshData::new(
            vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    #[test]
    fn composed_concatenates_vertices() {
        let a = quad();
        let b = quad();
        let out = MeshData::composed(&a, &b, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(out.vertices.len(), a.vertices.len() + b.vertices.len());
        assert_eq!(out.indices.len(), a.indices.len() + b.indices.len());
        assert!(out.is_well_formed());
    }

    #[test]
    fn composed_rebases_second_mesh_indices() {
        let a = quad();
        let b = quad();
        let out = MeshData::composed(&a, &b, Vec3::ZERO);
        for (rebased, original) in out.indices[a.indices.len()..].iter().zip(&b.indices) {
            assert_eq!(*rebased, original + a.vertex_count());
        }
    }

    #[test]
    fn composed_translates_second_mesh_only() {
        let a = quad();
        let b = quad();
        let lift = Vec3::new(0.0, 2.0, 0.0);
        let out = MeshData::composed(&a, &b, lift);
        for i in 0..a.vertices.len() {
            assert_eq!(out.vertices[i], a.vertices[i]);
        }
        for i in 0..b.vertices.len() {
            let moved = out.vertices[a.vertices.len() + i];
            assert_eq!(moved.position(), b.vertices[i].position() + lift);
            // Attributes other than position are untouched.
            assert_eq!(moved.normal, b.vertices[i].normal);
            assert_eq!(moved.uv, b.vertices[i].uv);
        }
    }

    #[test]
    fn append_translated_matches_composed() {
        let a = quad();
        let b = quad();
        let lift = Vec3::new(0.5, 0.0, -0.5);
        let mut appended = a.clone();
        appended.append_translated(&b, lift);
        assert_eq!(appended, MeshData::composed(&a, &b, lift));
    }

    #[test]
    fn well_formed_catches_out_of_bounds_index() {
        let mut m = quad();
        assert!(m.is_well_formed());
        m.indices.push(99);
        assert!(!m.is_well_formed());
        m.indices.truncate(6);
        m.indices.push(0);
        assert!(!m.is_well_formed()); // not a multiple of three
    }
}
