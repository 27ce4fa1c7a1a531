// props.rs
//
// Hand-authored geometry for the static props: the ground plane, the quartz
// pyramid, and the elongated sponge box. These are data tables, not derived
// shapes; normals and UV regions were authored per face.
use crate::mesh::MeshData;
use crate::vertex::Vertex;

const UP: [f32; 3] = [0.0, 1.0, 0.0];
const DOWN: [f32; 3] = [0.0, -1.0, 0.0];

const PLANE_COLOR: [f32; 3] = [0.7, 0.5, 0.3];
const SPONGE_COLOR: [f32; 3] = [0.7, 0.5, 0.7];

// 10x10 ground plane at y = -0.5, two unindexed-style triangles with the
// shared edge duplicated.
const PLANE_VERTICES: [Vertex; 6] = [
    Vertex { position: [-5.0, -0.5,  5.0], color: PLANE_COLOR, normal: UP, uv: [0.0, 0.0] },
    Vertex { position: [ 5.0, -0.5,  5.0], color: PLANE_COLOR, normal: UP, uv: [1.0, 0.0] },
    Vertex { position: [ 5.0, -0.5, -5.0], color: PLANE_COLOR, normal: UP, uv: [1.0, 1.0] },
    Vertex { position: [ 5.0, -0.5, -5.0], color: PLANE_COLOR, normal: UP, uv: [1.0, 1.0] },
    Vertex { position: [-5.0, -0.5, -5.0], color: PLANE_COLOR, normal: UP, uv: [0.0, 1.0] },
    Vertex { position: [-5.0, -0.5,  5.0], color: PLANE_COLOR, normal: UP, uv: [0.0, 0.0] },
];

const PLANE_INDICES: [u32; 6] = [0, 1, 2, 3, 4, 5];

// Four side faces with flat (deliberately non-normalized) slope normals and
// distinct UV regions, plus a quad base. The apex vertex is repeated per
// face so each face keeps its own normal.
const PYRAMID_VERTICES: [Vertex; 16] = [
    // Front face
    Vertex { position: [-0.5, -0.5,  0.5], color: [1.0, 0.5, 0.5], normal: [ 0.0,  0.0,  1.0], uv: [0.2, 0.7] },
    Vertex { position: [ 0.5, -0.5,  0.5], color: [0.5, 1.0, 0.5], normal: [ 0.0,  0.0,  1.0], uv: [0.7, 0.7] },
    Vertex { position: [ 0.0,  0.5,  0.0], color: [1.0, 0.0, 1.0], normal: [ 0.0,  0.0,  1.0], uv: [0.5, 0.2] },
    // Right face
    Vertex { position: [ 0.5, -0.5,  0.5], color: [0.5, 1.0, 0.5], normal: [ 0.5,  0.5,  0.0], uv: [0.7, 0.7] },
    Vertex { position: [ 0.5, -0.5, -0.5], color: [0.5, 0.5, 1.0], normal: [ 0.5,  0.5,  0.0], uv: [1.0, 0.7] },
    Vertex { position: [ 0.0,  0.5,  0.0], color: [1.0, 0.0, 1.0], normal: [ 0.5,  0.5,  0.0], uv: [0.8, 0.2] },
    // Back face
    Vertex { position: [ 0.5, -0.5, -0.5], color: [0.5, 0.5, 1.0], normal: [ 0.0,  0.0, -1.0], uv: [0.7, 0.2] },
    Vertex { position: [-0.5, -0.5, -0.5], color: [1.0, 1.0, 0.5], normal: [ 0.0,  0.0, -1.0], uv: [0.5, 0.2] },
    Vertex { position: [ 0.0,  0.5,  0.0], color: [1.0, 0.0, 1.0], normal: [ 0.0,  0.0, -1.0], uv: [0.6, 0.0] },
    // Left face
    Vertex { position: [-0.5, -0.5, -0.5], color: [1.0, 1.0, 0.5], normal: [-0.5,  0.5,  0.0], uv: [0.2, 0.2] },
    Vertex { position: [-0.5, -0.5,  0.5], color: [1.0, 0.5, 0.5], normal: [-0.5,  0.5,  0.0], uv: [0.5, 0.2] },
    Vertex { position: [ 0.0,  0.5,  0.0], color: [1.0, 0.0, 1.0], normal: [-0.5,  0.5,  0.0], uv: [0.3, 0.0] },
    // Base
    Vertex { position: [-0.5, -0.5,  0.5], color: [1.0, 0.0, 0.0], normal: DOWN, uv: [0.0, 1.0] },
    Vertex { position: [ 0.5, -0.5,  0.5], color: [0.0, 1.0, 0.0], normal: DOWN, uv: [1.0, 1.0] },
    Vertex { position: [ 0.5, -0.5, -0.5], color: [1.0, 0.0, 1.0], normal: DOWN, uv: [1.0, 0.0] },
    Vertex { position: [-0.5, -0.5, -0.5], color: [1.0, 1.0, 0.0], normal: DOWN, uv: [0.0, 0.0] },
];

const PYRAMID_INDICES: [u32; 18] = [
    0, 1, 2, // front
    3, 4, 5, // right
    6, 7, 8, // back
    9, 10, 11, // left
    12, 13, 14, // base
    14, 15, 12,
];

// Elongated box (2.0 x 0.5 x 1.5), four vertices per face so every face has
// its own flat normal and full UV quad.
const SPONGE_VERTICES: [Vertex; 24] = [
    // Front face
    Vertex { position: [-1.0,  0.25,  0.75], color: SPONGE_COLOR, normal: [ 0.0,  0.0,  1.0], uv: [0.0, 1.0] },
    Vertex { position: [-1.0, -0.25,  0.75], color: SPONGE_COLOR, normal: [ 0.0,  0.0,  1.0], uv: [0.0, 0.0] },
    Vertex { position: [ 1.0, -0.25,  0.75], color: SPONGE_COLOR, normal: [ 0.0,  0.0,  1.0], uv: [1.0, 0.0] },
    Vertex { position: [ 1.0,  0.25,  0.75], color: SPONGE_COLOR, normal: [ 0.0,  0.0,  1.0], uv: [1.0, 1.0] },
    // Right face
    Vertex { position: [ 1.0,  0.25,  0.75], color: SPONGE_COLOR, normal: [ 1.0,  0.0,  0.0], uv: [0.0, 1.0] },
    Vertex { position: [ 1.0, -0.25,  0.75], color: SPONGE_COLOR, normal: [ 1.0,  0.0,  0.0], uv: [0.0, 0.0] },
    Vertex { position: [ 1.0, -0.25, -0.75], color: SPONGE_COLOR, normal: [ 1.0,  0.0,  0.0], uv: [1.0, 0.0] },
    Vertex { position: [ 1.0,  0.25, -0.75], color: SPONGE_COLOR, normal: [ 1.0,  0.0,  0.0], uv: [1.0, 1.0] },
    // Back face
    Vertex { position: [ 1.0,  0.25, -0.75], color: SPONGE_COLOR, normal: [ 0.0,  0.0, -1.0], uv: [1.0, 1.0] },
    Vertex { position: [ 1.0, -0.25, -0.75], color: SPONGE_COLOR, normal: [ 0.0,  0.0, -1.0], uv: [1.0, 0.0] },
    Vertex { position: [-1.0, -0.25, -0.75], color: SPONGE_COLOR, normal: [ 0.0,  0.0, -1.0], uv: [0.0, 0.0] },
    Vertex { position: [-1.0,  0.25, -0.75], color: SPONGE_COLOR, normal: [ 0.0,  0.0, -1.0], uv: [0.0, 1.0] },
    // Left face
    Vertex { position: [-1.0,  0.25, -0.75], color: SPONGE_COLOR, normal: [-1.0,  0.0,  0.0], uv: [1.0, 1.0] },
    Vertex { position: [-1.0, -0.25, -0.75], color: SPONGE_COLOR, normal: [-1.0,  0.0,  0.0], uv: [1.0, 0.0] },
    Vertex { position: [-1.0, -0.25,  0.75], color: SPONGE_COLOR, normal: [-1.0,  0.0,  0.0], uv: [0.0, 0.0] },
    Vertex { position: [-1.0,  0.25,  0.75], color: SPONGE_COLOR, normal: [-1.0,  0.0,  0.0], uv: [0.0, 1.0] },
    // Top face
    Vertex { position: [-1.0,  0.25, -0.75], color: SPONGE_COLOR, normal: UP, uv: [0.0, 1.0] },
    Vertex { position: [-1.0,  0.25,  0.75], color: SPONGE_COLOR, normal: UP, uv: [0.0, 0.0] },
    Vertex { position: [ 1.0,  0.25,  0.75], color: SPONGE_COLOR, normal: UP, uv: [1.0, 0.0] },
    Vertex { position: [ 1.0,  0.25, -0.75], color: SPONGE_COLOR, normal: UP, uv: [1.0, 1.0] },
    // Bottom face
    Vertex { position: [ 1.0, -0.25,  0.75], color: SPONGE_COLOR, normal: DOWN, uv: [1.0, 0.0] },
    Vertex { position: [ 1.0, -0.25, -0.75], color: SPONGE_COLOR, normal: DOWN, uv: [1.0, 1.0] },
    Vertex { position: [-1.0, -0.25, -0.75], color: SPONGE_COLOR, normal: DOWN, uv: [0.0, 1.0] },
    Vertex { position: [-1.0, -0.25,  0.75], color: SPONGE_COLOR, normal: DOWN, uv: [0.0, 0.0] },
];

const SPONGE_INDICES: [u32; 36] = [
    0, 1, 2, 0, 2, 3, // front
    4, 5, 6, 4, 6, 7, // right
    8, 9, 10, 8, 10, 11, // back
    12, 13, 14, 12, 14, 15, // left
    16, 17, 18, 16, 18, 19, // top
    20, 21, 22, 20, 22, 23, // bottom
];

pub fn ground_plane() -> MeshData {
    MeshData::new(PLANE_VERTICES.to_vec(), PLANE_INDICES.to_vec())
}

pub fn pyramid() -> MeshData {
    MeshData::new(PYRAMID_VERTICES.to_vec(), PYRAMID_INDICES.to_vec())
}

pub fn sponge() -> MeshData {
    MeshData::new(SPONGE_VERTICES.to_vec(), SPONGE_INDICES.to_vec())
}
