//! Procedural geometry and scene state for a small still-life viewer: a
//! fused sphere/cylinder makeup item, a ground plane, a pyramid, and an
//! elongated sponge box, arranged under a fly camera with a togglable
//! perspective/orthographic projection. Rendering itself happens behind the
//! [`backend::RenderBackend`] seam.

pub mod backend;
pub mod camera;
pub mod config;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod props;
pub mod scene;
pub mod vertex;

pub use config::SceneConfig;
pub use error::GeometryError;
pub use mesh::MeshData;
pub use scene::Scene;
pub use vertex::Vertex;
