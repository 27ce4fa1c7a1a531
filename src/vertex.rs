// vertex.rs
use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// One point of a mesh, laid out tightly for direct GPU upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from(self.normal)
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            color: [1.0, 1.0, 1.0],
            normal: [0.0, 0.0, 0.0],
            uv: [1.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vertex_is_white_with_unset_uv() {
        let v = Vertex::default();
        assert_eq!(v.color, [1.0, 1.0, 1.0]);
        assert_eq!(v.normal, [0.0, 0.0, 0.0]);
        assert_eq!(v.uv, [1.0, 1.0]);
    }

    #[test]
    fn layout_is_eleven_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 11 * 4);
    }
}
