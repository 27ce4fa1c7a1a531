// backend.rs
use glam::{Mat4, Vec3};

use crate::mesh::MeshData;
use crate::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// The GPU side of the viewer. The geometry core hands over flat vertex and
/// index buffers; everything past that (buffer objects, shader programs,
/// texture decoding, the swapchain) lives behind this seam.
pub trait RenderBackend {
    fn upload_mesh(&mut self, name: &str, mesh: &MeshData) -> MeshHandle;
    fn set_uniform_mat4(&mut self, name: &str, value: Mat4);
    fn set_uniform_vec3(&mut self, name: &str, value: Vec3);
    fn bind_texture(&mut self, unit: u32, name: &str);
    fn draw_mesh(&mut self, handle: MeshHandle);
}

/// Uploads every prop once, in scene order. Handles pair with
/// `scene.props` by position.
pub fn upload_scene<B: RenderBackend>(backend: &mut B, scene: &Scene) -> Vec<MeshHandle> {
    scene
        .props
        .iter()
        .map(|prop| backend.upload_mesh(prop.name, &prop.mesh))
        .collect()
}

/// Draws one frame: camera and light uniforms first, then each prop with
/// its model transform and texture.
pub fn draw_scene<B: RenderBackend>(backend: &mut B, scene: &Scene, handles: &[MeshHandle]) {
    backend.set_uniform_mat4("projection", scene.camera.projection_matrix());
    backend.set_uniform_mat4("view", scene.camera.view_matrix());
    backend.set_uniform_vec3("keyLightDir", scene.key_light.direction);
    backend.set_uniform_vec3("keyLightColor", scene.key_light.color);
    backend.set_uniform_vec3("viewPos", scene.camera.eye);

    for (prop, handle) in scene.props.iter().zip(handles) {
        backend.set_uniform_mat4("model", prop.transform);
        backend.bind_texture(0, prop.texture);
        backend.draw_mesh(*handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;

    #[derive(Default)]
    struct RecordingBackend {
        uploads: Vec<(String, usize, usize)>,
        draws: Vec<MeshHandle>,
        textures: Vec<String>,
        uniforms: Vec<String>,
    }

    impl RenderBackend for RecordingBackend {
        fn upload_mesh(&mut self, name: &str, mesh: &MeshData) -> MeshHandle {
            self.uploads
                .push((name.to_owned(), mesh.vertices.len(), mesh.indices.len()));
            MeshHandle(self.uploads.len() as u32 - 1)
        }

        fn set_uniform_mat4(&mut self, name: &str, _value: Mat4) {
            self.uniforms.push(name.to_owned());
        }

        fn set_uniform_vec3(&mut self, name: &str, _value: Vec3) {
            self.uniforms.push(name.to_owned());
        }

        fn bind_texture(&mut self, _unit: u32, name: &str) {
            self.textures.push(name.to_owned());
        }

        fn draw_mesh(&mut self, handle: MeshHandle) {
            self.draws.push(handle);
        }
    }

    #[test]
    fn uploads_and_draws_every_prop_once() {
        let scene = Scene::new(&SceneConfig::default(), 1.0).unwrap();
        let mut backend = RecordingBackend::default();

        let handles = upload_scene(&mut backend, &scene);
        assert_eq!(handles.len(), scene.props.len());

        draw_scene(&mut backend, &scene, &handles);
        assert_eq!(backend.draws, handles);
        assert_eq!(backend.textures, ["silver", "woodtiles", "quartz", "sponge"]);
    }

    #[test]
    fn frame_uniforms_precede_per_prop_models() {
        let scene = Scene::new(&SceneConfig::default(), 1.0).unwrap();
        let mut backend = RecordingBackend::default();
        let handles = upload_scene(&mut backend, &scene);
        draw_scene(&mut backend, &scene, &handles);

        assert_eq!(
            &backend.uniforms[..5],
            ["projection", "view", "keyLightDir", "keyLightColor", "viewPos"]
        );
        assert_eq!(
            backend.uniforms[5..].iter().filter(|u| *u == "model").count(),
            scene.props.len()
        );
    }
}
