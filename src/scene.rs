// scene.rs
use glam::{Mat4, Quat, Vec3};

use crate::camera::{Camera, InputSnapshot};
use crate::config::SceneConfig;
use crate::error::GeometryError;
use crate::mesh::MeshData;
use crate::{primitives, props};

/// One placed object: geometry, its model transform, and the texture slot
/// the backend should bind when drawing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub name: &'static str,
    pub mesh: MeshData,
    pub transform: Mat4,
    pub texture: &'static str,
}

/// Directional key light, premultiplied by its intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLight {
    pub direction: Vec3,
    pub color: Vec3,
}

impl Default for KeyLight {
    fn default() -> Self {
        let intensity = 1.5;
        Self {
            direction: Vec3::new(0.0, 0.3, 0.3),
            color: Vec3::new(1.0, 0.9, 0.8) * intensity,
        }
    }
}

/// The whole viewable scene: camera, light, and the four placed props.
/// Built explicitly at startup from a validated config; geometry is never
/// regenerated after that.
pub struct Scene {
    pub camera: Camera,
    pub key_light: KeyLight,
    pub props: Vec<Prop>,
}

impl Scene {
    pub fn new(config: &SceneConfig, aspect: f32) -> Result<Self, GeometryError> {
        config.validate()?;

        let makeup_item = primitives::makeup_item(config)?;

        let pyramid_scale = 0.6;
        let pyramid_transform = Mat4::from_translation(Vec3::new(
            0.5,
            -0.5 + pyramid_scale / 2.0,
            0.5,
        )) * Mat4::from_scale(Vec3::splat(pyramid_scale));

        let sponge_scale = 0.5;
        let sponge_transform = Mat4::from_scale_rotation_translation(
            Vec3::splat(sponge_scale),
            Quat::from_rotation_y(125.0f32.to_radians()),
            Vec3::new(-1.0, -0.5 + 0.25 * sponge_scale, 0.5),
        );

        let props = vec![
            Prop {
                name: "makeup item",
                mesh: makeup_item,
                transform: Mat4::from_translation(Vec3::new(1.5, 0.0, 0.0)),
                texture: "silver",
            },
            Prop {
                name: "ground plane",
                mesh: props::ground_plane(),
                transform: Mat4::IDENTITY,
                texture: "woodtiles",
            },
            Prop {
                name: "pyramid",
                mesh: props::pyramid(),
                transform: pyramid_transform,
                texture: "quartz",
            },
            Prop {
                name: "sponge",
                mesh: props::sponge(),
                transform: sponge_transform,
                texture: "sponge",
            },
        ];

        for prop in &props {
            debug_assert!(prop.mesh.is_well_formed());
            log::info!(
                "prop '{}': {} vertices, {} triangles",
                prop.name,
                prop.mesh.vertex_count(),
                prop.mesh.triangle_count()
            );
        }

        Ok(Self {
            camera: Camera::new(aspect),
            key_light: KeyLight::default(),
            props,
        })
    }

    /// Advances one frame with the polled input snapshot.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) {
        self.camera.apply(input, dt);
    }
}
