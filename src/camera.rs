// camera.rs
use glam::{Mat4, Vec3};

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Perspective,
    Orthographic,
}

/// Per-frame input, captured by the windowing layer and consumed exactly
/// once per tick. Edge-triggered actions (the projection toggle) are
/// one-shot flags the capturer sets for a single snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputSnapshot {
    pub move_fwd: bool,
    pub move_back: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub toggle_projection: bool,
    pub mouse_delta: (f32, f32),
    pub scroll_delta: f32,
}

/// Fly camera: yaw/pitch look direction, planar WASD movement, vertical
/// Q/E movement, scroll-adjustable speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub aspect: f32,
    pub projection: Projection,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 1.0, 3.0),
            yaw: -90.0f32.to_radians(),
            pitch: 0.0,
            speed: 2.5,
            aspect,
            projection: Projection::Perspective,
        }
    }

    pub fn forward(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.eye + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective => Mat4::perspective_rh(
                config::FOV_Y.to_radians(),
                self.aspect,
                config::Z_NEAR,
                config::Z_FAR,
            ),
            Projection::Orthographic => Mat4::orthographic_rh(
                -self.aspect,
                self.aspect,
                -1.0,
                1.0,
                config::Z_NEAR,
                config::Z_FAR,
            ),
        }
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn toggle_projection(&mut self) {
        self.projection = match self.projection {
            Projection::Perspective => Projection::Orthographic,
            Projection::Orthographic => Projection::Perspective,
        };
    }

    /// Applies one polled snapshot. Movement scales with `dt` seconds;
    /// look and scroll deltas are already per-snapshot.
    pub fn apply(&mut self, input: &InputSnapshot, dt: f32) {
        let (dx, dy) = input.mouse_delta;
        self.yaw += dx.to_radians() * config::MOUSE_SENSITIVITY;
        // Inverted y: moving the mouse up looks up.
        self.pitch -= dy.to_radians() * config::MOUSE_SENSITIVITY;
        let pitch_limit = 89.0f32.to_radians();
        self.pitch = self.pitch.clamp(-pitch_limit, pitch_limit);

        self.speed = (self.speed + input.scroll_delta)
            .clamp(config::MIN_MOVE_SPEED, config::MAX_MOVE_SPEED);

        let forward = self.forward();
        let right = forward.cross(Vec3::Y).normalize();
        let step = self.speed * dt;

        if input.move_fwd {
            self.eye += forward * step;
        }
        if input.move_back {
            self.eye -= forward * step;
        }
        if input.move_left {
            self.eye -= right * step;
        }
        if input.move_right {
            self.eye += right * step;
        }
        if input.move_up {
            self.eye += Vec3::Y * step;
        }
        if input.move_down {
            self.eye -= Vec3::Y * step;
        }

        if input.toggle_projection {
            self.toggle_projection();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_points_down_negative_z_at_rest() {
        let camera = Camera::new(4.0 / 3.0);
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn movement_scales_with_speed_and_dt() {
        let mut camera = Camera::new(1.0);
        let start = camera.eye;
        let input = InputSnapshot {
            move_fwd: true,
            ..InputSnapshot::default()
        };
        camera.apply(&input, 0.5);
        let moved = (camera.eye - start).length();
        assert!((moved - camera.speed * 0.5).abs() < 1e-5);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::new(1.0);
        let input = InputSnapshot {
            mouse_delta: (0.0, -100_000.0),
            ..InputSnapshot::default()
        };
        camera.apply(&input, 0.016);
        assert!(camera.pitch <= 89.0f32.to_radians() + 1e-6);
    }

    #[test]
    fn speed_is_clamped_to_range() {
        let mut camera = Camera::new(1.0);
        camera.apply(
            &InputSnapshot { scroll_delta: 100.0, ..InputSnapshot::default() },
            0.016,
        );
        assert_eq!(camera.speed, config::MAX_MOVE_SPEED);
        camera.apply(
            &InputSnapshot { scroll_delta: -100.0, ..InputSnapshot::default() },
            0.016,
        );
        assert_eq!(camera.speed, config::MIN_MOVE_SPEED);
    }

    #[test]
    fn projection_toggle_round_trips() {
        let mut camera = Camera::new(1.0);
        assert_eq!(camera.projection, Projection::Perspective);
        let toggle = InputSnapshot { toggle_projection: true, ..InputSnapshot::default() };
        camera.apply(&toggle, 0.016);
        assert_eq!(camera.projection, Projection::Orthographic);
        camera.apply(&toggle, 0.016);
        assert_eq!(camera.projection, Projection::Perspective);
    }
}
