// config.rs
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::{GeometryError, check_positive, check_segments};

// --- Rendering ---
pub const FOV_Y: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

// --- Camera feel ---
pub const MOUSE_SENSITIVITY: f32 = 0.1;
pub const MIN_MOVE_SPEED: f32 = 1.0;
pub const MAX_MOVE_SPEED: f32 = 10.0;

/// Shape parameters for the generated makeup item. The defaults reproduce
/// the reference scene; a JSON file can override any subset of them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub cylinder_radius: f32,
    pub cylinder_height: f32,
    pub cylinder_segments: u32,
    pub sphere_radius: f32,
    pub sphere_segments: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cylinder_radius: 0.1,
            cylinder_height: 1.0,
            cylinder_segments: 32,
            sphere_radius: 0.15,
            sphere_segments: 32,
        }
    }
}

impl SceneConfig {
    /// Rejects degenerate shape parameters before any geometry is generated.
    pub fn validate(&self) -> Result<(), GeometryError> {
        check_positive("cylinder_radius", self.cylinder_radius)?;
        check_positive("cylinder_height", self.cylinder_height)?;
        check_segments("cylinder_segments", self.cylinder_segments)?;
        check_positive("sphere_radius", self.sphere_radius)?;
        check_segments("sphere_segments", self.sphere_segments)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config: SceneConfig = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_the_reference_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.cylinder_radius, 0.1);
        assert_eq!(config.cylinder_height, 1.0);
        assert_eq!(config.cylinder_segments, 32);
        assert_eq!(config.sphere_radius, 0.15);
        assert_eq!(config.sphere_segments, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_overrides_fall_back_to_defaults() {
        let config: SceneConfig =
            serde_json::from_str(r#"{ "sphere_segments": 8 }"#).unwrap();
        assert_eq!(config.sphere_segments, 8);
        assert_eq!(config.cylinder_segments, 32);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<SceneConfig>(r#"{ "sphere_radious": 1.0 }"#).is_err());
    }

    #[test]
    fn validation_names_the_bad_parameter() {
        let config = SceneConfig {
            cylinder_segments: 0,
            ..SceneConfig::default()
        };
        match config.validate() {
            Err(GeometryError::InvalidParameter { name, .. }) => {
                assert_eq!(name, "cylinder_segments");
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}
