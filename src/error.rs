// error.rs
use thiserror::Error;

/// Geometry generation rejects bad shape parameters up front instead of
/// emitting degenerate meshes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid parameter `{name}` = {value} ({expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

pub(crate) fn check_positive(name: &'static str, value: f32) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidParameter {
            name,
            value: value as f64,
            expected: "must be finite and > 0",
        })
    }
}

pub(crate) fn check_segments(name: &'static str, value: u32) -> Result<(), GeometryError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(GeometryError::InvalidParameter {
            name,
            value: value as f64,
            expected: "must be >= 1",
        })
    }
}
