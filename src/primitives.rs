// primitives.rs
//
// Parametric generators for the makeup item: a UV sphere (the cap) fused on
// top of a capped cylinder (the body). Pure functions of their parameters;
// the same inputs always produce the same buffers.
use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::config::SceneConfig;
use crate::error::{GeometryError, check_positive, check_segments};
use crate::mesh::MeshData;
use crate::vertex::Vertex;

pub const SPHERE_COLOR: Vec3 = Vec3::new(0.75, 0.75, 0.75);
pub const CYLINDER_COLOR: Vec3 = Vec3::new(0.9, 0.5, 0.55);

// The source texture keeps the silver cap material in its top quarter, so
// parametric shapes compress their V range into [0, 0.25] for cap regions.
const CAP_V: f32 = 0.25;

/// `(segments + 1)^2` vertices over a longitude/latitude grid, latitude-major.
pub fn sphere_vertices(radius: f32, segments: u32) -> Result<Vec<Vertex>, GeometryError> {
    check_positive("sphere_radius", radius)?;
    check_segments("sphere_segments", segments)?;

    let span = segments as f32;
    let mut vertices = Vec::with_capacity(((segments + 1) * (segments + 1)) as usize);
    for y in 0..=segments {
        for x in 0..=segments {
            let u = x as f32 / span;
            let v = y as f32 / span;

            let direction = Vec3::new(
                (u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );

            vertices.push(Vertex::new(
                direction * radius,
                SPHERE_COLOR,
                direction.normalize(),
                Vec2::new(u, v * CAP_V),
            ));
        }
    }
    Ok(vertices)
}

/// Two triangles per grid quad, `segments^2 * 6` indices total.
pub fn sphere_indices(segments: u32) -> Result<Vec<u32>, GeometryError> {
    check_segments("sphere_segments", segments)?;

    let ring = segments + 1;
    let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
    for y in 0..segments {
        for x in 0..segments {
            let top_left = (y + 1) * ring + x;
            let bottom_left = y * ring + x;
            let top_right = top_left + 1;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[
                top_left,
                bottom_left,
                top_right,
                bottom_left,
                bottom_right,
                top_right,
            ]);
        }
    }
    Ok(indices)
}

pub fn sphere(radius: f32, segments: u32) -> Result<MeshData, GeometryError> {
    Ok(MeshData::new(
        sphere_vertices(radius, segments)?,
        sphere_indices(segments)?,
    ))
}

/// `2 * (segments + 1)` vertices: the full top rim at indices
/// `0..=segments`, then the full bottom rim. Each rim duplicates its seam
/// vertex (angle 0 and 2π), and that duplicate doubles as the cap fan apex.
/// Rims share the side normal, so cap lighting is faceted rather than flat.
pub fn cylinder_vertices(
    radius: f32,
    height: f32,
    segments: u32,
) -> Result<Vec<Vertex>, GeometryError> {
    check_positive("cylinder_radius", radius)?;
    check_positive("cylinder_height", height)?;
    check_segments("cylinder_segments", segments)?;

    let span = segments as f32;
    let mut vertices = Vec::with_capacity((2 * (segments + 1)) as usize);
    for (rim_y, rim_v) in [(height / 2.0, CAP_V), (-height / 2.0, 1.0)] {
        for i in 0..=segments {
            let angle = i as f32 / span * TAU;
            let u = i as f32 / span;
            let side = Vec3::new(angle.cos(), 0.0, angle.sin());

            vertices.push(Vertex::new(
                Vec3::new(radius * angle.cos(), rim_y, radius * angle.sin()),
                CYLINDER_COLOR,
                side.normalize(),
                Vec2::new(u, rim_v),
            ));
        }
    }
    Ok(vertices)
}

/// Per step: one top-cap fan triangle, one bottom-cap fan triangle, and the
/// two side triangles of the quad between the rims. `segments * 12` indices.
pub fn cylinder_indices(segments: u32) -> Result<Vec<u32>, GeometryError> {
    check_segments("cylinder_segments", segments)?;

    let ring = segments + 1;
    // Both apexes are the seam duplicates, guaranteed to exist by the
    // vertex layout above.
    let top_apex = segments;
    let bottom_apex = 2 * segments + 1;

    let mut indices = Vec::with_capacity((segments * 12) as usize);
    for i in 0..segments {
        let next = (i + 1) % ring;

        indices.extend_from_slice(&[i, next, top_apex]);
        indices.extend_from_slice(&[ring + i, ring + next, bottom_apex]);

        indices.extend_from_slice(&[i, next, ring + i]);
        indices.extend_from_slice(&[next, ring + next, ring + i]);
    }
    Ok(indices)
}

pub fn cylinder(radius: f32, height: f32, segments: u32) -> Result<MeshData, GeometryError> {
    Ok(MeshData::new(
        cylinder_vertices(radius, height, segments)?,
        cylinder_indices(segments)?,
    ))
}

/// The fused body: sphere stacked on the cylinder along +Y, rebased into a
/// single buffer pair.
pub fn makeup_item(config: &SceneConfig) -> Result<MeshData, GeometryError> {
    let body = cylinder(
        config.cylinder_radius,
        config.cylinder_height,
        config.cylinder_segments,
    )?;
    let cap = sphere(config.sphere_radius, config.sphere_segments)?;

    let lift = Vec3::new(
        0.0,
        config.cylinder_height / 2.0 + config.sphere_radius * 0.5,
        0.0,
    );
    Ok(MeshData::composed(&body, &cap, lift))
}
