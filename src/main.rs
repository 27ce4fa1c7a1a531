use std::path::Path;
use std::process::ExitCode;

use vanity_scene::{Scene, SceneConfig};

// Builds the scene geometry and reports what a renderer would upload.
// Pass a JSON config path to override the default shape parameters.
fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SceneConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{path}: {e}; falling back to defaults");
                SceneConfig::default()
            }
        },
        None => SceneConfig::default(),
    };

    let scene = match Scene::new(&config, 800.0 / 600.0) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("invalid scene config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut total_vertices = 0u32;
    let mut total_triangles = 0usize;
    for prop in &scene.props {
        println!(
            "{:<14} {:>6} vertices {:>6} triangles",
            prop.name,
            prop.mesh.vertex_count(),
            prop.mesh.triangle_count()
        );
        total_vertices += prop.mesh.vertex_count();
        total_triangles += prop.mesh.triangle_count();
    }
    println!("{:<14} {total_vertices:>6} vertices {total_triangles:>6} triangles", "total");

    ExitCode::SUCCESS
}
