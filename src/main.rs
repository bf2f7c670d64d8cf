//! Rotate Tensors - demo driver
//!
//! Loads configuration, runs the rotation filter over a synthetic stress bar
//! and logs the first rotated tensor of every new array.

use std::sync::Arc;

use rotate_tensors::config::AppConfig;
use rotate_tensors::demo::stress_bar;
use rotate_tensors::{AttributeData, AttributeSet, ROTATED_SUFFIX};

fn log_rotated(kind: &str, data: &AttributeData) {
    for (name, array) in data.iter().filter(|(name, _)| name.ends_with(ROTATED_SUFFIX)) {
        match array.as_tensors(name) {
            Ok(tensors) => match tensors.first() {
                Some(t) => log::info!("{} '{}' [0] = {:?}", kind, name, t.m),
                None => log::info!("{} '{}' is empty", kind, name),
            },
            Err(e) => log::warn!("{}", e),
        }
    }
}

fn main() {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mesh = stress_bar(config.demo.cells, config.demo.stress);
    log::info!("Demo mesh: {} points, {} cells, {} cell arrays, {} point arrays",
        mesh.num_points(), mesh.num_cells(), mesh.cell_data.len(), mesh.point_data.len());

    let mut filter = config.filter.build_filter();
    filter.set_input(Arc::new(mesh));

    match filter.update() {
        Ok(output) => {
            log_rotated("cell", &output.cell_data);
            log_rotated("point", &output.point_data);
        }
        Err(e) => {
            log::error!("Rotation failed: {}", e);
            std::process::exit(1);
        }
    }
}
