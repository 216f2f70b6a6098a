//! occlu - render the built-in scene and write every buffer to disk.
//!
//! Usage: occlu [OUTPUT_DIR] [CONFIG_JSON]
//!
//! `OUTPUT_DIR` defaults to `output`. `CONFIG_JSON` is an optional
//! `RenderConfig` in JSON; missing fields take their defaults.

use std::env;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use occlu_renderer::{render, save_all, RenderConfig};

mod scene;

fn load_config(path: Option<&str>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path))?;
    let config: RenderConfig =
        serde_json::from_str(&text).with_context(|| format!("Failed to parse config {}", path))?;
    log::info!("Loaded config from {}", path);
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let output_dir = args.get(1).map(String::as_str).unwrap_or("output");
    let config = load_config(args.get(2).map(String::as_str))?;
    config.validate().context("Invalid render configuration")?;

    log::info!(
        "occlu - render frame size: ({}, {})",
        config.width,
        config.height
    );

    let start = Instant::now();
    let world = scene::build_scene();
    log::info!("Scene built with {} surfaces in {:?}", world.len(), start.elapsed());

    let start = Instant::now();
    let output = render(&world, &config).context("Render failed")?;
    log::info!("Rendered in {:?}", start.elapsed());

    let written = save_all(&output, Path::new(output_dir), "png")
        .with_context(|| format!("Failed to export buffers to {}", output_dir))?;
    for path in &written {
        log::info!("Saved {}", path.display());
    }

    Ok(())
}
