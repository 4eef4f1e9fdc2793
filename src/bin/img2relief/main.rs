// img2relief - Turn an image into a diorama displacement map
//
// Pipeline:
//   1. Load and decode the image
//   2. Generate the luminance height map
//   3. Downscale the colour texture to match
//   4. Export PNGs + scene manifest
//
// Usage:
//   cargo run --bin img2relief -- relief <image> [--out DIR] [--config FILE]
//   cargo run --bin img2relief -- placeholder [--out FILE] [--size N] [--seed N]

mod export;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use diorama_engine::{HeightMapConfig, Raster};
use diorama_engine::decode::open_raster;
use diorama_engine::heightmap::{bilinear_resize, generate_height_map};
use diorama_engine::stage::{DEFAULT_SEED, DEFAULT_SIZE, PanelLayout, placeholder_texture};

#[derive(Parser)]
#[command(name = "img2relief", about = "Image to diorama displacement map")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate height map, albedo texture and scene manifest
    Relief {
        image: PathBuf,
        /// Output directory (defaults to the image's directory)
        #[arg(long)]
        out: Option<PathBuf>,
        /// JSON file with max_dimension / exponent / epsilon
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        max_dimension: Option<u32>,
        #[arg(long)]
        exponent: Option<f32>,
        #[arg(long)]
        epsilon: Option<f32>,
    },
    /// Write the placeholder texture
    Placeholder {
        #[arg(long, default_value = "placeholder.png")]
        out: PathBuf,
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: u32,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u32,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Relief { image, out, config, max_dimension, exponent, epsilon } => {
            let file = config.map(|path| load_config(&path)).transpose()?;
            let cfg = merged_config(file, max_dimension, exponent, epsilon);

            let out_dir = out.unwrap_or_else(|| {
                image.parent().map(Path::to_path_buf).unwrap_or_default()
            });
            relief(&image, &out_dir, &cfg)
        }
        Command::Placeholder { out, size, seed } => {
            info!("Writing {}x{} placeholder to {}", size, size, out.display());
            export::write_png(&out, &placeholder_texture(size, seed))
        }
    }
}

fn load_config(path: &Path) -> Result<HeightMapConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: HeightMapConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

/// Flags win over the config file, which wins over the defaults
fn merged_config(
    file: Option<HeightMapConfig>,
    max_dimension: Option<u32>,
    exponent: Option<f32>,
    epsilon: Option<f32>,
) -> HeightMapConfig {
    let mut cfg = file.unwrap_or_default();
    if let Some(v) = max_dimension { cfg.max_dimension = v; }
    if let Some(v) = exponent { cfg.exponent = v; }
    if let Some(v) = epsilon { cfg.epsilon = v; }
    cfg
}

/// Colour texture resized to match the height map
fn matching_albedo(src: Raster, height: &Raster) -> Raster {
    if (height.width(), height.height()) == (src.width(), src.height()) {
        return src;
    }
    info!("  Resizing albedo to {}x{}...", height.width(), height.height());
    bilinear_resize(&src, height.width(), height.height())
}

fn relief(image: &Path, out_dir: &Path, cfg: &HeightMapConfig) -> Result<()> {
    info!("Processing {} (max {}px, exponent {}, epsilon {})", image.display(), cfg.max_dimension, cfg.exponent, cfg.epsilon);

    let src = open_raster(image).with_context(|| format!("loading {}", image.display()))?;
    info!("  Decoded {}x{}", src.width(), src.height());

    info!("  Generating height map...");
    let height = generate_height_map(&src, cfg)?;

    let albedo = matching_albedo(src, &height);

    // Dimensions come from a decoded image, never zero
    let layout = PanelLayout::for_image(albedo.width(), albedo.height()).unwrap_or_default();

    let stem = image.file_stem().and_then(|s| s.to_str()).unwrap_or("diorama");
    let manifest = export::export_scene(out_dir, stem, &albedo, &height, layout, cfg)?;
    info!("Done! Manifest at {}", manifest.display());
    Ok(())
}
