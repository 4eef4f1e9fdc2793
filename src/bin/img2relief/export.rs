// export.rs - Write generated textures and the scene manifest
//
// Outputs per image:
//   <stem>_height.png  - grayscale displacement map (RGBA, opaque)
//   <stem>_albedo.png  - colour texture at the same size
//   <stem>_scene.json  - dimensions, panel layout, file names, config

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use diorama_engine::decode::to_rgba_image;
use diorama_engine::stage::PanelLayout;
use diorama_engine::{HeightMapConfig, Raster};

#[derive(Serialize)]
pub struct SceneManifest<'a> {
    pub width: u32,
    pub height: u32,
    pub albedo: &'a str,
    pub displacement: &'a str,
    pub layout: PanelLayout,
    pub config: HeightMapConfig,
}

pub fn write_png(path: &Path, raster: &Raster) -> Result<()> {
    ensure_parent_dir(path)?;
    to_rgba_image(raster)
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn export_scene(
    dir: &Path,
    stem: &str,
    albedo: &Raster,
    height: &Raster,
    layout: PanelLayout,
    config: &HeightMapConfig,
) -> Result<PathBuf> {
    let albedo_name = format!("{stem}_albedo.png");
    let height_name = format!("{stem}_height.png");

    write_png(&dir.join(&albedo_name), albedo)?;
    write_png(&dir.join(&height_name), height)?;

    let manifest = SceneManifest {
        width: height.width(),
        height: height.height(),
        albedo: &albedo_name,
        displacement: &height_name,
        layout,
        config: *config,
    };

    let path = dir.join(format!("{stem}_scene.json"));
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
