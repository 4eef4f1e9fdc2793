// decode.rs - File bytes to Raster (native builds)
//
// In the browser the platform decodes images and passes RGBA across
// the wasm boundary, so this module only exists off-wasm.

use std::path::Path;

use image::RgbaImage;

use crate::error::Result;
use crate::raster::Raster;

/// Decode PNG/JPEG/WebP bytes, format sniffed from content
pub fn decode_raster(bytes: &[u8]) -> Result<Raster> {
    let img = image::load_from_memory(bytes)?.into_rgba8();
    from_rgba_image(img)
}

/// Load and decode an image file
pub fn open_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)?.into_rgba8();
    from_rgba_image(img)
}

pub fn from_rgba_image(img: RgbaImage) -> Result<Raster> {
    let (w, h) = img.dimensions();
    Raster::from_rgba(w, h, img.into_raw())
}

pub fn to_rgba_image(raster: &Raster) -> RgbaImage {
    RgbaImage::from_fn(raster.width(), raster.height(), |x, y| image::Rgba(raster.pixel(x, y)))
}
