// heightmap/ - Luminance-derived displacement maps
//
// Pure transform from a decoded raster to a normalized grayscale
// elevation raster. No shared state; each call allocates its own buffers.

mod config;
mod generate;
mod luminance;
mod resample;

pub use config::*;
pub use generate::{ElevationField, generate_height_map};
pub use luminance::{elevate, luminance};
pub use resample::{bilinear_resize, fit_dimensions};
