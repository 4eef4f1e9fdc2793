// generate.rs - Image to displacement map
//
// Pipeline:
//   1. Downscale so the longest edge fits max_dimension
//   2. Luminance + contrast curve per pixel, tracking min/max
//   3. Normalize to the full 0-255 range, write opaque gray

use log::debug;
use ndarray::Array2;

use super::config::HeightMapConfig;
use super::luminance::{elevate, luminance};
use super::resample::{bilinear_resize, fit_dimensions};
use crate::error::Result;
use crate::raster::{CHANNELS, Raster};

/// Gray level written for every pixel of a perfectly uniform image
const FLAT_LEVEL: f32 = 0.5;

/// Elevation samples for one image, with the range seen while filling it
pub struct ElevationField {
    pub samples: Array2<f32>,
    pub min: f32,
    pub max: f32,
}

impl ElevationField {
    pub fn from_raster(src: &Raster, exponent: f32) -> Self {
        let (w, h) = (src.width() as usize, src.height() as usize);
        let mut samples = Array2::<f32>::zeros((h, w));
        let (mut min, mut max) = (f32::MAX, f32::MIN);

        for ((y, x), v) in samples.indexed_iter_mut() {
            let [r, g, b, _] = src.pixel(x as u32, y as u32);
            let e = elevate(luminance(r, g, b), exponent);
            min = min.min(e);
            max = max.max(e);
            *v = e;
        }

        Self { samples, min, max }
    }

    pub fn range(&self) -> f32 {
        self.max - self.min
    }
}

/// Build a grayscale height map from `src`.
///
/// The result never exceeds `config.max_dimension` on its longest edge,
/// spans 0..=255 whenever the elevation range reaches `config.epsilon`,
/// and is mid-gray everywhere for uniform input. Ranges below epsilon are
/// divided by epsilon instead, so tiny differences stay small. Alpha is always 255.
pub fn generate_height_map(src: &Raster, config: &HeightMapConfig) -> Result<Raster> {
    config.validate()?;

    let (tw, th) = fit_dimensions(src.width(), src.height(), config.max_dimension);
    let resized;
    let scaled = if (tw, th) == (src.width(), src.height()) {
        src
    } else {
        resized = bilinear_resize(src, tw, th);
        &resized
    };

    let field = ElevationField::from_raster(scaled, config.exponent);
    let range = field.range();
    let flat = field.max == field.min;
    let denom = range.max(config.epsilon);

    debug!(
        "height map {}x{} -> {}x{}, elevation [{:.4}, {:.4}]{}",
        src.width(), src.height(), tw, th, field.min, field.max,
        if flat { " (flat)" } else { "" },
    );

    let mut out = Vec::with_capacity(tw as usize * th as usize * CHANNELS);
    for &e in field.samples.iter() {
        let normalized = if flat { FLAT_LEVEL } else { (e - field.min) / denom };
        let v = (normalized * 255.0).round().clamp(0.0, 255.0) as u8;
        out.extend_from_slice(&[v, v, v, 255]);
    }

    Ok(Raster::from_parts(tw, th, out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(w: u32, h: u32, levels: &[u8]) -> Raster {
        let data = levels.iter().flat_map(|&l| [l, l, l, 255]).collect();
        Raster::from_rgba(w, h, data).unwrap()
    }

    #[test]
    fn field_tracks_range() {
        let src = gray(3, 1, &[0, 128, 255]);
        let field = ElevationField::from_raster(&src, 1.0);
        assert_eq!(field.samples.dim(), (1, 3));
        assert_eq!(field.min, 0.0);
        assert!((field.max - 1.0).abs() < 1e-6);
    }

    #[test]
    fn black_and_white_map_exactly() {
        let mut levels = [0u8; 16];
        levels[0] = 255;
        levels[15] = 255;
        let out = generate_height_map(&gray(4, 4, &levels), &HeightMapConfig::default()).unwrap();

        assert_eq!(out.pixel(0, 0), [255, 255, 255, 255]);
        assert_eq!(out.pixel(3, 3), [255, 255, 255, 255]);
        assert_eq!(out.pixel(1, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn ramp_is_monotonic() {
        let levels: Vec<u8> = (0..=255).collect();
        let out = generate_height_map(&gray(256, 1, &levels), &HeightMapConfig::default()).unwrap();
        let values: Vec<u8> = out.pixels().map(|p| p[0]).collect();

        assert_eq!(values[0], 0);
        assert_eq!(values[255], 255);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        // Contrast curve lifts shadows above the linear ramp
        assert!(values[64] > 64);
    }

    #[test]
    fn flat_image_is_mid_gray() {
        let out = generate_height_map(&gray(5, 3, &[90; 15]), &HeightMapConfig::default()).unwrap();
        assert!(out.pixels().all(|p| p == [128, 128, 128, 255]));
    }

    #[test]
    fn near_flat_range_uses_epsilon_floor() {
        // Elevation range ~2.5e-6, well under the default epsilon
        let src = Raster::from_rgba(2, 1, vec![151, 0, 200, 255, 152, 0, 198, 255]).unwrap();
        let field = ElevationField::from_raster(&src, 0.75);
        assert!(field.range() > 0.0 && field.range() < 1e-4);

        let out = generate_height_map(&src, &HeightMapConfig::default()).unwrap();
        let (a, b) = (out.pixel(0, 0)[0], out.pixel(1, 0)[0]);
        assert_eq!(a.min(b), 0);
        assert!(a.max(b) >= 1 && a.max(b) <= 12, "got {a} and {b}");
        assert!(out.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn alpha_is_ignored() {
        let a = Raster::from_rgba(2, 1, vec![10, 20, 30, 0, 200, 210, 220, 0]).unwrap();
        let b = Raster::from_rgba(2, 1, vec![10, 20, 30, 255, 200, 210, 220, 17]).unwrap();
        let cfg = HeightMapConfig::default();
        let (oa, ob) = (generate_height_map(&a, &cfg).unwrap(), generate_height_map(&b, &cfg).unwrap());
        assert_eq!(oa, ob);
        assert!(oa.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn respects_custom_max_dimension() {
        let cfg = HeightMapConfig { max_dimension: 8, ..Default::default() };
        let levels: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
        let out = generate_height_map(&gray(32, 2, &levels), &cfg).unwrap();
        assert_eq!((out.width(), out.height()), (8, 1));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = HeightMapConfig { exponent: 0.0, ..Default::default() };
        assert!(generate_height_map(&gray(1, 1, &[0]), &cfg).is_err());
    }
}
