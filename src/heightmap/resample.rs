// resample.rs - Downscale oversized images
//
// Uniform scale so the longest edge fits, then bilinear resampling
// with pixel-centre alignment and clamped edges.

use crate::raster::{CHANNELS, Raster};

/// Output size for an image whose longest edge must not exceed `max_dim`.
/// Aspect ratio is kept within rounding; never smaller than 1x1.
pub fn fit_dimensions(w: u32, h: u32, max_dim: u32) -> (u32, u32) {
    let longest = w.max(h);
    if longest <= max_dim {
        return (w, h);
    }
    let scale = max_dim as f64 / longest as f64;
    let tw = ((w as f64 * scale).round() as u32).clamp(1, max_dim);
    let th = ((h as f64 * scale).round() as u32).clamp(1, max_dim);
    (tw, th)
}

/// Bilinear resize to exactly `tw` x `th`
pub fn bilinear_resize(src: &Raster, tw: u32, th: u32) -> Raster {
    let (sw, sh) = (src.width(), src.height());
    let (sx, sy) = (sw as f32 / tw as f32, sh as f32 / th as f32);
    let bytes = src.as_bytes();
    let stride = sw as usize * CHANNELS;

    let mut out = Vec::with_capacity(tw as usize * th as usize * CHANNELS);

    for y in 0..th {
        let fy = ((y as f32 + 0.5) * sy - 0.5).clamp(0.0, (sh - 1) as f32);
        let y0 = fy as usize;
        let y1 = (y0 + 1).min(sh as usize - 1);
        let ty = fy - y0 as f32;

        for x in 0..tw {
            let fx = ((x as f32 + 0.5) * sx - 0.5).clamp(0.0, (sw - 1) as f32);
            let x0 = fx as usize;
            let x1 = (x0 + 1).min(sw as usize - 1);
            let tx = fx - x0 as f32;

            for c in 0..CHANNELS {
                let sample = |px: usize, py: usize| bytes[py * stride + px * CHANNELS + c] as f32;

                let v = sample(x0, y0) * (1.0 - tx) * (1.0 - ty)
                      + sample(x1, y0) * tx * (1.0 - ty)
                      + sample(x0, y1) * (1.0 - tx) * ty
                      + sample(x1, y1) * tx * ty;
                out.push(v.round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    Raster::from_parts(tw, th, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_untouched() {
        assert_eq!(fit_dimensions(640, 480, 1024), (640, 480));
        assert_eq!(fit_dimensions(1024, 1024, 1024), (1024, 1024));
    }

    #[test]
    fn longest_edge_fits() {
        assert_eq!(fit_dimensions(2000, 1000, 1024), (1024, 512));
        assert_eq!(fit_dimensions(1000, 3000, 1024), (341, 1024));
    }

    #[test]
    fn thin_images_keep_one_pixel() {
        assert_eq!(fit_dimensions(5000, 1, 1024), (1024, 1));
    }

    #[test]
    fn solid_colour_survives_resize() {
        let src = Raster::filled(10, 6, [200, 50, 25, 255]).unwrap();
        let out = bilinear_resize(&src, 5, 3);
        assert_eq!((out.width(), out.height()), (5, 3));
        assert!(out.pixels().all(|p| p == [200, 50, 25, 255]));
    }

    #[test]
    fn halving_averages_pairs() {
        // 2x1 black/white collapses to a single mid-gray pixel
        let src = Raster::from_rgba(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap();
        let out = bilinear_resize(&src, 1, 1);
        assert_eq!(out.pixel(0, 0), [128, 128, 128, 255]);
    }
}
