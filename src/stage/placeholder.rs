// placeholder.rs - Texture shown before an image is loaded
//
// Diagonal teal-to-blue gradient sprinkled with faint dark discs.
// Disc placement comes from a seeded xorshift so output is reproducible.

use crate::raster::{CHANNELS, Raster};

pub const DEFAULT_SIZE: u32 = 1024;
pub const DEFAULT_SEED: u32 = 0xDEADBEEF;

const GRADIENT_START: [f32; 3] = [0x81 as f32, 0xf6 as f32, 0xd7 as f32];
const GRADIENT_END: [f32; 3] = [0x36 as f32, 0x85 as f32, 0xf9 as f32];

const DISC_COUNT: usize = 220;
const DISC_COLOR: [f32; 3] = [7.0, 13.0, 37.0];
const DISC_ALPHA: f32 = 0.12;
const DISC_MIN_RADIUS: f32 = 4.0;
const DISC_RADIUS_RANGE: f32 = 12.0;

// xorshift32, uniform in [0, 1)
#[inline(always)]
fn rand(rng: &mut u32) -> f32 {
    *rng ^= *rng << 13;
    *rng ^= *rng >> 17;
    *rng ^= *rng << 5;
    (*rng >> 8) as f32 * (1.0 / 16777216.0)
}

/// Square placeholder of side `size`. A zero seed is replaced by the default
/// since xorshift never leaves zero.
pub fn placeholder_texture(size: u32, seed: u32) -> Raster {
    let size = size.max(1);
    let mut rng = if seed == 0 { DEFAULT_SEED } else { seed };
    let n = size as usize;

    let mut pixels = gradient(n);

    let extent = size as f32;
    for _ in 0..DISC_COUNT {
        let radius = rand(&mut rng) * DISC_RADIUS_RANGE + DISC_MIN_RADIUS;
        let cx = rand(&mut rng) * extent;
        let cy = rand(&mut rng) * extent;
        fill_disc(&mut pixels, n, cx, cy, radius);
    }

    let mut data = Vec::with_capacity(n * n * CHANNELS);
    for p in &pixels {
        data.extend_from_slice(&[to_u8(p[0]), to_u8(p[1]), to_u8(p[2]), 255]);
    }
    Raster::from_parts(size, size, data)
}

// First stop at the top-left corner, last at the bottom-right
fn gradient(n: usize) -> Vec<[f32; 3]> {
    let mut pixels = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let t = ((x as f32 + 0.5) + (y as f32 + 0.5)) / (2.0 * n as f32);
            pixels.push(std::array::from_fn(|c| GRADIENT_START[c] + (GRADIENT_END[c] - GRADIENT_START[c]) * t));
        }
    }
    pixels
}

fn fill_disc(pixels: &mut [[f32; 3]], n: usize, cx: f32, cy: f32, r: f32) {
    let x0 = (cx - r).floor().max(0.0) as usize;
    let y0 = (cy - r).floor().max(0.0) as usize;
    let x1 = ((cx + r).ceil() as usize).min(n);
    let y1 = ((cy + r).ceil() as usize).min(n);

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy > r * r { continue; }

            let p = &mut pixels[y * n + x];
            for c in 0..3 {
                p[c] += (DISC_COLOR[c] - p[c]) * DISC_ALPHA;
            }
        }
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
