// luminance.rs - Perceptual brightness and contrast shaping

const WEIGHT_R: f32 = 0.299;
const WEIGHT_G: f32 = 0.587;
const WEIGHT_B: f32 = 0.114;

/// Root of the weighted squared channels, in [0, 1]
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    (WEIGHT_R * r * r + WEIGHT_G * g * g + WEIGHT_B * b * b).sqrt()
}

/// Sub-linear power curve: lifts shadows, keeps highlights
#[inline]
pub fn elevate(luminance: f32, exponent: f32) -> f32 {
    luminance.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes() {
        assert_eq!(luminance(0, 0, 0), 0.0);
        assert!((luminance(255, 255, 255) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pure_red() {
        let l = luminance(255, 0, 0);
        assert!((l - 0.5468).abs() < 1e-3);
        assert!((elevate(l, 0.75) - 0.6358).abs() < 1e-3);
    }

    #[test]
    fn green_dominates() {
        assert!(luminance(0, 255, 0) > luminance(255, 0, 0));
        assert!(luminance(255, 0, 0) > luminance(0, 0, 255));
    }

    #[test]
    fn curve_lifts_midtones() {
        assert!(elevate(0.25, 0.75) > 0.25);
        assert_eq!(elevate(0.0, 0.75), 0.0);
        assert_eq!(elevate(1.0, 0.75), 1.0);
    }
}
