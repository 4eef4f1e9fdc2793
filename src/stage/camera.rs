// camera.rs - Orbit camera rig
//
// Camera orbits the origin. Positions are kept inside a distance band
// and below a polar-angle ceiling so the view never flips under the ground.

use std::f32::consts::PI;

use serde::Serialize;

pub const HOME: [f32; 3] = [2.8, 2.2, 3.4];
pub const FOV_DEGREES: f32 = 45.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OrbitLimits {
    pub damping: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            damping: 0.08,
            max_polar: PI * 0.92,
            min_distance: 1.25,
            max_distance: 8.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    position: [f32; 3],
    limits: OrbitLimits,
}

impl OrbitCamera {
    pub fn new(limits: OrbitLimits) -> Self {
        Self { position: HOME, limits }
    }

    pub fn position(&self) -> [f32; 3] { self.position }
    pub fn limits(&self) -> OrbitLimits { self.limits }

    pub fn reset(&mut self) {
        self.position = HOME;
    }

    /// Move the camera, clamped to the orbit limits
    pub fn set_position(&mut self, p: [f32; 3]) {
        self.position = self.constrain(p);
    }

    /// Clamp distance and polar angle, keeping the azimuth
    pub fn constrain(&self, [x, y, z]: [f32; 3]) -> [f32; 3] {
        let r = (x * x + y * y + z * z).sqrt();
        if r == 0.0 || !r.is_finite() {
            return HOME;
        }

        let radius = r.clamp(self.limits.min_distance, self.limits.max_distance);
        let polar = (y / r).clamp(-1.0, 1.0).acos().min(self.limits.max_polar);
        let azimuth = x.atan2(z);

        let ring = radius * polar.sin();
        [ring * azimuth.sin(), radius * polar.cos(), ring * azimuth.cos()]
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitLimits::default())
    }
}
