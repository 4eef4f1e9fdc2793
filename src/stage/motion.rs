// motion.rs - Gentle float and sway of the diorama group
//
// Driven by requestAnimationFrame timestamps (milliseconds).
// Bobs vertically on a sine, sways back and forth around Y,
// and slowly turns the halo ring.

use std::f64::consts::PI;

use super::layout::PANEL_Y;

const FLOAT_SPEED: f64 = 0.00055;
const FLOAT_AMPLITUDE: f64 = 0.15;
const SWAY_STEP: f64 = 0.0007;
const SWAY_LIMIT: f64 = PI / 6.0;
const HALO_STEP: f64 = 0.0005;

#[derive(Clone, Debug)]
pub struct FloatMotion {
    previous: f64,
    elapsed: f64,
    direction: f64,
    sway: f64,
    halo: f64,
}

impl FloatMotion {
    pub fn new() -> Self {
        Self {
            previous: 0.0,
            elapsed: 0.0,
            direction: 1.0,
            sway: 0.0,
            halo: 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance to frame timestamp `time`
    pub fn tick(&mut self, time: f64) {
        let delta = time - self.previous;
        self.previous = time;
        self.elapsed += delta;

        self.sway += SWAY_STEP * self.direction;
        if self.sway.abs() > SWAY_LIMIT {
            self.direction = -self.direction;
        }

        self.halo += HALO_STEP;
    }

    /// Vertical position of the group
    pub fn height(&self) -> f64 {
        PANEL_Y as f64 + (self.elapsed * FLOAT_SPEED).sin() * FLOAT_AMPLITUDE
    }

    /// Rotation about Y, radians
    pub fn sway(&self) -> f64 { self.sway }

    /// Halo rotation about its own axis, radians
    pub fn halo(&self) -> f64 { self.halo }

    pub fn elapsed(&self) -> f64 { self.elapsed }
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self::new()
    }
}
