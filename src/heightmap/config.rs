// config.rs - Height-map tuning parameters
//
// Aesthetic constants exposed as configuration. Missing JSON fields
// fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{HeightMapError, Result};

pub const DEFAULT_MAX_DIMENSION: u32 = 1024;
pub const DEFAULT_EXPONENT: f32 = 0.75;
pub const DEFAULT_EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightMapConfig {
    /// Longest output edge in pixels
    pub max_dimension: u32,
    /// Contrast curve applied to luminance
    pub exponent: f32,
    /// Floor on the elevation range
    pub epsilon: f32,
}

impl Default for HeightMapConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            exponent: DEFAULT_EXPONENT,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl HeightMapConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 {
            return Err(HeightMapError::config("max_dimension must be at least 1"));
        }
        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(HeightMapError::config(format!("exponent must be positive, got {}", self.exponent)));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(HeightMapError::config(format!("epsilon must be positive, got {}", self.epsilon)));
        }
        Ok(())
    }
}
