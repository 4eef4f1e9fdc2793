use wasm_bindgen::prelude::*;

pub mod error;
pub mod heightmap;
pub mod raster;
pub mod stage;

#[cfg(not(target_arch = "wasm32"))]
pub mod decode;

pub use error::HeightMapError;
pub use heightmap::{HeightMapConfig, generate_height_map};
pub use raster::Raster;

use stage::{FAR, FOV_DEGREES, NEAR, Stage};

// ============================================================================
// RELIEF MAPPER - Image luminance to displacement map
// ============================================================================

fn js_error(e: HeightMapError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Holds the most recent height map for the JS side to read out of wasm memory.
///
/// JS decodes the uploaded file (canvas `getImageData`), passes the RGBA
/// bytes to `generate`, then views `output_ptr()..output_len()` as a
/// `width() x height()` RGBA texture.
#[wasm_bindgen]
pub struct ReliefMapper {
    config: HeightMapConfig,
    out: Vec<u8>,
    w: u32,
    h: u32,
}

#[wasm_bindgen]
impl ReliefMapper {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { config: HeightMapConfig::default(), out: Vec::new(), w: 0, h: 0 }
    }

    /// Mapper with custom tuning; fails if any parameter is out of range
    #[wasm_bindgen(js_name = "withParams")]
    pub fn with_params(max_dimension: u32, exponent: f32, epsilon: f32) -> Result<ReliefMapper, JsValue> {
        let config = HeightMapConfig { max_dimension, exponent, epsilon };
        config.validate().map_err(js_error)?;
        Ok(Self { config, ..Self::new() })
    }

    /// Build a new map. On error the previous map stays in place.
    pub fn generate(&mut self, rgba: &[u8], width: u32, height: u32) -> Result<(), JsValue> {
        self.try_generate(rgba, width, height).map_err(js_error)
    }

    #[wasm_bindgen(js_name = "hasOutput")]
    pub fn has_output(&self) -> bool { !self.out.is_empty() }

    pub fn release(&mut self) {
        self.out = Vec::new();
        self.w = 0;
        self.h = 0;
    }

    pub fn output_ptr(&self) -> *const u8 { self.out.as_ptr() }
    pub fn output_len(&self) -> usize { self.out.len() }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
}

impl ReliefMapper {
    fn try_generate(&mut self, rgba: &[u8], width: u32, height: u32) -> error::Result<()> {
        let src = Raster::from_rgba(width, height, rgba.to_vec())?;
        let map = generate_height_map(&src, &self.config)?;
        self.w = map.width();
        self.h = map.height();
        self.out = map.into_bytes();
        Ok(())
    }
}

impl Default for ReliefMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Placeholder texture as RGBA bytes, `size x size`
#[wasm_bindgen(js_name = "placeholderTexture")]
pub fn placeholder_texture(size: u32, seed: u32) -> Vec<u8> {
    stage::placeholder_texture(size, seed).into_bytes()
}

// ============================================================================
// DIORAMA STAGE - Float animation, panel layout, camera rig
// ============================================================================

#[wasm_bindgen]
pub struct DioramaStage {
    inner: Stage,
}

#[wasm_bindgen]
impl DioramaStage {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { inner: Stage::new() }
    }

    /// Advance animation to a requestAnimationFrame timestamp (ms)
    pub fn tick(&mut self, time: f64) {
        self.inner.tick(time);
    }

    #[wasm_bindgen(js_name = "fitImage")]
    pub fn fit_image(&mut self, width: u32, height: u32) -> bool {
        self.inner.fit_image(width, height)
    }

    /// Back to the placeholder panel, e.g. after a failed load
    #[wasm_bindgen(js_name = "clearImage")]
    pub fn clear_image(&mut self) {
        self.inner.clear_image();
    }

    /// Restart the float animation; the next tick counts from zero
    #[wasm_bindgen(js_name = "resetMotion")]
    pub fn reset_motion(&mut self) {
        self.inner.reset_motion();
    }

    #[wasm_bindgen(js_name = "resetCamera")]
    pub fn reset_camera(&mut self) -> Vec<f32> {
        self.inner.reset_camera();
        self.inner.camera().position().to_vec()
    }

    /// Clamp a proposed camera position to the orbit limits
    #[wasm_bindgen(js_name = "moveCamera")]
    pub fn move_camera(&mut self, x: f32, y: f32, z: f32) -> Vec<f32> {
        self.inner.camera_mut().set_position([x, y, z]);
        self.inner.camera().position().to_vec()
    }

    // Animation
    #[wasm_bindgen(js_name = "floatHeight")]
    pub fn float_height(&self) -> f64 { self.inner.motion().height() }
    pub fn sway(&self) -> f64 { self.inner.motion().sway() }
    pub fn halo(&self) -> f64 { self.inner.motion().halo() }

    // Layout
    #[wasm_bindgen(js_name = "panelWidth")]
    pub fn panel_width(&self) -> f32 { self.inner.layout().panel_width }
    #[wasm_bindgen(js_name = "panelHeight")]
    pub fn panel_height(&self) -> f32 { self.inner.layout().panel_height }
    #[wasm_bindgen(js_name = "frameRadius")]
    pub fn frame_radius(&self) -> f32 { self.inner.layout().frame_radius }
    #[wasm_bindgen(js_name = "frameTube")]
    pub fn frame_tube(&self) -> f32 { self.inner.layout().frame_tube }

    // Camera
    #[wasm_bindgen(js_name = "cameraFov")]
    pub fn camera_fov(&self) -> f32 { FOV_DEGREES }
    #[wasm_bindgen(js_name = "cameraNear")]
    pub fn camera_near(&self) -> f32 { NEAR }
    #[wasm_bindgen(js_name = "cameraFar")]
    pub fn camera_far(&self) -> f32 { FAR }

    /// damping, max polar angle, min distance, max distance
    #[wasm_bindgen(js_name = "orbitLimits")]
    pub fn orbit_limits(&self) -> Vec<f32> {
        let l = self.inner.camera().limits();
        vec![l.damping, l.max_polar, l.min_distance, l.max_distance]
    }
}

impl Default for DioramaStage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapper_keeps_previous_map_on_error() {
        let mut mapper = ReliefMapper::new();
        let rgba = [0, 0, 0, 255, 255, 255, 255, 255];
        assert!(mapper.generate(&rgba, 2, 1).is_ok());
        assert_eq!((mapper.width(), mapper.height(), mapper.output_len()), (2, 1, 8));

        let before = mapper.out.clone();
        assert!(mapper.try_generate(&rgba, 3, 3).is_err());
        assert!(mapper.try_generate(&[], 0, 0).is_err());
        assert_eq!(mapper.out, before);
        assert_eq!(mapper.width(), 2);
    }

    #[test]
    fn release_drops_output() {
        let mut mapper = ReliefMapper::new();
        mapper.generate(&[9, 9, 9, 255], 1, 1).unwrap();
        assert!(mapper.has_output());
        mapper.release();
        assert!(!mapper.has_output());
        assert_eq!(mapper.width(), 0);
    }

    #[test]
    fn stage_fits_and_resets() {
        let mut stage = DioramaStage::new();
        assert!(stage.fit_image(200, 100));
        assert!((stage.panel_width() - 4.8).abs() < 1e-5);
        assert_eq!(stage.reset_camera(), vec![2.8, 2.2, 3.4]);
        assert_eq!(stage.orbit_limits().len(), 4);

        stage.clear_image();
        assert_eq!(stage.panel_width(), 2.4);
        assert_eq!(stage.frame_radius(), 1.3);
    }

    #[test]
    fn stage_motion_restarts() {
        let mut stage = DioramaStage::new();
        stage.tick(2000.0);
        stage.tick(4000.0);
        assert!(stage.sway() > 0.0);
        assert!((stage.float_height() - 0.2).abs() > 1e-3);

        stage.reset_motion();
        assert_eq!(stage.sway(), 0.0);
        assert_eq!(stage.halo(), 0.0);
        assert!((stage.float_height() - 0.2).abs() < 1e-12);
    }
}
