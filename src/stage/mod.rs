// stage/ - Per-frame state of the diorama viewer
//
// Everything the renderer glue reads each frame: panel/frame layout,
// float motion, orbit camera, plus the placeholder texture.

mod camera;
mod layout;
mod motion;
mod placeholder;

pub use camera::{FAR, FOV_DEGREES, HOME, NEAR, OrbitCamera, OrbitLimits};
pub use layout::{FRAME_TUBE, FRAME_Y, PANEL_SIZE, PANEL_Y, PanelLayout};
pub use motion::FloatMotion;
pub use placeholder::{DEFAULT_SEED, DEFAULT_SIZE, placeholder_texture};

use log::{debug, warn};

/// Diorama viewer state
pub struct Stage {
    layout: PanelLayout,
    motion: FloatMotion,
    camera: OrbitCamera,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            layout: PanelLayout::placeholder(),
            motion: FloatMotion::new(),
            camera: OrbitCamera::default(),
        }
    }

    /// Re-fit the panel to a newly loaded image.
    /// Returns false and keeps the current layout for a zero-area image.
    pub fn fit_image(&mut self, w: u32, h: u32) -> bool {
        match PanelLayout::for_image(w, h) {
            Some(layout) => {
                debug!("panel {:.3}x{:.3}, frame radius {:.3}", layout.panel_width, layout.panel_height, layout.frame_radius);
                self.layout = layout;
                true
            }
            None => {
                warn!("ignoring {}x{} image for panel layout", w, h);
                false
            }
        }
    }

    /// Back to the placeholder panel
    pub fn clear_image(&mut self) {
        self.layout = PanelLayout::placeholder();
    }

    pub fn tick(&mut self, time: f64) {
        self.motion.tick(time);
    }

    pub fn reset_motion(&mut self) {
        self.motion.reset();
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    pub fn layout(&self) -> &PanelLayout { &self.layout }
    pub fn motion(&self) -> &FloatMotion { &self.motion }
    pub fn camera(&self) -> &OrbitCamera { &self.camera }
    pub fn camera_mut(&mut self) -> &mut OrbitCamera { &mut self.camera }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_image_keeps_layout() {
        let mut stage = Stage::new();
        assert!(stage.fit_image(1600, 900));
        let fitted = *stage.layout();
        assert!(!stage.fit_image(0, 900));
        assert_eq!(*stage.layout(), fitted);
        stage.clear_image();
        assert_eq!(*stage.layout(), PanelLayout::placeholder());
    }

    #[test]
    fn motion_reset_restarts_clock() {
        let mut stage = Stage::new();
        stage.tick(500.0);
        assert_eq!(stage.motion().elapsed(), 500.0);
        stage.reset_motion();
        assert_eq!(stage.motion().elapsed(), 0.0);
        stage.tick(16.0);
        assert_eq!(stage.motion().elapsed(), 16.0);
    }

    #[test]
    fn camera_reset_after_orbit() {
        let mut stage = Stage::new();
        stage.camera_mut().set_position([0.0, 3.0, 3.0]);
        assert_ne!(stage.camera().position(), HOME);
        stage.reset_camera();
        assert_eq!(stage.camera().position(), HOME);
    }
}
