// layout.rs - Panel and frame dimensions
//
// The panel keeps a fixed height and stretches horizontally with the
// image aspect; the ring frame grows to enclose it.

use serde::Serialize;

pub const PANEL_SIZE: f32 = 2.4;
pub const PANEL_Y: f32 = 0.2;
pub const FRAME_Y: f32 = 0.18;
pub const FRAME_TUBE: f32 = 0.06;

const PLACEHOLDER_FRAME_RADIUS: f32 = 1.3;
const FRAME_RADIUS_FACTOR: f32 = 0.72;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PanelLayout {
    pub panel_width: f32,
    pub panel_height: f32,
    pub frame_radius: f32,
    pub frame_tube: f32,
}

impl PanelLayout {
    /// Square panel shown before any image is loaded
    pub fn placeholder() -> Self {
        Self {
            panel_width: PANEL_SIZE,
            panel_height: PANEL_SIZE,
            frame_radius: PLACEHOLDER_FRAME_RADIUS,
            frame_tube: FRAME_TUBE,
        }
    }

    /// Layout for an image of the given width/height ratio.
    /// None for zero, negative or non-finite ratios.
    pub fn for_aspect(aspect: f32) -> Option<Self> {
        if !aspect.is_finite() || aspect <= 0.0 {
            return None;
        }
        let width = PANEL_SIZE * aspect;
        let radius = width.max(PANEL_SIZE) / 2.0;
        Some(Self {
            panel_width: width,
            panel_height: PANEL_SIZE,
            frame_radius: radius * FRAME_RADIUS_FACTOR,
            frame_tube: FRAME_TUBE,
        })
    }

    pub fn for_image(w: u32, h: u32) -> Option<Self> {
        if h == 0 { return None; }
        Self::for_aspect(w as f32 / h as f32)
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_stretches_panel() {
        let l = PanelLayout::for_image(2000, 1000).unwrap();
        assert!((l.panel_width - 4.8).abs() < 1e-5);
        assert_eq!(l.panel_height, PANEL_SIZE);
        assert!((l.frame_radius - 2.4 * 0.72).abs() < 1e-5);
    }

    #[test]
    fn tall_image_keeps_base_radius() {
        let l = PanelLayout::for_image(500, 1000).unwrap();
        assert!((l.panel_width - 1.2).abs() < 1e-5);
        assert!((l.frame_radius - 1.2 * 0.72).abs() < 1e-5);
    }

    #[test]
    fn degenerate_aspect_rejected() {
        assert!(PanelLayout::for_aspect(0.0).is_none());
        assert!(PanelLayout::for_aspect(f32::INFINITY).is_none());
        assert!(PanelLayout::for_image(10, 0).is_none());
    }
}
