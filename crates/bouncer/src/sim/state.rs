use bouncer_engine::coords::{Rect, Vec2};

use crate::config::SimConfig;

/// Everything the demo simulates: one square body in a window-sized box.
///
/// Coordinates are pixels with the origin at the bottom-left and +Y up.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub width: u32,
    pub height: u32,
    /// Half the side length of the body. Fixed.
    pub half_extent: f32,
    pub velocity: Vec2,
    /// Center of the body.
    pub position: Vec2,
    /// Horizontal wall contacts so far.
    pub bounces: u64,
}

impl SimulationState {
    /// Body starts touching the left wall, vertically centered.
    pub fn new(config: &SimConfig) -> Self {
        let (width, height) = config.resolution;
        Self {
            width,
            height,
            half_extent: config.half_extent,
            velocity: config.velocity,
            position: Vec2::new(config.half_extent, height as f32 / 2.0),
            bounces: 0,
        }
    }

    /// Adopts a new resolution. Returns `false` if nothing changed.
    ///
    /// Zero-sized resolutions (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 || (width, height) == (self.width, self.height) {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub fn scale_velocity(&mut self, factor: f32) {
        self.velocity *= factor;
    }

    /// Area covered by the body.
    pub fn body_rect(&self) -> Rect {
        let h = self.half_extent;
        Rect::from_center_half_extent(self.position, Vec2::new(h, h))
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_put_body_at_left_wall() {
        let s = SimulationState::default();
        assert_eq!((s.width, s.height), (400, 200));
        assert_eq!(s.half_extent, 20.0);
        assert_eq!(s.position, Vec2::new(20.0, 100.0));
        assert_eq!(s.velocity, Vec2::new(2.0, 1.5));
        assert_eq!(s.bounces, 0);
    }

    #[test]
    fn resize_reports_changes_only() {
        let mut s = SimulationState::default();
        assert!(!s.resize(400, 200));
        assert!(s.resize(800, 600));
        assert_eq!((s.width, s.height), (800, 600));
    }

    #[test]
    fn zero_size_resize_is_ignored() {
        let mut s = SimulationState::default();
        assert!(!s.resize(0, 0));
        assert!(!s.resize(640, 0));
        assert_eq!((s.width, s.height), (400, 200));
    }

    #[test]
    fn body_rect_is_centered_square() {
        let s = SimulationState::default();
        let r = s.body_rect();
        assert_eq!(r.min(), Vec2::new(0.0, 80.0));
        assert_eq!(r.max(), Vec2::new(40.0, 120.0));
    }
}
