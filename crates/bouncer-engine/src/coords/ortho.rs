use super::Vec2;

/// 2D orthographic projection: the box `[left, right] x [bottom, top]` maps
/// onto NDC `[-1, 1] x [-1, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ortho2D {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Ortho2D {
    /// Identity projection; coordinates are already NDC.
    pub const NDC: Ortho2D = Ortho2D::new(-1.0, 1.0, -1.0, 1.0);

    #[inline]
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }

    /// Pixel space of a `width x height` surface, origin bottom-left, +Y up.
    #[inline]
    pub fn pixels(width: u32, height: u32) -> Self {
        Self::new(0.0, width.max(1) as f32, 0.0, height.max(1) as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        let w = self.right - self.left;
        let h = self.top - self.bottom;
        w != 0.0 && h != 0.0 && w.is_finite() && h.is_finite()
    }

    /// Per-axis `(scale, offset)` such that `ndc = p * scale + offset`.
    ///
    /// This is the form uploaded to the shaders.
    pub fn ndc_transform(self) -> ([f32; 2], [f32; 2]) {
        let sx = 2.0 / (self.right - self.left);
        let sy = 2.0 / (self.top - self.bottom);
        let ox = -(self.right + self.left) / (self.right - self.left);
        let oy = -(self.top + self.bottom) / (self.top - self.bottom);
        ([sx, sy], [ox, oy])
    }

    #[inline]
    pub fn to_ndc(self, p: Vec2) -> Vec2 {
        let ([sx, sy], [ox, oy]) = self.ndc_transform();
        Vec2::new(p.x * sx + ox, p.y * sy + oy)
    }
}

impl Default for Ortho2D {
    fn default() -> Self {
        Self::NDC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_corners_map_to_ndc_corners() {
        let p = Ortho2D::pixels(400, 200);
        assert_eq!(p.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, -1.0));
        assert_eq!(p.to_ndc(Vec2::new(400.0, 200.0)), Vec2::new(1.0, 1.0));
        assert_eq!(p.to_ndc(Vec2::new(200.0, 100.0)), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn ndc_is_identity() {
        let v = Vec2::new(0.25, -0.75);
        assert_eq!(Ortho2D::NDC.to_ndc(v), v);
    }

    #[test]
    fn zero_sized_surface_stays_valid() {
        assert!(Ortho2D::pixels(0, 0).is_valid());
        assert!(!Ortho2D::new(0.0, 0.0, 0.0, 1.0).is_valid());
    }
}
