use super::Vec2;

/// Axis-aligned rectangle in pixels.
///
/// `origin` is the corner with the smallest coordinates (bottom-left in the
/// +Y up pixel space).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Square or rectangle centered on `center`, extending `half` on each side.
    #[inline]
    pub fn from_center_half_extent(center: Vec2, half: Vec2) -> Self {
        Self {
            origin: center - half,
            size: half * 2.0,
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── from_center_half_extent ───────────────────────────────────────────

    #[test]
    fn centered_square_spans_both_sides() {
        let rect = Rect::from_center_half_extent(Vec2::new(20.0, 100.0), Vec2::new(20.0, 20.0));
        assert_eq!(rect.min(), Vec2::new(0.0, 80.0));
        assert_eq!(rect.max(), Vec2::new(40.0, 120.0));
        assert_eq!(rect.center(), Vec2::new(20.0, 100.0));
    }

    #[test]
    fn zero_half_extent_is_empty() {
        let rect = Rect::from_center_half_extent(Vec2::new(5.0, 5.0), Vec2::zero());
        assert!(rect.is_empty());
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_extents() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }
}
