use crate::coords::Ortho2D;
use crate::paint::Color;

use super::DrawCmd;

/// A single draw item: command + the projection it was recorded under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    pub projection: Ortho2D,
}

/// Recorded draw stream for a frame.
///
/// Items are painted in insertion order over a surface cleared to
/// [`clear_color`](Self::clear_color).
///
/// # Projections
///
/// Use [`push_projection`](Self::push_projection) /
/// [`pop_projection`](Self::pop_projection) or the scoped
/// [`with_projection`](Self::with_projection) to select the coordinate space of
/// subsequent commands. With an empty stack commands are in NDC.
///
/// ```ignore
/// frame.with_projection(Ortho2D::pixels(w, h), |frame| {
///     frame.push_solid_rect(rect, color);
/// });
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    clear_color: Color,
    items: Vec<DrawItem>,
    projection_stack: Vec<Ortho2D>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the projection stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.projection_stack.clear();
    }

    #[inline]
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command under the current projection.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem {
            cmd,
            projection: self.current_projection(),
        });
    }

    /// Projection applied to commands pushed now.
    #[inline]
    pub fn current_projection(&self) -> Ortho2D {
        self.projection_stack.last().copied().unwrap_or(Ortho2D::NDC)
    }

    /// Number of projections currently pushed.
    #[inline]
    pub fn projection_depth(&self) -> usize {
        self.projection_stack.len()
    }

    /// Replaces the current projection until the matching [`pop_projection`](Self::pop_projection).
    ///
    /// Calls must be balanced with `pop_projection`.
    #[inline]
    pub fn push_projection(&mut self, projection: Ortho2D) {
        debug_assert!(projection.is_valid(), "degenerate projection {projection:?}");
        self.projection_stack.push(projection);
    }

    /// Restores the projection that was active before the last `push_projection`.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_projection`.
    #[inline]
    pub fn pop_projection(&mut self) {
        debug_assert!(
            !self.projection_stack.is_empty(),
            "pop_projection called without matching push_projection"
        );
        self.projection_stack.pop();
    }

    /// Runs `f` with `projection` pushed, popping it afterwards.
    pub fn with_projection<R>(&mut self, projection: Ortho2D, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.projection_depth();
        self.push_projection(projection);
        let out = f(self);
        self.pop_projection();
        debug_assert_eq!(depth, self.projection_depth(), "unbalanced projection stack inside scope");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::text::FontId;

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 1.0, 1.0)
    }

    #[test]
    fn empty_stack_records_ndc() {
        let mut list = DrawList::new();
        list.push_solid_rect(rect(), Color::WHITE);
        assert_eq!(list.items()[0].projection, Ortho2D::NDC);
    }

    #[test]
    fn items_capture_projection_at_push_time() {
        let mut list = DrawList::new();
        let world = Ortho2D::pixels(400, 200);
        let screen = Ortho2D::pixels(800, 600);

        list.with_projection(world, |list| {
            list.push_solid_rect(rect(), Color::WHITE);
            list.with_projection(screen, |list| {
                list.push_text("hi", FontId(0), 15.0, Color::WHITE, Vec2::new(10.0, 10.0));
            });
            list.push_solid_rect(rect(), Color::BLACK);
        });

        let projections: Vec<_> = list.items().iter().map(|i| i.projection).collect();
        assert_eq!(projections, vec![world, screen, world]);
        assert_eq!(list.projection_depth(), 0);
    }

    #[test]
    fn clear_resets_items_and_stack() {
        let mut list = DrawList::new();
        list.push_projection(Ortho2D::pixels(10, 10));
        list.push_solid_rect(rect(), Color::WHITE);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.projection_depth(), 0);
    }

    #[test]
    fn clear_keeps_clear_color() {
        let mut list = DrawList::new();
        let gray = Color::rgb(0.1, 0.1, 0.1);
        list.set_clear_color(gray);
        list.clear();
        assert_eq!(list.clear_color(), gray);
    }
}
