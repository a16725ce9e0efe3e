use super::types::PointerMoveEvent;

/// Last seen pointer position.
///
/// Nothing in the simulation reacts to the pointer yet; the tracker only
/// reports whether a motion event actually moved it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    /// Pointer position in physical pixels, `None` until the first motion event.
    pub last: Option<(f32, f32)>,
}

impl PointerTracker {
    /// Records a motion event. Returns `true` if the position changed.
    pub fn record(&mut self, ev: PointerMoveEvent) -> bool {
        let pos = (ev.x, ev.y);
        if self.last == Some(pos) {
            return false;
        }
        self.last = Some(pos);
        true
    }
}
