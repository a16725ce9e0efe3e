use anyhow::Result;

use crate::input::InputEvent;
use crate::scene::DrawList;

/// What a simulation loop needs from the windowing and graphics system.
///
/// Implemented by [`WindowContext`](crate::window::WindowContext); tests
/// provide scripted implementations.
pub trait Platform {
    /// Returns the next pending event, or `None` if the queue is empty.
    ///
    /// Never blocks.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Adapts the drawable area to a new size in physical pixels.
    fn resize_viewport(&mut self, width: u32, height: u32);

    /// Renders `frame` and makes it visible.
    ///
    /// Transient surface problems skip the frame and return `Ok`. An error
    /// means the surface is unusable.
    fn swap_buffers(&mut self, frame: &DrawList) -> Result<()>;
}
