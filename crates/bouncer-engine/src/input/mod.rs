//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The window context translates platform events into `InputEvent`s.

pub(crate) mod platform;
mod state;
mod types;

pub use state::PointerTracker;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
