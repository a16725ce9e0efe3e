//! Bouncer engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the demo: a polled window
//! context, platform-agnostic input events, a draw list with a projection
//! stack, and the wgpu renderers that present it.

pub mod core;
pub mod device;
pub mod window;
pub mod input;
pub mod time;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
