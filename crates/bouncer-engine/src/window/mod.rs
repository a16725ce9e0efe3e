//! Window + rendering context.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.

mod context;

pub use context::{WindowConfig, WindowContext};
pub use winit::dpi::PhysicalSize;
