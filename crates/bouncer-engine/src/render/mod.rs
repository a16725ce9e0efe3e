//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in the coordinates of the item's `Ortho2D` projection.
//! - Each instance carries the projection's NDC scale/offset; the vertex shader
//!   applies it.

mod ctx;
mod frame;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use frame::FrameRenderer;
