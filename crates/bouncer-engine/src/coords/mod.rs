//! Coordinate and geometry types shared by the scene and the renderers.
//!
//! Canonical CPU space:
//! - pixels, origin bottom-left, +X right, +Y up
//! - the active `Ortho2D` projection maps that space to NDC
//!
//! Renderers convert to NDC in shaders using a per-instance transform
//! derived from the projection.

mod ortho;
mod rect;
mod vec2;

pub use ortho::Ortho2D;
pub use rect::Rect;
pub use vec2::Vec2;
