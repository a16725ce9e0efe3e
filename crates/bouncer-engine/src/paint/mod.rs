//! Paint model shared between the scene and renderers.
//!
//! Only solid colors exist; geometry types remain in `coords`.

pub mod color;

pub use color::Color;
