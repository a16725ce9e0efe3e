//! Per-shape draw payloads and `DrawList` push helpers.

pub mod rect;
pub mod text;
