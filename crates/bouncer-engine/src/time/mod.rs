//! Time subsystem.
//!
//! Provides tick timing utilities without coupling to the window context.
//! Intended usage:
//! - one `TickClock` per loop; call `tick()` once per iteration to obtain `TickTime`
//! - one `TickPacer` per loop; call `pause()` at the end of each iteration

mod pacer;
mod tick_clock;

pub use pacer::TickPacer;
pub use tick_clock::{TickClock, TickTime};
