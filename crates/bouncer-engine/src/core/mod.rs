//! Core engine-facing contracts.
//!
//! Defines the interface between the platform layer (window, GPU) and the
//! code that drives a simulation loop. Loops are written against
//! [`Platform`] so they can run headless in tests.

mod platform;

pub use platform::Platform;
