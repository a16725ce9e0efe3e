//! Simulation: the body state and how it advances.

pub mod physics;
mod state;

pub use state::SimulationState;
