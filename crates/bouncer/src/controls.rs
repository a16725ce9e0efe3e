use bouncer_engine::core::Platform;
use bouncer_engine::input::{InputEvent, Key, KeyState, PointerTracker};

use crate::sim::SimulationState;

/// Velocity multiplier for the slow-down key.
pub const SLOW_FACTOR: f32 = 0.8;
/// Velocity multiplier for the speed-up key.
pub const FAST_FACTOR: f32 = 1.2;

pub const SLOW_KEY: Key = Key::S;
pub const FAST_KEY: Key = Key::F;
pub const EXIT_KEY: Key = Key::Escape;

/// Outcome of draining the event queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Exit,
}

/// Dispatches every pending event.
///
/// Stops at the first exit request; events queued behind it stay undelivered.
pub fn drain_events<P: Platform + ?Sized>(
    platform: &mut P,
    state: &mut SimulationState,
    pointer: &mut PointerTracker,
) -> Signal {
    while let Some(event) = platform.poll_event() {
        if dispatch(platform, state, pointer, event) == Signal::Exit {
            return Signal::Exit;
        }
    }
    Signal::Continue
}

fn dispatch<P: Platform + ?Sized>(
    platform: &mut P,
    state: &mut SimulationState,
    pointer: &mut PointerTracker,
    event: InputEvent,
) -> Signal {
    match event {
        InputEvent::Resized { width, height } => {
            if state.resize(width, height) {
                log::debug!("resized to {width}x{height}");
                platform.resize_viewport(width, height);
            }
        }

        InputEvent::PointerMoved(ev) => {
            if pointer.record(ev) {
                log::trace!("pointer at ({}, {})", ev.x, ev.y);
            }
        }

        InputEvent::PointerButton(ev) => {
            log::trace!("pointer button {:?} {:?}", ev.button, ev.state);
        }

        // Auto-repeat arrives as further presses and is handled the same.
        InputEvent::Key { key, state: KeyState::Pressed, .. } => match key {
            SLOW_KEY => {
                state.scale_velocity(SLOW_FACTOR);
                log::debug!("slower: v = ({}, {})", state.velocity.x, state.velocity.y);
            }
            FAST_KEY => {
                state.scale_velocity(FAST_FACTOR);
                log::debug!("faster: v = ({}, {})", state.velocity.x, state.velocity.y);
            }
            EXIT_KEY => {
                log::info!("exit key pressed");
                return Signal::Exit;
            }
            _ => {}
        },

        InputEvent::Key { .. } => {}

        InputEvent::CloseRequested => {
            log::info!("window close requested");
            return Signal::Exit;
        }
    }
    Signal::Continue
}
