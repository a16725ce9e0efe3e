use anyhow::{Context, Result};
use bouncer_engine::core::Platform;
use bouncer_engine::input::PointerTracker;
use bouncer_engine::scene::DrawList;
use bouncer_engine::time::{TickClock, TickPacer};

use crate::config::RunConfig;
use crate::controls::{self, Signal};
use crate::scene;
use crate::sim::{SimulationState, physics};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub bounces: u64,
}

/// Drives the simulation until an exit request.
///
/// One tick: drain input, step physics, record and present a frame, sleep.
/// The tick that sees the exit request is still stepped and presented.
pub fn run<P: Platform + ?Sized>(
    platform: &mut P,
    state: &mut SimulationState,
    config: &RunConfig,
) -> Result<RunSummary> {
    let pacer = TickPacer::new(config.tick_delay);
    let mut clock = TickClock::new();
    let mut pointer = PointerTracker::default();
    let mut frame = DrawList::new();
    let mut loop_state = LoopState::Running;

    log::info!(
        "running at {}x{}, tick delay {:?}",
        state.width,
        state.height,
        pacer.delay()
    );

    while loop_state == LoopState::Running {
        let time = clock.tick();

        if controls::drain_events(platform, state, &mut pointer) == Signal::Exit {
            loop_state = LoopState::Terminated;
        }

        let report = physics::step(state);
        if report.hit_x {
            log::debug!("bounce #{} at tick {}", state.bounces, time.index);
        }
        log::trace!(
            "tick {} dt {:.4}s pos ({:.1}, {:.1})",
            time.index,
            time.dt,
            state.position.x,
            state.position.y
        );

        scene::record(state, &config.style, &mut frame);
        platform
            .swap_buffers(&frame)
            .with_context(|| format!("failed to present tick {}", time.index))?;

        if loop_state == LoopState::Running {
            pacer.pause();
        }
    }

    let summary = RunSummary { ticks: clock.ticks(), bounces: state.bounces };
    log::info!("stopped after {} ticks, {} bounces", summary.ticks, summary.bounces);
    Ok(summary)
}
