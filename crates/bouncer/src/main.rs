mod config;
mod controls;
mod run;
mod scene;
mod sim;

#[cfg(test)]
mod testing;

use std::process::ExitCode;

use anyhow::{Context, Result};
use bouncer_engine::device::GpuInit;
use bouncer_engine::logging::{LoggingConfig, init_logging};
use bouncer_engine::text::{FontId, find_system_monospace};
use bouncer_engine::window::{PhysicalSize, WindowConfig, WindowContext};

use config::{RunConfig, SceneStyle, SimConfig, WINDOW_TITLE};
use run::RunSummary;
use sim::SimulationState;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match try_main() {
        Ok(summary) => {
            log::debug!("{summary:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("bouncer: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<RunSummary> {
    let sim = SimConfig::default();
    let (width, height) = sim.resolution;

    let mut window = WindowContext::open(
        WindowConfig {
            title: WINDOW_TITLE.to_string(),
            initial_size: PhysicalSize::new(width, height),
        },
        GpuInit::default(),
    )
    .context("startup failed")?;

    let config = RunConfig {
        style: SceneStyle { font: load_font(&mut window), ..SceneStyle::default() },
        ..RunConfig::default()
    };

    let mut state = SimulationState::new(&sim);
    // The window manager may not honor the requested size.
    let actual = window.size();
    state.resize(actual.width, actual.height);

    run::run(&mut window, &mut state, &config)
}

/// Loads a monospace system font for the label. The label is skipped without one.
fn load_font(window: &mut WindowContext) -> Option<FontId> {
    let Some((path, bytes)) = find_system_monospace() else {
        log::warn!("no monospace system font found; the key legend will not be drawn");
        return None;
    };

    match window.fonts_mut().load_font(&bytes) {
        Ok(id) => {
            log::debug!("label font: {}", path.display());
            Some(id)
        }
        Err(e) => {
            log::warn!("{}: {e}; the key legend will not be drawn", path.display());
            None
        }
    }
}
