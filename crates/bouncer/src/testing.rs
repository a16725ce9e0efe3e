use std::collections::VecDeque;

use anyhow::{Result, bail};
use bouncer_engine::core::Platform;
use bouncer_engine::input::InputEvent;
use bouncer_engine::scene::{DrawItem, DrawList};

/// In-memory platform fed from a script of per-tick event batches.
///
/// Each batch is delivered by successive `poll_event` calls, then a single
/// `None` ends the tick. Once the script runs out every poll reports a close
/// request so loops under test always terminate.
#[derive(Default)]
pub struct ScriptedPlatform {
    batches: VecDeque<VecDeque<InputEvent>>,
    pub viewports: Vec<(u32, u32)>,
    pub frames: Vec<Vec<DrawItem>>,
    /// Projection depth observed by each `swap_buffers`.
    pub frame_depths: Vec<usize>,
    /// Fail the swap with this index (0-based).
    pub fail_swap_at: Option<usize>,
}

impl ScriptedPlatform {
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into_iter().map(VecDeque::from).collect(),
            ..Self::default()
        }
    }
}

impl Platform for ScriptedPlatform {
    fn poll_event(&mut self) -> Option<InputEvent> {
        let Some(batch) = self.batches.front_mut() else {
            return Some(InputEvent::CloseRequested);
        };
        match batch.pop_front() {
            Some(ev) => Some(ev),
            None => {
                self.batches.pop_front();
                None
            }
        }
    }

    fn resize_viewport(&mut self, width: u32, height: u32) {
        self.viewports.push((width, height));
    }

    fn swap_buffers(&mut self, frame: &DrawList) -> Result<()> {
        if self.fail_swap_at == Some(self.frames.len()) {
            bail!("surface is out of memory");
        }
        self.frame_depths.push(frame.projection_depth());
        self.frames.push(frame.items().to_vec());
        Ok(())
    }
}
