use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::core::Platform;
use crate::device::{Gpu, GpuInit};
use crate::input::InputEvent;
use crate::input::platform::translate_window_event;
use crate::render::FrameRenderer;
use crate::scene::DrawList;
use crate::text::FontSystem;

/// How long `open` waits for the platform to hand out the window.
const CREATE_TIMEOUT: Duration = Duration::from_secs(5);
const CREATE_PUMP_SLICE: Duration = Duration::from_millis(10);

/// Window configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Initial drawable size in physical pixels.
    pub initial_size: PhysicalSize<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "bouncer".to_string(),
            initial_size: PhysicalSize::new(400, 200),
        }
    }
}

/// Collects translated window events between pumps.
///
/// The window itself is created from `resumed`, the first callback winit
/// delivers once the platform is ready.
struct EventQueue {
    pending_attrs: Option<WindowAttributes>,
    window: Option<Arc<Window>>,
    create_error: Option<winit::error::OsError>,
    events: VecDeque<InputEvent>,
    close_sent: bool,
}

impl EventQueue {
    fn new(attrs: WindowAttributes) -> Self {
        Self {
            pending_attrs: Some(attrs),
            window: None,
            create_error: None,
            events: VecDeque::new(),
            close_sent: false,
        }
    }

    fn push(&mut self, ev: InputEvent) {
        if ev == InputEvent::CloseRequested {
            self.close_sent = true;
        }
        self.events.push_back(ev);
    }
}

impl ApplicationHandler for EventQueue {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attrs) = self.pending_attrs.take() else {
            return;
        };

        match event_loop.create_window(attrs) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => self.create_error = Some(e),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let Some(ev) = translate_window_event(&event) {
            log::trace!("window event {ev:?}");
            self.push(ev);
        }
    }
}

/// One window with its rendering context, driven by manual polling.
///
/// Fields drop in declaration order: renderer and GPU first, then the window,
/// then the event loop (the display connection).
pub struct WindowContext {
    renderer: FrameRenderer,
    fonts: FontSystem,
    gpu: Gpu,
    window: Arc<Window>,
    queue: EventQueue,
    event_loop: EventLoop<()>,
}

impl WindowContext {
    /// Opens the display connection, creates the window and binds a GPU
    /// surface to it.
    ///
    /// Blocks until the adapter and device are ready.
    pub fn open(config: WindowConfig, gpu_init: GpuInit) -> Result<Self> {
        let mut event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size)
            .with_resizable(true);
        let mut queue = EventQueue::new(attrs);

        let started = std::time::Instant::now();
        let window = loop {
            if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(CREATE_PUMP_SLICE), &mut queue) {
                bail!("event loop exited with code {code} before the window was created");
            }
            if let Some(err) = queue.create_error.take() {
                bail!("failed to create window: {err}");
            }
            if let Some(window) = queue.window.clone() {
                break window;
            }
            if started.elapsed() >= CREATE_TIMEOUT {
                bail!("timed out waiting for the platform to create the window");
            }
        };

        log::info!(
            "window {:?} created ({}x{})",
            config.title,
            window.inner_size().width,
            window.inner_size().height
        );

        let gpu = pollster::block_on(Gpu::new(window.clone(), gpu_init))
            .context("GPU initialization failed for window")?;

        Ok(Self {
            renderer: FrameRenderer::new(),
            fonts: FontSystem::new(),
            gpu,
            window,
            queue,
            event_loop,
        })
    }

    /// Fonts available to text commands drawn through this context.
    pub fn fonts_mut(&mut self) -> &mut FontSystem {
        &mut self.fonts
    }

    /// Current drawable size in physical pixels.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    fn pump(&mut self) {
        let status = self.event_loop.pump_app_events(Some(Duration::ZERO), &mut self.queue);
        if let PumpStatus::Exit(code) = status {
            // The platform tore the loop down; surface it once as a close request.
            if !self.queue.close_sent {
                log::debug!("event loop exited with code {code}");
                self.queue.push(InputEvent::CloseRequested);
            }
        }
    }
}

impl Platform for WindowContext {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if self.queue.events.is_empty() {
            self.pump();
        }
        self.queue.events.pop_front()
    }

    fn resize_viewport(&mut self, width: u32, height: u32) {
        self.gpu.resize(PhysicalSize::new(width, height));
    }

    fn swap_buffers(&mut self, frame: &DrawList) -> Result<()> {
        self.window.pre_present_notify();
        if !self.renderer.draw(&mut self.gpu, &self.fonts, frame)? {
            log::trace!("frame skipped");
        }
        Ok(())
    }
}
