use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::coords::ViewportSize;
use crate::input::platform::translate_window_event;
use crate::input::{ClockEvent, EventSource};

/// Pumps allowed for the platform to deliver `resumed` at startup.
const STARTUP_PUMPS: usize = 16;
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Fallback window size when no monitor is reported.
const FALLBACK_SIZE: PhysicalSize<u32> = PhysicalSize::new(640, 360);

/// Window configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Inner size in physical pixels. `None` uses a third of the primary monitor.
    pub initial_size: Option<ViewportSize>,
    pub resizable: bool,
    /// Center the window on the primary monitor.
    pub centered: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glyphclock".to_string(),
            initial_size: None,
            resizable: true,
            centered: true,
        }
    }
}

/// Owns the winit event loop and the single clock window.
///
/// Instead of handing control to `EventLoop::run_app`, the loop is pumped
/// from [`EventSource::wait_event`] with a timeout, so the caller keeps
/// control of timing on the main thread.
pub struct Platform {
    event_loop: EventLoop<()>,
    handler: PumpHandler,
    exited: bool,
}

impl Platform {
    /// Creates the event loop and opens the window.
    ///
    /// Fails if the platform cannot create an event loop or a window.
    pub fn open(config: WindowConfig) -> Result<(Self, Arc<Window>)> {
        let mut event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut handler = PumpHandler::new(config);

        for _ in 0..STARTUP_PUMPS {
            let status = event_loop.pump_app_events(Some(STARTUP_PUMP_TIMEOUT), &mut handler);

            if let Some(err) = handler.init_error.take() {
                return Err(err);
            }

            if let Some(window) = handler.window.clone() {
                let platform = Self {
                    event_loop,
                    handler,
                    exited: false,
                };
                return Ok((platform, window));
            }

            if let PumpStatus::Exit(code) = status {
                anyhow::bail!("event loop exited during startup (code {code})");
            }
        }

        anyhow::bail!("platform did not resume after {STARTUP_PUMPS} pumps; no window was created")
    }
}

impl EventSource for Platform {
    fn wait_event(&mut self, timeout: Duration) -> Result<Option<ClockEvent>> {
        if let Some(ev) = self.handler.queue.pop_front() {
            return Ok(Some(ev));
        }

        if self.exited {
            return Ok(Some(ClockEvent::Quit));
        }

        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(Some(timeout), &mut self.handler) {
            log::debug!("event loop exit requested (code {code})");
            self.exited = true;
            self.handler.queue.push_back(ClockEvent::Quit);
        }

        Ok(self.handler.queue.pop_front())
    }
}

struct PumpHandler {
    config: WindowConfig,
    window: Option<Arc<Window>>,
    init_error: Option<anyhow::Error>,
    queue: VecDeque<ClockEvent>,
}

impl PumpHandler {
    fn new(config: WindowConfig) -> Self {
        Self {
            config,
            window: None,
            init_error: None,
            queue: VecDeque::new(),
        }
    }
}

impl ApplicationHandler for PumpHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match create_window(event_loop, &self.config) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => self.init_error = Some(e),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.window.as_ref().is_some_and(|w| w.id() != window_id) {
            return;
        }

        let ev = translate_window_event(&event);
        if ev == ClockEvent::Other {
            log::trace!("window event {event:?}");
        } else {
            log::debug!("window event {ev:?}");
        }
        self.queue.push_back(ev);
    }
}

fn create_window(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Window> {
    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next());

    let size = config
        .initial_size
        .map(|s| PhysicalSize::new(s.width.max(1), s.height.max(1)))
        .unwrap_or_else(|| default_window_size(monitor.as_ref().map(|m| m.size())));

    let mut attrs = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(size)
        .with_resizable(config.resizable);

    if config.centered {
        if let Some(m) = &monitor {
            attrs = attrs.with_position(centered_position(m.position(), m.size(), size));
        }
    }

    let window = event_loop
        .create_window(attrs)
        .context("failed to create window")?;

    log::info!(
        "window created: {:?} {}x{}",
        config.title,
        window.inner_size().width,
        window.inner_size().height
    );
    Ok(window)
}

/// One third of the monitor in each dimension.
pub fn default_window_size(monitor: Option<PhysicalSize<u32>>) -> PhysicalSize<u32> {
    match monitor {
        Some(m) if m.width > 0 && m.height > 0 => {
            PhysicalSize::new((m.width / 3).max(1), (m.height / 3).max(1))
        }
        _ => FALLBACK_SIZE,
    }
}

fn centered_position(
    origin: PhysicalPosition<i32>,
    monitor: PhysicalSize<u32>,
    window: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let dx = (monitor.width as i64 - window.width as i64) / 2;
    let dy = (monitor.height as i64 - window.height as i64) / 2;
    PhysicalPosition::new(origin.x + dx.max(0) as i32, origin.y + dy.max(0) as i32)
}
