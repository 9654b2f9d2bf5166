//! Desktop platform: winit window, wgpu rendering, sleeping frame clock
//!
//! The event loop is pumped once per frame instead of owning the main thread,
//! so the game keeps its own blocking input -> update -> render loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use super::clock::FixedRateClock;
use super::{EventSource, FrameClock, InputEvent, Key};
use crate::config::{Colour, GameConfig};
use crate::renderer::{Canvas, RenderState, VertexCanvas};

/// Pumps allowed for the window to come up
const STARTUP_PUMPS: u32 = 200;
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Window and GPU state driven by winit callbacks
struct WindowApp {
    title: String,
    screen: Vec2,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    init_error: Option<anyhow::Error>,
    pending: Vec<InputEvent>,
}

impl WindowApp {
    fn new(title: String, screen: Vec2) -> Self {
        Self {
            title,
            screen,
            window: None,
            render_state: None,
            init_error: None,
            pending: Vec::new(),
        }
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.screen.x as f64, self.screen.y as f64))
            .with_resizable(false);
        let window = event_loop
            .create_window(attributes)
            .map_err(|e| anyhow!("failed to open window: {e}"))?;
        let window = Arc::new(window);

        let size = window.inner_size();
        let render_state = pollster::block_on(RenderState::new(
            window.clone(),
            size.width,
            size.height,
            self.screen,
        ))?;

        log::info!("Window opened at {}x{} physical pixels", size.width, size.height);
        self.window = Some(window);
        self.render_state = Some(render_state);
        Ok(())
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_error.is_some() {
            return;
        }
        if let Err(err) = self.open_window(event_loop) {
            log::error!("Window setup failed: {err:#}");
            self.init_error = Some(err);
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.pending.push(InputEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(input) = translate_key_event(&event) {
                    self.pending.push(input);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            _ => {}
        }
    }
}

/// Native desktop host for the game loop
pub struct NativePlatform {
    event_loop: EventLoop<()>,
    app: WindowApp,
    canvas: VertexCanvas,
    clock: FixedRateClock,
}

impl NativePlatform {
    /// Open a window sized to the configured screen
    pub fn new(config: &GameConfig) -> Result<Self> {
        let mut event_loop =
            EventLoop::new().map_err(|e| anyhow!("failed to start event loop: {e}"))?;
        let mut app = WindowApp::new(
            format!("Paddle Arcade - {}", config.variant),
            Vec2::new(config.width, config.height),
        );

        // The first pumps deliver `resumed`, which opens the window
        for _ in 0..STARTUP_PUMPS {
            if let PumpStatus::Exit(code) =
                event_loop.pump_app_events(Some(STARTUP_PUMP_TIMEOUT), &mut app)
            {
                bail!("event loop exited during startup (code {code})");
            }
            if let Some(err) = app.init_error.take() {
                return Err(err);
            }
            if app.render_state.is_some() {
                break;
            }
        }
        if app.render_state.is_none() {
            bail!("window was not created");
        }

        Ok(Self {
            event_loop,
            app,
            canvas: VertexCanvas::default(),
            clock: FixedRateClock::new(config.frame_interval()),
        })
    }
}

impl EventSource for NativePlatform {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        if let PumpStatus::Exit(_) = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.app)
        {
            self.app.pending.push(InputEvent::Quit);
        }
        std::mem::take(&mut self.app.pending)
    }
}

impl FrameClock for NativePlatform {
    fn wait_for_next_frame(&mut self) {
        self.clock.wait_for_next_frame();
    }
}

impl Canvas for NativePlatform {
    fn clear(&mut self, colour: Colour) {
        self.canvas.clear(colour);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, colour: Colour) {
        self.canvas.fill_circle(center, radius, colour);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, colour: Colour) {
        self.canvas.fill_rect(origin, size, colour);
    }

    fn draw_text(&mut self, text: &str, colour: Colour, origin: Vec2) {
        self.canvas.draw_text(text, colour, origin);
    }

    fn text_extent(&self, text: &str) -> Vec2 {
        self.canvas.text_extent(text)
    }

    fn present(&mut self) {
        self.canvas.present();
        let Some(render_state) = self.app.render_state.as_mut() else {
            return;
        };
        match render_state.render(self.canvas.frame(), self.canvas.background()) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

/// Map a winit key event; auto-repeat is dropped
fn translate_key_event(event: &KeyEvent) -> Option<InputEvent> {
    if event.repeat {
        return None;
    }
    let key = translate_key(event.physical_key);
    Some(match event.state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}

fn translate_key(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(KeyCode::ArrowUp) => Key::Up,
        PhysicalKey::Code(KeyCode::ArrowDown) => Key::Down,
        PhysicalKey::Code(KeyCode::ArrowLeft) => Key::Left,
        PhysicalKey::Code(KeyCode::ArrowRight) => Key::Right,
        _ => Key::Other,
    }
}
