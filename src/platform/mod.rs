//! Platform abstraction layer
//!
//! The game loop talks to the outside world through three seams:
//! - `EventSource`: discrete input events, polled once per frame
//! - `Canvas`: drawing primitives and frame presentation
//! - `FrameClock`: fixed-rate frame pacing
//!
//! `native` implements all three with a winit window and wgpu.

pub mod clock;
pub mod native;

pub use clock::FixedRateClock;
pub use native::NativePlatform;

use crate::renderer::Canvas;

/// Keys the games react to; everything else is `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Other,
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or the platform asked to exit
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Source of input events
pub trait EventSource {
    /// All events queued since the last poll; returns immediately when there are none
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Frame pacing
pub trait FrameClock {
    /// Block until at least one frame interval has passed since the previous call
    fn wait_for_next_frame(&mut self);
}

/// Everything the game loop needs from its host
pub trait Platform: Canvas + EventSource + FrameClock {}

impl<T: Canvas + EventSource + FrameClock> Platform for T {}
