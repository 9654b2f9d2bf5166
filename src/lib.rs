//! Paddle Arcade - Pong and a Tennis/Breakout-style variant
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (entities, collisions, scoring, game phases)
//! - `game`: Frame loop driving the simulation over a platform
//! - `renderer`: Drawing surface abstraction and the wgpu pipeline behind it
//! - `platform`: Input, frame pacing and the native window
//! - `config`: Explicit game configuration

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{Colour, GameConfig, Palette, Variant};
pub use game::{Game, RunSummary};

/// Game configuration defaults
pub mod consts {
    /// Screen dimensions in pixels
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;
    /// Fixed frame rate of the game loop
    pub const FRAMERATE: u32 = 60;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 5.0;

    /// Paddle defaults (Pong paddles are tall, the Tennis paddle is wide)
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Gap between the Tennis paddle and the bottom edge
    pub const TENNIS_PADDLE_MARGIN: f32 = 20.0;

    /// Pong ends when either side reaches this score
    pub const WINNING_SCORE: u32 = 3;
    /// How long the end screen stays up
    pub const END_SCREEN_SECS: f32 = 3.0;

    /// Default Tennis obstacle (top-left corner and size)
    pub const OBSTACLE_POSITION: (f32, f32) = (400.0, 150.0);
    pub const OBSTACLE_SIZE: (f32, f32) = (50.0, 50.0);

    /// Distance of score text from the top edge
    pub const SCORE_TEXT_Y: f32 = 10.0;
    /// Pixel size of one bitmap font cell
    pub const TEXT_SCALE: f32 = 4.0;
    /// Triangle fan segments per circle
    pub const CIRCLE_SEGMENTS: u32 = 32;
}
