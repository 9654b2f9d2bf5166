//! Game configuration
//!
//! Screen size, speeds and layout are carried in an explicit `GameConfig`
//! handed to the game at construction. A JSON file may override any subset of
//! the built-in defaults for a variant.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::*;

/// Which game to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Player against computer, paddles move vertically
    #[default]
    Pong,
    /// Single paddle at the bottom, obstacles in the field
    Tennis,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Pong => "pong",
            Variant::Tennis => "tennis",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pong" => Ok(Variant::Pong),
            "tennis" | "breakout" => Ok(Variant::Tennis),
            other => Err(format!("unknown game '{other}' (expected pong or tennis)")),
        }
    }
}

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const WHITE: Colour = Colour::rgb(255, 255, 255);
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for vertex data
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Colours used when drawing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Colour,
    /// Ball, paddles and text
    pub foreground: Colour,
    pub obstacle: Colour,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Colour::BLACK,
            foreground: Colour::WHITE,
            obstacle: Colour::WHITE,
        }
    }
}

/// Placement of a static obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    /// Top-left corner
    pub position: Vec2,
    pub size: Vec2,
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Chosen by the caller, never read from a config file
    #[serde(skip)]
    pub variant: Variant,

    // === Screen ===
    pub width: f32,
    pub height: f32,
    /// Frames per second of the fixed-rate loop
    pub framerate: u32,

    // === Ball ===
    pub ball_radius: f32,
    /// Horizontal launch speed; the vertical component is drawn from [-speed, speed]
    pub ball_speed: f32,

    // === Paddles ===
    pub paddle_size: Vec2,
    pub paddle_speed: f32,

    // === Rules ===
    /// Pong ends when either side reaches this score
    pub winning_score: u32,
    /// Seconds the end screen is shown before the game terminates
    pub end_screen_secs: f32,

    /// Static obstacles (Tennis only)
    pub obstacles: Vec<ObstacleSpec>,

    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::pong()
    }
}

impl GameConfig {
    /// Built-in defaults for a variant
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Pong => Self::pong(),
            Variant::Tennis => Self::tennis(),
        }
    }

    pub fn pong() -> Self {
        Self {
            variant: Variant::Pong,
            width: WIDTH,
            height: HEIGHT,
            framerate: FRAMERATE,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_speed: PADDLE_SPEED,
            winning_score: WINNING_SCORE,
            end_screen_secs: END_SCREEN_SECS,
            obstacles: Vec::new(),
            palette: Palette::default(),
        }
    }

    pub fn tennis() -> Self {
        Self {
            variant: Variant::Tennis,
            paddle_size: Vec2::new(PADDLE_HEIGHT, PADDLE_WIDTH),
            obstacles: vec![ObstacleSpec {
                position: Vec2::new(OBSTACLE_POSITION.0, OBSTACLE_POSITION.1),
                size: Vec2::new(OBSTACLE_SIZE.0, OBSTACLE_SIZE.1),
            }],
            ..Self::pong()
        }
    }

    /// Parse a (possibly partial) JSON object over the variant defaults
    pub fn from_json(variant: Variant, json: &str) -> Result<Self> {
        let overrides: Value = serde_json::from_str(json).context("config is not valid JSON")?;
        if !overrides.is_object() {
            bail!("config must be a JSON object");
        }

        let mut merged = serde_json::to_value(Self::for_variant(variant))?;
        merge_json(&mut merged, overrides);

        let mut config: Self = serde_json::from_value(merged).context("invalid config value")?;
        config.variant = variant;
        config.validate()?;
        Ok(config)
    }

    /// Load overrides from a JSON file
    pub fn load(variant: Variant, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(variant, &text).with_context(|| format!("loading config {}", path.display()))
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            bail!("screen size must be positive, got {}x{}", self.width, self.height);
        }
        if self.framerate == 0 {
            bail!("framerate must be at least 1");
        }
        if !(self.ball_radius > 0.0) {
            bail!("ball_radius must be positive, got {}", self.ball_radius);
        }
        if !(self.ball_speed > 0.0) {
            bail!("ball_speed must be positive, got {}", self.ball_speed);
        }
        if !(self.paddle_speed >= 0.0) {
            bail!("paddle_speed must not be negative, got {}", self.paddle_speed);
        }
        if !(self.paddle_size.x > 0.0 && self.paddle_size.y > 0.0) {
            bail!("paddle_size must be positive, got {}", self.paddle_size);
        }
        if self.paddle_size.x > self.width || self.paddle_size.y > self.height {
            bail!(
                "paddle {} does not fit a {}x{} screen",
                self.paddle_size,
                self.width,
                self.height
            );
        }
        if self.winning_score == 0 {
            bail!("winning_score must be at least 1");
        }
        if !(self.end_screen_secs >= 0.0) {
            bail!("end_screen_secs must not be negative");
        }
        for obstacle in &self.obstacles {
            if !(obstacle.size.x > 0.0 && obstacle.size.y > 0.0) {
                bail!("obstacle at {} has an empty size", obstacle.position);
            }
        }
        Ok(())
    }

    /// Time budget of one frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.framerate.max(1) as f64)
    }

    /// Number of frames the end screen is shown
    pub fn end_screen_frames(&self) -> u32 {
        (self.end_screen_secs * self.framerate as f32).round() as u32
    }

    /// Where the ball is served from (screen center)
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top-left corner of the player paddle at game start
    pub fn player_paddle_origin(&self) -> Vec2 {
        match self.variant {
            Variant::Pong => Vec2::new(0.0, self.height / 2.0 - self.paddle_size.y / 2.0),
            Variant::Tennis => Vec2::new(
                self.width / 2.0 - self.paddle_size.x / 2.0,
                self.height - self.paddle_size.y - TENNIS_PADDLE_MARGIN,
            ),
        }
    }

    /// Top-left corner of the computer paddle, if the variant has one
    pub fn computer_paddle_origin(&self) -> Option<Vec2> {
        match self.variant {
            Variant::Pong => Some(Vec2::new(
                self.width - self.paddle_size.x,
                self.height / 2.0 - self.paddle_size.y / 2.0,
            )),
            Variant::Tennis => None,
        }
    }
}

/// Recursively overlay `overrides` onto `base`, object keys merged, everything else replaced
fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                merge_json(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, overrides) => *base = overrides,
    }
}
