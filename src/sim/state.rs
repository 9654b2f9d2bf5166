//! Game state and core simulation types
//!
//! The state owns every entity. Nothing is shared; `tick` is its only mutator.

use std::fmt;

use super::ball::Ball;
use super::obstacle::Obstacle;
use super::paddle::{Axis, Control, Paddle};
use super::rng::RandomSource;
use crate::config::{GameConfig, Variant};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Final message and score on screen for a fixed number of frames
    EndScreen,
    /// Loop is finished; the process should exit
    Terminated,
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    /// Tennis ball reached the bottom edge
    GameOver,
}

impl Outcome {
    /// Message shown on the end screen
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerWins => "Player wins!",
            Outcome::ComputerWins => "Computer wins!",
            Outcome::GameOver => "Game over.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Points scored so far; never reset within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// Pong: one tally per side
    Versus { player: u32, computer: u32 },
    /// Tennis: successful paddle returns
    Rally(u32),
}

impl Score {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Pong => Score::Versus {
                player: 0,
                computer: 0,
            },
            Variant::Tennis => Score::Rally(0),
        }
    }

    /// Credit one point to `side` (Tennis has a single tally)
    pub fn award(&mut self, side: Control) {
        match self {
            Score::Versus { player, .. } if side == Control::Player => *player += 1,
            Score::Versus { computer, .. } => *computer += 1,
            Score::Rally(points) => *points += 1,
        }
    }

    /// Final score line for the end screen
    pub fn summary(&self) -> String {
        match self {
            Score::Versus { player, computer } => format!("{player} - {computer}"),
            Score::Rally(points) => format!("Score: {points}"),
        }
    }
}

/// Things that happened during a frame, drained by the game runner for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PaddleHit(Control),
    WallBounce,
    ObstacleHit,
    PointScored(Control),
    Ended(Outcome),
    Quit,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    pub config: GameConfig,
    /// Current phase
    pub phase: GamePhase,
    pub ball: Ball,
    /// Player paddle
    pub player: Paddle,
    /// Computer paddle (Pong only)
    pub computer: Option<Paddle>,
    /// Static obstacles (Tennis only)
    pub obstacles: Vec<Obstacle>,
    pub score: Score,
    /// Set when the end screen is entered
    pub outcome: Option<Outcome>,
    /// Frames of end screen left to show
    pub end_frames_left: u32,
    /// Playing frames simulated so far
    pub frame: u64,
    /// Events of the current frame
    pub events: Vec<GameEvent>,
    rng: Box<dyn RandomSource>,
}

impl GameState {
    /// Lay out a fresh game for `config.variant`
    pub fn new(config: GameConfig, mut rng: Box<dyn RandomSource>) -> Self {
        let ball = Ball::new(
            config.ball_spawn(),
            config.ball_speed,
            config.ball_radius,
            rng.as_mut(),
        );

        let axis = match config.variant {
            Variant::Pong => Axis::Vertical,
            Variant::Tennis => Axis::Horizontal,
        };
        let player = Paddle::new(
            config.player_paddle_origin(),
            config.paddle_size,
            config.paddle_speed,
            axis,
            Control::Player,
        );
        let computer = config.computer_paddle_origin().map(|origin| {
            Paddle::new(
                origin,
                config.paddle_size,
                config.paddle_speed,
                axis,
                Control::Computer,
            )
        });

        let obstacles = match config.variant {
            Variant::Pong => Vec::new(),
            Variant::Tennis => config.obstacles.iter().map(Obstacle::from).collect(),
        };

        Self {
            score: Score::for_variant(config.variant),
            config,
            phase: GamePhase::Playing,
            ball,
            player,
            computer,
            obstacles,
            outcome: None,
            end_frames_left: 0,
            frame: 0,
            events: Vec::new(),
            rng,
        }
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    /// Put the ball back at the center with a new random velocity
    pub fn respawn_ball(&mut self) {
        self.ball.reset(
            self.config.ball_spawn(),
            self.config.ball_speed,
            self.config.ball_radius,
            self.rng.as_mut(),
        );
    }

    /// Switch to the end screen
    pub fn finish(&mut self, outcome: Outcome) {
        self.phase = GamePhase::EndScreen;
        self.outcome = Some(outcome);
        self.end_frames_left = self.config.end_screen_frames();
        self.events.push(GameEvent::Ended(outcome));
    }

    /// Stop immediately
    pub fn terminate(&mut self) {
        self.phase = GamePhase::Terminated;
    }

    /// Paddles currently in play, player first
    pub fn paddles(&self) -> impl Iterator<Item = &Paddle> {
        std::iter::once(&self.player).chain(self.computer.as_ref())
    }

    /// Take this frame's events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
