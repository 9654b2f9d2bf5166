//! Game runner
//!
//! Drives the simulation over a `Platform`: poll input, tick, draw, present,
//! then wait for the next frame. Returns once the state is terminated.

use glam::Vec2;

use crate::config::GameConfig;
use crate::consts::SCORE_TEXT_Y;
use crate::platform::{InputEvent, Platform};
use crate::renderer::Canvas;
use crate::sim::{GameEvent, GamePhase, GameState, Outcome, RandomSource, Score, tick};

/// What a finished run looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// `None` when the player quit before the game ended
    pub outcome: Option<Outcome>,
    pub score: Score,
    /// Playing frames simulated
    pub frames: u64,
}

/// One game session
#[derive(Debug)]
pub struct Game {
    state: GameState,
}

impl Game {
    pub fn new(config: GameConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            state: GameState::new(config, rng),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run until the game terminates
    pub fn run<P: Platform + ?Sized>(&mut self, platform: &mut P) -> RunSummary {
        let config = &self.state.config;
        log::info!(
            "Starting {} on a {}x{} screen at {} fps",
            config.variant,
            config.width,
            config.height,
            config.framerate
        );

        loop {
            let input = platform.poll_events();
            if self.step(&input) == GamePhase::Terminated {
                break;
            }
            self.draw(platform);
            platform.present();
            platform.wait_for_next_frame();
        }

        let summary = self.summary();
        log::info!(
            "Finished after {} frames: {} ({})",
            summary.frames,
            summary.outcome.map_or("quit", |outcome| outcome.message()),
            summary.score.summary()
        );
        summary
    }

    /// Advance one frame and log what happened
    pub fn step(&mut self, input: &[InputEvent]) -> GamePhase {
        tick(&mut self.state, input);
        for event in self.state.drain_events() {
            log_event(event, &self.state.score);
        }
        self.state.phase
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            outcome: self.state.outcome,
            score: self.state.score,
            frames: self.state.frame,
        }
    }

    /// Draw the current frame; does not present it
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let palette = self.state.config.palette;
        canvas.clear(palette.background);

        match (self.state.phase, self.state.outcome) {
            (GamePhase::EndScreen, Some(outcome)) => self.draw_end_screen(canvas, outcome),
            _ => {
                self.state.ball.draw(canvas, palette.foreground);
                for paddle in self.state.paddles() {
                    paddle.draw(canvas, palette.foreground);
                }
                for obstacle in &self.state.obstacles {
                    obstacle.draw(canvas, palette.obstacle);
                }
                self.draw_score(canvas);
            }
        }
    }

    fn draw_score<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let colour = self.state.config.palette.foreground;
        let width = self.state.config.width;
        match self.state.score {
            Score::Versus { player, computer } => {
                canvas.draw_text(&player.to_string(), colour, Vec2::new(width / 4.0, SCORE_TEXT_Y));
                canvas.draw_text(
                    &computer.to_string(),
                    colour,
                    Vec2::new(width * 3.0 / 4.0, SCORE_TEXT_Y),
                );
            }
            Score::Rally(points) => {
                let text = points.to_string();
                let x = (width - canvas.text_extent(&text).x) / 2.0;
                canvas.draw_text(&text, colour, Vec2::new(x, SCORE_TEXT_Y));
            }
        }
    }

    /// Outcome message centered on screen with the final score beneath
    fn draw_end_screen<C: Canvas + ?Sized>(&self, canvas: &mut C, outcome: Outcome) {
        let colour = self.state.config.palette.foreground;
        let screen = Vec2::new(self.state.config.width, self.state.config.height);

        let message = outcome.message();
        let message_size = canvas.text_extent(message);
        let message_origin = (screen - message_size) / 2.0;
        canvas.draw_text(message, colour, message_origin);

        let score = self.state.score.summary();
        let score_size = canvas.text_extent(&score);
        let score_origin = Vec2::new(
            (screen.x - score_size.x) / 2.0,
            message_origin.y + message_size.y * 2.0,
        );
        canvas.draw_text(&score, colour, score_origin);
    }
}

fn log_event(event: GameEvent, score: &Score) {
    match event {
        GameEvent::PointScored(side) => log::info!("Point to {:?}, score {}", side, score.summary()),
        GameEvent::Ended(outcome) => log::info!("{}", outcome),
        GameEvent::Quit => log::info!("Quit requested"),
        GameEvent::PaddleHit(side) => log::debug!("{:?} paddle hit", side),
        GameEvent::WallBounce => log::debug!("Wall bounce"),
        GameEvent::ObstacleHit => log::debug!("Obstacle hit"),
    }
}
