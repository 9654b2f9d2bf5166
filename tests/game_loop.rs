//! Full game loop runs against a scripted platform

use std::collections::HashMap;

use glam::Vec2;
use paddle_arcade::platform::{EventSource, FrameClock, InputEvent};
use paddle_arcade::renderer::Canvas;
use paddle_arcade::sim::{Outcome, ScriptedRandom, Score, seeded};
use paddle_arcade::{Colour, Game, GameConfig, Variant};

/// Primitives drawn for one presented frame
#[derive(Debug, Default, Clone)]
struct Frame {
    background: Option<Colour>,
    circles: usize,
    rects: usize,
    texts: Vec<String>,
}

/// Feeds scripted input by poll index and records what was drawn
#[derive(Default)]
struct ScriptedPlatform {
    script: HashMap<u64, Vec<InputEvent>>,
    polls: u64,
    waits: u64,
    current: Frame,
    frames: Vec<Frame>,
}

impl ScriptedPlatform {
    fn with_input(mut self, poll: u64, events: Vec<InputEvent>) -> Self {
        self.script.insert(poll, events);
        self
    }

    fn frames_showing(&self, text: &str) -> usize {
        self.frames
            .iter()
            .filter(|frame| frame.texts.iter().any(|t| t == text))
            .count()
    }
}

impl EventSource for ScriptedPlatform {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let events = self.script.remove(&self.polls).unwrap_or_default();
        self.polls += 1;
        events
    }
}

impl FrameClock for ScriptedPlatform {
    fn wait_for_next_frame(&mut self) {
        self.waits += 1;
    }
}

impl Canvas for ScriptedPlatform {
    fn clear(&mut self, colour: Colour) {
        self.current = Frame {
            background: Some(colour),
            ..Frame::default()
        };
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _colour: Colour) {
        self.current.circles += 1;
    }

    fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, _colour: Colour) {
        self.current.rects += 1;
    }

    fn draw_text(&mut self, text: &str, _colour: Colour, _origin: Vec2) {
        self.current.texts.push(text.to_string());
    }

    fn text_extent(&self, text: &str) -> Vec2 {
        Vec2::new(text.len() as f32 * 24.0, 28.0)
    }

    fn present(&mut self) {
        self.frames.push(std::mem::take(&mut self.current));
    }
}

#[test]
fn test_quit_before_first_frame() {
    let mut game = Game::new(GameConfig::pong(), Box::new(ScriptedRandom::constant(1.0, 0.0)));
    let mut platform = ScriptedPlatform::default().with_input(0, vec![InputEvent::Quit]);

    let summary = game.run(&mut platform);

    assert_eq!(summary.outcome, None);
    assert_eq!(summary.frames, 0);
    assert!(platform.frames.is_empty());
    assert_eq!(platform.waits, 0);
}

#[test]
fn test_pong_computer_wins_after_three_misses() {
    // Serves go down-left and bounce off the bottom wall past the idle player paddle
    let mut game = Game::new(GameConfig::pong(), Box::new(ScriptedRandom::constant(-1.0, 1.0)));
    let mut platform = ScriptedPlatform::default();

    let summary = game.run(&mut platform);

    assert_eq!(summary.outcome, Some(Outcome::ComputerWins));
    assert_eq!(
        summary.score,
        Score::Versus {
            player: 0,
            computer: 3
        }
    );
    assert_eq!(summary.frames, 234);
    assert_eq!(platform.frames_showing("Computer wins!"), 180);
    assert_eq!(platform.frames_showing("0 - 3"), 180);
    // Playing frames show both tallies
    assert_eq!(platform.frames[0].background, Some(Colour::BLACK));
    assert_eq!(platform.frames[0].texts, vec!["0", "0"]);
    assert_eq!(platform.frames[0].circles, 1);
    assert_eq!(platform.frames[0].rects, 2);
    assert_eq!(platform.frames.len() as u64, platform.waits);
}

#[test]
fn test_pong_player_wins_against_frozen_computer() {
    let config = GameConfig::from_json(Variant::Pong, r#"{ "paddle_speed": 0.0 }"#).unwrap();
    let mut game = Game::new(config, Box::new(ScriptedRandom::constant(1.0, 1.0)));
    let mut platform = ScriptedPlatform::default();

    let summary = game.run(&mut platform);

    assert_eq!(summary.outcome, Some(Outcome::PlayerWins));
    assert_eq!(summary.score, Score::Versus { player: 3, computer: 0 });
    assert_eq!(platform.frames_showing("Player wins!"), 180);
    assert_eq!(platform.frames_showing("3 - 0"), 180);
    let end = platform.frames.last().unwrap();
    assert_eq!(end.circles, 0);
    assert_eq!(end.rects, 0);
}

#[test]
fn test_tennis_game_over_at_bottom_edge() {
    let mut game = Game::new(GameConfig::tennis(), Box::new(ScriptedRandom::constant(-1.0, 1.0)));
    let mut platform = ScriptedPlatform::default();

    let summary = game.run(&mut platform);

    assert_eq!(summary.outcome, Some(Outcome::GameOver));
    assert_eq!(summary.score, Score::Rally(0));
    assert_eq!(summary.frames, 58);
    assert_eq!(platform.frames_showing("Game over."), 180);
    assert_eq!(platform.frames_showing("Score: 0"), 180);
    // Ball, paddle and obstacle while playing
    assert_eq!(platform.frames[0].circles, 1);
    assert_eq!(platform.frames[0].rects, 2);
    assert_eq!(platform.frames[0].texts, vec!["0"]);
}

#[test]
fn test_quit_during_end_screen_stops_immediately() {
    let mut game = Game::new(GameConfig::tennis(), Box::new(ScriptedRandom::constant(-1.0, 1.0)));
    // Poll 57 ends the game; two end-screen frames follow before the quit
    let mut platform = ScriptedPlatform::default().with_input(60, vec![InputEvent::Quit]);

    let summary = game.run(&mut platform);

    assert_eq!(summary.outcome, Some(Outcome::GameOver));
    assert_eq!(platform.frames_showing("Game over."), 3);
    assert_eq!(platform.polls, 61);
}

#[test]
fn test_end_screen_length_follows_config() {
    let config =
        GameConfig::from_json(Variant::Tennis, r#"{ "end_screen_secs": 0.5 }"#).unwrap();
    let mut game = Game::new(config, Box::new(ScriptedRandom::constant(-1.0, 1.0)));
    let mut platform = ScriptedPlatform::default();

    game.run(&mut platform);

    assert_eq!(platform.frames_showing("Game over."), 30);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let run = |seed: u64| {
        let mut game = Game::new(GameConfig::pong(), Box::new(seeded(seed)));
        let mut platform = ScriptedPlatform::default().with_input(400, vec![InputEvent::Quit]);
        let summary = game.run(&mut platform);
        (summary, game.state().ball.clone())
    };

    assert_eq!(run(7), run(7));
}
