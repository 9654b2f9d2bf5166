//! Fixed frame simulation tick
//!
//! One call advances the game by exactly one frame:
//! input -> movement -> collisions -> scoring / end checks.

use super::collision::{
    Side, ball_obstacle_contact, hits_horizontal_edge, hits_vertical_edge, pong_paddle_contact,
    tennis_paddle_contact,
};
use super::paddle::Control;
use super::state::{GameEvent, GamePhase, GameState, Outcome, Score};
use crate::config::Variant;
use crate::platform::InputEvent;

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &[InputEvent]) {
    match state.phase {
        GamePhase::Terminated => return,
        GamePhase::EndScreen => {
            tick_end_screen(state, input);
            return;
        }
        GamePhase::Playing => {}
    }

    if apply_input(state, input) {
        state.events.push(GameEvent::Quit);
        state.terminate();
        return;
    }

    state.frame += 1;

    state.ball.advance();
    state.player.advance(&state.ball);
    if let Some(computer) = &mut state.computer {
        computer.advance(&state.ball);
    }

    match state.variant() {
        Variant::Pong => {
            pong_collisions(state);
            pong_scoring(state);
        }
        Variant::Tennis => {
            tennis_collisions(state);
            tennis_end_check(state);
        }
    }
}

/// Consume all pending input; returns true on quit
fn apply_input(state: &mut GameState, input: &[InputEvent]) -> bool {
    for event in input {
        match *event {
            InputEvent::Quit => return true,
            InputEvent::KeyDown(key) => {
                state.player.steer(key, true);
            }
            InputEvent::KeyUp(key) => {
                state.player.steer(key, false);
            }
        }
    }
    false
}

/// Count down the end screen; quit skips the rest
fn tick_end_screen(state: &mut GameState, input: &[InputEvent]) {
    if input.contains(&InputEvent::Quit) {
        state.events.push(GameEvent::Quit);
        state.terminate();
        return;
    }
    state.end_frames_left = state.end_frames_left.saturating_sub(1);
    if state.end_frames_left == 0 {
        state.terminate();
    }
}

fn pong_collisions(state: &mut GameState) {
    let ball = &mut state.ball;

    // Paddle faces send the ball back toward the other side
    if pong_paddle_contact(ball, &state.player, Side::Left) {
        ball.vel.x = ball.vel.x.abs();
        state.events.push(GameEvent::PaddleHit(Control::Player));
    } else if state
        .computer
        .as_ref()
        .is_some_and(|computer| pong_paddle_contact(ball, computer, Side::Right))
    {
        ball.vel.x = -ball.vel.x.abs();
        state.events.push(GameEvent::PaddleHit(Control::Computer));
    }

    if hits_horizontal_edge(ball, state.config.height) {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    let height = state.config.height;
    state.player.clamp_within(height);
    if let Some(computer) = &mut state.computer {
        computer.clamp_within(height);
    }
}

fn pong_scoring(state: &mut GameState) {
    let scorer = if state.ball.right() >= state.config.width {
        Some(Control::Player)
    } else if state.ball.left() <= 0.0 {
        Some(Control::Computer)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        state.score.award(scorer);
        state.events.push(GameEvent::PointScored(scorer));
        state.respawn_ball();
    }

    if let Score::Versus { player, computer } = state.score {
        let target = state.config.winning_score;
        if player >= target {
            state.finish(Outcome::PlayerWins);
        } else if computer >= target {
            state.finish(Outcome::ComputerWins);
        }
    }
}

fn tennis_collisions(state: &mut GameState) {
    let ball = &mut state.ball;

    // Every frame of contact flips and scores, even a second frame in a row
    if tennis_paddle_contact(ball, &state.player) {
        ball.vel.y = -ball.vel.y;
        state.score.award(Control::Player);
        state.events.push(GameEvent::PaddleHit(Control::Player));
    }

    if hits_vertical_edge(ball, state.config.width) {
        ball.vel.x = -ball.vel.x;
        state.events.push(GameEvent::WallBounce);
    }
    if ball.top() <= 0.0 {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    // Obstacles flip the horizontal component only
    for obstacle in &state.obstacles {
        if ball_obstacle_contact(ball, obstacle) {
            ball.vel.x = -ball.vel.x;
            state.events.push(GameEvent::ObstacleHit);
        }
    }

    state.player.clamp_within(state.config.width);
}

fn tennis_end_check(state: &mut GameState) {
    if state.ball.bottom() >= state.config.height {
        state.finish(Outcome::GameOver);
    }
}
