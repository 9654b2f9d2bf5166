//! The ball

use glam::Vec2;

use super::rng::RandomSource;
use crate::config::Colour;
use crate::renderer::Canvas;

/// A ball moving with constant velocity between collisions
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center of the ball
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Serve a new ball from `pos`
    ///
    /// The horizontal velocity is `speed` in a random direction, the vertical
    /// velocity is drawn uniformly from [-speed, speed].
    pub fn new(pos: Vec2, speed: f32, radius: f32, rng: &mut dyn RandomSource) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        let direction = rng.direction();
        let spread = rng.spread();
        Self {
            pos,
            vel: Vec2::new(direction * speed, spread * speed),
            radius,
        }
    }

    /// Respawn in place with a freshly randomized velocity
    pub fn reset(&mut self, pos: Vec2, speed: f32, radius: f32, rng: &mut dyn RandomSource) {
        *self = Self::new(pos, speed, radius, rng);
    }

    /// One Euler step; bounds are enforced by the caller
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, colour: Colour) {
        canvas.fill_circle(self.pos.round(), self.radius, colour);
    }
}
