//! Paddles, player steered or computer controlled

use glam::Vec2;

use super::ball::Ball;
use crate::config::Colour;
use crate::platform::Key;
use crate::renderer::Canvas;

/// Direction a paddle slides along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Up and down (Pong)
    Vertical,
    /// Left and right (Tennis)
    Horizontal,
}

impl Axis {
    /// Component of `v` along this axis
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::Vertical => v.y,
            Axis::Horizontal => v.x,
        }
    }

    fn of_mut(self, v: &mut Vec2) -> &mut f32 {
        match self {
            Axis::Vertical => &mut v.y,
            Axis::Horizontal => &mut v.x,
        }
    }

    /// Keys that move a paddle toward lower and higher coordinates
    pub fn keys(self) -> (Key, Key) {
        match self {
            Axis::Vertical => (Key::Up, Key::Down),
            Axis::Horizontal => (Key::Left, Key::Right),
        }
    }
}

/// Who decides the paddle's velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Velocity set from key presses
    Player,
    /// Velocity set each frame by chasing the ball
    Computer,
}

/// A rectangular paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// Signed velocity along `axis`: -speed, 0 or +speed
    pub velocity: f32,
    pub axis: Axis,
    pub control: Control,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32, axis: Axis, control: Control) -> Self {
        Self {
            pos,
            size,
            speed,
            velocity: 0.0,
            axis,
            control,
        }
    }

    /// Center of the paddle along its axis
    pub fn center(&self) -> f32 {
        self.axis.of(self.pos) + self.axis.of(self.size) / 2.0
    }

    /// Length of the paddle along its axis
    pub fn extent(&self) -> f32 {
        self.axis.of(self.size)
    }

    /// Chase the ball: -speed if it is before the center, +speed if after, 0 if level
    pub fn track(&mut self, ball: &Ball) {
        let target = self.axis.of(ball.pos);
        let center = self.center();
        self.velocity = if target < center {
            -self.speed
        } else if target > center {
            self.speed
        } else {
            0.0
        };
    }

    /// Apply a key event; returns false for keys this paddle does not use
    pub fn steer(&mut self, key: Key, pressed: bool) -> bool {
        let (back, forward) = self.axis.keys();
        if key != back && key != forward {
            return false;
        }
        self.velocity = match (pressed, key == back) {
            (false, _) => 0.0,
            (true, true) => -self.speed,
            (true, false) => self.speed,
        };
        true
    }

    /// Computer paddles re-aim at the ball, then every paddle moves one step
    pub fn advance(&mut self, ball: &Ball) {
        if self.control == Control::Computer {
            self.track(ball);
        }
        *self.axis.of_mut(&mut self.pos) += self.velocity;
    }

    /// Keep the paddle inside [0, bound - extent] along its axis
    pub fn clamp_within(&mut self, bound: f32) {
        let max = bound - self.extent();
        let coord = self.axis.of_mut(&mut self.pos);
        if *coord <= 0.0 {
            *coord = 0.0;
        } else if *coord >= max {
            *coord = max;
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, colour: Colour) {
        canvas.fill_rect(self.pos, self.size, colour);
    }
}
