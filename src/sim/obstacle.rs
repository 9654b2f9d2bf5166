//! Static obstacles

use glam::Vec2;

use super::collision::Aabb;
use crate::config::{Colour, ObstacleSpec};
use crate::renderer::Canvas;

/// An immovable rectangle the ball bounces off
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pos: Vec2,
    size: Vec2,
}

impl Obstacle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.pos, self.size)
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, colour: Colour) {
        canvas.fill_rect(self.pos, self.size, colour);
    }
}

impl From<&ObstacleSpec> for Obstacle {
    fn from(spec: &ObstacleSpec) -> Self {
        Self::new(spec.position, spec.size)
    }
}
