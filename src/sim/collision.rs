//! Collision detection
//!
//! Axis-aligned tests between the ball, paddles, obstacles and screen edges.
//! Responses (which velocity component flips) are applied by `tick`.

use glam::Vec2;

use super::ball::Ball;
use super::obstacle::Obstacle;
use super::paddle::Paddle;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and size
    pub fn from_rect(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Box enclosing the ball's circle
    pub fn around_ball(ball: &Ball) -> Self {
        let half = Vec2::splat(ball.radius);
        Self {
            min: ball.pos - half,
            max: ball.pos + half,
        }
    }

    /// Overlap on both axes; touching edges count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
    }
}

/// Which goal a Pong paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Pong ball-vs-paddle test
///
/// The ball's leading edge is compared with the paddle's face, but only the
/// ball's center is checked against the paddle's vertical extent. A ball that
/// clips a paddle corner with its rim is not a hit.
pub fn pong_paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let within_face = paddle.pos.y <= ball.pos.y && ball.pos.y <= paddle.pos.y + paddle.size.y;
    let reached_face = match side {
        Side::Left => ball.left() <= paddle.pos.x + paddle.size.x,
        Side::Right => ball.right() >= paddle.pos.x,
    };
    reached_face && within_face
}

/// Tennis ball-vs-paddle test: bottom edge against the paddle's top face,
/// ball center against its horizontal extent
pub fn tennis_paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bottom() >= paddle.pos.y
        && paddle.pos.x <= ball.pos.x
        && ball.pos.x <= paddle.pos.x + paddle.size.x
}

/// True AABB overlap between the ball's box and an obstacle
pub fn ball_obstacle_contact(ball: &Ball, obstacle: &Obstacle) -> bool {
    Aabb::around_ball(ball).overlaps(&obstacle.bounds())
}

/// Ball touches or crosses the top (y = 0) or bottom (y = height) edge
pub fn hits_horizontal_edge(ball: &Ball, height: f32) -> bool {
    ball.top() <= 0.0 || ball.bottom() >= height
}

/// Ball touches or crosses the left (x = 0) or right (x = width) edge
pub fn hits_vertical_edge(ball: &Ball, width: f32) -> bool {
    ball.left() <= 0.0 || ball.right() >= width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::paddle::{Axis, Control};

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius: 10.0,
        }
    }

    fn left_paddle() -> Paddle {
        Paddle::new(Vec2::new(0.0, 250.0), Vec2::new(10.0, 100.0), 5.0, Axis::Vertical, Control::Player)
    }

    fn right_paddle() -> Paddle {
        Paddle::new(Vec2::new(790.0, 250.0), Vec2::new(10.0, 100.0), 5.0, Axis::Vertical, Control::Computer)
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_rect(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&Aabb::from_rect(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0))));
        // Shared edge
        assert!(a.overlaps(&Aabb::from_rect(Vec2::new(10.0, 0.0), Vec2::new(5.0, 5.0))));
        // Separated on one axis is enough to miss
        assert!(!a.overlaps(&Aabb::from_rect(Vec2::new(11.0, 0.0), Vec2::new(5.0, 5.0))));
        assert!(!a.overlaps(&Aabb::from_rect(Vec2::new(0.0, 11.0), Vec2::new(5.0, 5.0))));
    }

    #[test]
    fn test_pong_left_face() {
        let paddle = left_paddle();
        assert!(pong_paddle_contact(&ball_at(20.0, 300.0), &paddle, Side::Left));
        assert!(!pong_paddle_contact(&ball_at(21.0, 300.0), &paddle, Side::Left));
        // Face extent is inclusive
        assert!(pong_paddle_contact(&ball_at(15.0, 250.0), &paddle, Side::Left));
        assert!(pong_paddle_contact(&ball_at(15.0, 350.0), &paddle, Side::Left));
    }

    #[test]
    fn test_pong_right_face() {
        let paddle = right_paddle();
        assert!(pong_paddle_contact(&ball_at(780.0, 300.0), &paddle, Side::Right));
        assert!(!pong_paddle_contact(&ball_at(779.0, 300.0), &paddle, Side::Right));
    }

    #[test]
    fn test_pong_uses_ball_center_not_rim() {
        let paddle = left_paddle();
        // Rim overlaps the paddle's top corner but the center is above it
        let ball = ball_at(12.0, 245.0);
        assert!(Aabb::around_ball(&ball).overlaps(&Aabb::from_rect(paddle.pos, paddle.size)));
        assert!(!pong_paddle_contact(&ball, &paddle, Side::Left));
    }

    #[test]
    fn test_tennis_paddle() {
        let paddle = Paddle::new(
            Vec2::new(350.0, 570.0),
            Vec2::new(100.0, 10.0),
            5.0,
            Axis::Horizontal,
            Control::Player,
        );
        assert!(tennis_paddle_contact(&ball_at(400.0, 560.0), &paddle));
        assert!(!tennis_paddle_contact(&ball_at(400.0, 559.0), &paddle));
        assert!(!tennis_paddle_contact(&ball_at(349.0, 565.0), &paddle));
        assert!(tennis_paddle_contact(&ball_at(450.0, 565.0), &paddle));
    }

    #[test]
    fn test_obstacle_overlap_all_sides() {
        let obstacle = Obstacle::new(Vec2::new(400.0, 150.0), Vec2::new(50.0, 50.0));
        assert!(ball_obstacle_contact(&ball_at(425.0, 175.0), &obstacle));
        assert!(ball_obstacle_contact(&ball_at(390.0, 175.0), &obstacle));
        assert!(ball_obstacle_contact(&ball_at(460.0, 175.0), &obstacle));
        assert!(ball_obstacle_contact(&ball_at(425.0, 140.0), &obstacle));
        assert!(ball_obstacle_contact(&ball_at(425.0, 210.0), &obstacle));
        assert!(!ball_obstacle_contact(&ball_at(389.0, 175.0), &obstacle));
        assert!(!ball_obstacle_contact(&ball_at(425.0, 211.0), &obstacle));
    }

    #[test]
    fn test_screen_edges() {
        assert!(hits_horizontal_edge(&ball_at(400.0, 10.0), 600.0));
        assert!(hits_horizontal_edge(&ball_at(400.0, 590.0), 600.0));
        assert!(!hits_horizontal_edge(&ball_at(400.0, 300.0), 600.0));
        assert!(hits_vertical_edge(&ball_at(10.0, 300.0), 800.0));
        assert!(hits_vertical_edge(&ball_at(790.0, 300.0), 800.0));
        assert!(!hits_vertical_edge(&ball_at(400.0, 300.0), 800.0));
    }
}
