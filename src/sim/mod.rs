//! Simulation module
//!
//! All gameplay logic lives here and advances one fixed frame per `tick`:
//! - Randomness comes only from the injected `RandomSource`
//! - Entities draw through `Canvas` but never touch the platform

pub mod ball;
pub mod collision;
pub mod obstacle;
pub mod paddle;
pub mod rng;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::{Aabb, Side};
pub use obstacle::Obstacle;
pub use paddle::{Axis, Control, Paddle};
pub use rng::{RandomSource, ScriptedRandom, seeded};
pub use state::{GameEvent, GamePhase, GameState, Outcome, Score};
pub use tick::tick;
