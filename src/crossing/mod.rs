//! Pedestrian crossing mini-game
//!
//! An independent 2D game: guide the avatar across a two-lane road, obeying
//! the crossing signal and dodging cars. Score is per-session only; unlike
//! the driving game it is never persisted.

pub mod state;
pub mod tick;

pub use state::{CarObstacle, CrossingInput, CrossingState, Player, Rect, Signal, crossing_zone};
pub use tick::tick;
