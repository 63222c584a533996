//! Entity movement and collision validation
//!
//! Provides the shared preview/validate/commit primitive and the
//! player-controlled viewpoint built on it.

mod controller;
mod player;

pub use controller::{MoveOutcome, MovementController, Obstruction, Pose, preview_move};
pub use player::Player;
