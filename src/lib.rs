//! Maze generation and movement simulation
//!
//! This crate provides:
//! - Perfect maze generation with a seedable randomized backtracker
//! - Per-cell wall collision volumes
//! - A movement controller that validates moves against walls and world bounds
//! - A wandering entity that steers around walls by lookahead

pub mod ai;
pub mod animation;
pub mod core;
pub mod input;
pub mod maze;
pub mod movement;

// Re-exports for convenience
pub use glam;
pub use rand;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::ai::{WanderReport, Wanderer};
    pub use crate::core::{ConfigError, LabyrinthConfig, Level, MazeError, TickReport, Time};
    pub use crate::input::PlayerCommand;
    pub use crate::maze::{Aabb, Direction, Grid};
    pub use crate::movement::{MoveOutcome, MovementController, Obstruction, Player, Pose};
    pub use glam::{Quat, Vec3};
}
