//! Core module
//!
//! Configuration, errors, the tick clock and the level that ties the maze
//! and its entities together

mod config;
mod error;
mod level;
mod time;

pub use config::{LabyrinthConfig, PlayerConfig, WandererConfig};
pub use error::{ConfigError, MazeError};
pub use level::{Level, TickReport};
pub use time::Time;
