//! Maze grid, generation and collision volumes
//!
//! The grid is mutated once by [`generate`] and is read-only afterwards,
//! so it can be shared between any number of moving entities.

mod bounds;
mod direction;
mod generator;
mod grid;

pub use bounds::{Aabb, CellBounds, WALL_MARGIN};
pub use direction::Direction;
pub use generator::generate;
pub use grid::{Cell, Grid};
