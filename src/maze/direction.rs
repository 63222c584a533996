//! Cardinal directions shared by the grid, the generator and steering

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four cardinal directions.
///
/// The discriminant doubles as the wall index inside a [`Cell`](super::Cell).
/// North points along +Z, East along +X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// +Z
    #[default]
    North = 0,
    /// +X
    East = 1,
    /// -Z
    South = 2,
    /// -X
    West = 3,
}

/// Yaw for each direction, indexed by discriminant.
const ROTATIONS: [f32; 4] = [0.0, FRAC_PI_2, PI, -FRAC_PI_2];

impl Direction {
    /// All directions in index order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Wall index of this direction
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for a wall index, wrapping modulo 4
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Direction `steps` quarter turns further along the index order
    #[must_use]
    pub const fn turned(self, steps: usize) -> Self {
        Self::from_index(self.index() + steps)
    }

    /// The facing direction on the other side of a shared wall
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.turned(2)
    }

    /// Cell offset `(dx, dz)` towards the neighbour in this direction
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Yaw in radians an entity facing this direction should have
    #[must_use]
    pub fn rotation(self) -> f32 {
        ROTATIONS[self.index()]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
