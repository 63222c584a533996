//! Cell grid holding the maze walls

use std::collections::VecDeque;
use std::fmt;

use glam::Vec3;
use rand::Rng;
use rustc_hash::FxHashSet;

use super::bounds::{Aabb, CellBounds};
use super::{Direction, generate};
use crate::core::MazeError;

/// One grid square.
///
/// `visited` is only meaningful while the generator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: [bool; 4],
    visited: bool,
}

impl Cell {
    /// A fully walled, unvisited cell
    #[must_use]
    pub const fn walled() -> Self {
        Self {
            walls: [true; 4],
            visited: false,
        }
    }

    /// Check whether the wall facing `direction` is present
    #[must_use]
    pub const fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// Wall flags in index order (N, E, S, W)
    #[must_use]
    pub const fn walls(&self) -> [bool; 4] {
        self.walls
    }

    /// Number of walls still standing
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| wall).count()
    }

    /// Directions whose wall has been carved away
    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|dir| !self.has_wall(*dir))
    }

    /// Generation-time visited flag
    #[must_use]
    pub const fn is_visited(&self) -> bool {
        self.visited
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::walled()
    }
}

/// Fixed-size rectangular grid of cells.
///
/// Cells are addressed by column `x` in `0..width` and row `z` in
/// `0..height`; cell `(x, z)` covers world `[x, x+1] x [z, z+1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a grid with every wall standing and no cell visited
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::walled(); width * height],
        })
    }

    /// Allocate a grid and carve a maze into it
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if either dimension is zero
    pub fn generated<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        let mut grid = Self::new(width, height)?;
        generate(&mut grid, rng);
        Ok(grid)
    }

    /// Width in cells
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether `(x, z)` addresses a cell
    #[must_use]
    pub const fn contains(&self, x: usize, z: usize) -> bool {
        x < self.width && z < self.height
    }

    fn check(&self, x: usize, z: usize) -> Result<usize, MazeError> {
        if self.contains(x, z) {
            Ok(self.index(x, z))
        } else {
            Err(MazeError::CellOutOfBounds {
                x,
                z,
                width: self.width,
                height: self.height,
            })
        }
    }

    const fn index(&self, x: usize, z: usize) -> usize {
        z * self.width + x
    }

    /// Get a cell
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::CellOutOfBounds`] for an index outside the grid
    pub fn cell(&self, x: usize, z: usize) -> Result<&Cell, MazeError> {
        let index = self.check(x, z)?;
        Ok(&self.cells[index])
    }

    /// Iterate over `((x, z), cell)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| ((i % self.width, i / self.width), cell))
    }

    /// Coordinates of the neighbour in `direction`, if it is inside the grid
    #[must_use]
    pub fn neighbor(&self, x: usize, z: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dz) = direction.offset();
        let nx = x.checked_add_signed(dx)?;
        let nz = z.checked_add_signed(dz)?;
        self.contains(nx, nz).then_some((nx, nz))
    }

    pub(super) fn is_visited(&self, x: usize, z: usize) -> bool {
        self.cells[self.index(x, z)].visited
    }

    pub(super) fn mark_visited(&mut self, x: usize, z: usize) {
        let index = self.index(x, z);
        self.cells[index].visited = true;
    }

    /// Remove the wall between `(x, z)` and its neighbour in `direction`,
    /// on both sides.
    pub(crate) fn carve(&mut self, x: usize, z: usize, direction: Direction) {
        let Some((nx, nz)) = self.neighbor(x, z, direction) else {
            return;
        };
        let here = self.index(x, z);
        let there = self.index(nx, nz);
        self.cells[here].walls[direction.index()] = false;
        self.cells[there].walls[direction.opposite().index()] = false;
    }

    /// Collision boxes for the walls standing around a cell, in N, E, S, W order
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::CellOutOfBounds`] for an index outside the grid
    pub fn bounds_for_cell(&self, x: usize, z: usize) -> Result<CellBounds, MazeError> {
        self.check(x, z)?;
        Ok(self.wall_bounds(x, z))
    }

    /// Unchecked variant of [`bounds_for_cell`](Self::bounds_for_cell) for
    /// indices already known to be inside the grid.
    pub(crate) fn wall_bounds(&self, x: usize, z: usize) -> CellBounds {
        let cell = &self.cells[self.index(x, z)];
        Direction::ALL
            .into_iter()
            .filter(|dir| cell.has_wall(*dir))
            .map(|dir| Aabb::for_wall(x, z, dir))
            .collect()
    }

    /// Check whether a world position lies inside `[0, width] x [0, height]`
    #[must_use]
    pub fn in_world(&self, position: Vec3) -> bool {
        (0.0..=self.width as f32).contains(&position.x)
            && (0.0..=self.height as f32).contains(&position.z)
    }

    /// Cell owning a world position; the far edges belong to the last
    /// column and row.
    #[must_use]
    pub fn cell_at(&self, position: Vec3) -> Option<(usize, usize)> {
        if !self.in_world(position) {
            return None;
        }
        let x = (position.x as usize).min(self.width - 1);
        let z = (position.z as usize).min(self.height - 1);
        Some((x, z))
    }

    /// World position of a cell's center at height `y`
    #[must_use]
    pub fn cell_center(&self, x: usize, z: usize, y: f32) -> Vec3 {
        Vec3::new(x as f32 + 0.5, y, z as f32 + 0.5)
    }

    /// Number of carved edges between adjacent cells
    #[must_use]
    pub fn open_edge_count(&self) -> usize {
        self.cells()
            .map(|((x, z), cell)| {
                [Direction::North, Direction::East]
                    .into_iter()
                    .filter(|dir| !cell.has_wall(*dir) && self.neighbor(x, z, *dir).is_some())
                    .count()
            })
            .sum()
    }

    /// Check that every shared wall has the same flag on both sides
    #[must_use]
    pub fn walls_symmetric(&self) -> bool {
        self.cells().all(|((x, z), cell)| {
            Direction::ALL.into_iter().all(|dir| {
                self.neighbor(x, z, dir).is_none_or(|(nx, nz)| {
                    let other = &self.cells[self.index(nx, nz)];
                    cell.has_wall(dir) == other.has_wall(dir.opposite())
                })
            })
        })
    }

    /// Count the cells reachable from `(x, z)` through carved edges
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::CellOutOfBounds`] for a start outside the grid
    pub fn reachable_from(&self, x: usize, z: usize) -> Result<usize, MazeError> {
        self.check(x, z)?;

        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::new();
        visited.insert((x, z));
        queue.push_back((x, z));

        while let Some((cx, cz)) = queue.pop_front() {
            let cell = &self.cells[self.index(cx, cz)];
            for dir in cell.open_directions() {
                if let Some(next) = self.neighbor(cx, cz, dir) {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        Ok(visited.len())
    }

    /// Check the spanning-tree property: exactly `W*H - 1` open edges and
    /// every cell reachable from the origin
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.walls_symmetric()
            && self.open_edge_count() == self.len() - 1
            && self.reachable_from(0, 0) == Ok(self.len())
    }
}

/// Top-down ASCII view with north at the top
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in (0..self.height).rev() {
            for x in 0..self.width {
                let cell = &self.cells[self.index(x, z)];
                let edge = if cell.has_wall(Direction::North) { "---" } else { "   " };
                write!(f, "+{edge}")?;
            }
            writeln!(f, "+")?;

            for x in 0..self.width {
                let cell = &self.cells[self.index(x, z)];
                let side = if cell.has_wall(Direction::West) { '|' } else { ' ' };
                write!(f, "{side}   ")?;
            }
            let last = &self.cells[self.index(self.width - 1, z)];
            writeln!(f, "{}", if last.has_wall(Direction::East) { '|' } else { ' ' })?;
        }

        for x in 0..self.width {
            let cell = &self.cells[self.index(x, 0)];
            let edge = if cell.has_wall(Direction::South) { "---" } else { "   " };
            write!(f, "+{edge}")?;
        }
        writeln!(f, "+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_fully_walled() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.len(), 12);
        for (_, cell) in grid.cells() {
            assert_eq!(cell.walls(), [true; 4]);
            assert!(!cell.is_visited());
        }
        assert_eq!(grid.open_edge_count(), 0);
        assert_eq!(grid.reachable_from(0, 0), Ok(1));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_out_of_bounds_query_fails() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(matches!(
            grid.bounds_for_cell(3, 0),
            Err(MazeError::CellOutOfBounds { x: 3, z: 0, .. })
        ));
        assert!(grid.cell(0, 3).is_err());
        assert!(grid.reachable_from(9, 9).is_err());
    }

    #[test]
    fn test_neighbor_never_wraps() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.neighbor(0, 0, Direction::West), None);
        assert_eq!(grid.neighbor(0, 0, Direction::South), None);
        assert_eq!(grid.neighbor(2, 2, Direction::North), None);
        assert_eq!(grid.neighbor(2, 2, Direction::East), None);
        assert_eq!(grid.neighbor(1, 1, Direction::North), Some((1, 2)));
        assert_eq!(grid.neighbor(1, 1, Direction::West), Some((0, 1)));
    }

    #[test]
    fn test_carve_clears_both_sides() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.carve(0, 0, Direction::East);

        assert!(!grid.cell(0, 0).unwrap().has_wall(Direction::East));
        assert!(!grid.cell(1, 0).unwrap().has_wall(Direction::West));
        assert!(grid.walls_symmetric());
        assert_eq!(grid.open_edge_count(), 1);
        assert_eq!(grid.reachable_from(0, 0), Ok(2));
    }

    #[test]
    fn test_bounds_follow_wall_flags() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.bounds_for_cell(0, 0).unwrap().len(), 4);

        grid.carve(0, 0, Direction::North);
        let bounds = grid.bounds_for_cell(0, 0).unwrap();
        assert_eq!(bounds.len(), 3);
        // Remaining boxes keep N, E, S, W order: East first now
        assert_eq!(bounds[0], Aabb::for_wall(0, 0, Direction::East));
        assert_eq!(bounds[1], Aabb::for_wall(0, 0, Direction::South));
        assert_eq!(bounds[2], Aabb::for_wall(0, 0, Direction::West));
    }

    #[test]
    fn test_bounds_for_fully_open_cell_is_empty() {
        let mut grid = Grid::new(3, 3).unwrap();
        for dir in Direction::ALL {
            grid.carve(1, 1, dir);
        }
        assert!(grid.bounds_for_cell(1, 1).unwrap().is_empty());
    }

    #[test]
    fn test_cell_at_far_edge_belongs_to_last_cell() {
        let grid = Grid::new(4, 2).unwrap();
        assert_eq!(grid.cell_at(Vec3::new(0.0, 0.5, 0.0)), Some((0, 0)));
        assert_eq!(grid.cell_at(Vec3::new(2.7, 0.5, 1.2)), Some((2, 1)));
        assert_eq!(grid.cell_at(Vec3::new(4.0, 0.5, 2.0)), Some((3, 1)));
        assert_eq!(grid.cell_at(Vec3::new(-0.01, 0.5, 1.0)), None);
        assert_eq!(grid.cell_at(Vec3::new(1.0, 0.5, 2.01)), None);
    }

    #[test]
    fn test_display_draws_closed_box() {
        let grid = Grid::new(2, 1).unwrap();
        assert_eq!(grid.to_string(), "+---+---+\n|   |   |\n+---+---+\n");
    }
}
