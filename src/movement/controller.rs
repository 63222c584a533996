//! Preview-then-commit movement through the maze
//!
//! Used identically by the player viewpoint and the wanderer.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::maze::Grid;

/// Position and yaw of a moving entity.
///
/// Height is carried along but never used for collision.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// World position
    pub position: Vec3,
    /// Yaw around +Y in radians
    pub rotation: f32,
}

impl Pose {
    /// Create a pose
    #[must_use]
    pub const fn new(position: Vec3, rotation: f32) -> Self {
        Self { position, rotation }
    }
}

/// Why a candidate position was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstruction {
    /// Outside `[0, width] x [0, height]`
    OutOfBounds,
    /// Inside a wall volume of the destination cell
    Wall,
}

/// Result of [`MovementController::try_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MoveOutcome {
    /// The pose was updated
    Committed,
    /// The pose was left untouched
    Rejected(Obstruction),
}

impl MoveOutcome {
    /// Check whether the move happened
    pub fn is_committed(self) -> bool {
        self == Self::Committed
    }
}

/// Rotate a local `(strafe, up, forward)` offset by `rotation` around +Y
/// and add it to `position`.
///
/// Pure: nothing is validated here, so callers may probe several
/// candidates before committing one.
#[must_use]
pub fn preview_move(position: Vec3, rotation: f32, local_delta: Vec3) -> Vec3 {
    position + Quat::from_rotation_y(rotation) * local_delta
}

/// Validates and commits moves against a shared, read-only grid
#[derive(Debug, Clone, Copy)]
pub struct MovementController<'a> {
    grid: &'a Grid,
    collisions: bool,
}

impl<'a> MovementController<'a> {
    /// Create a controller with wall collisions enabled
    #[must_use]
    pub const fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            collisions: true,
        }
    }

    /// Enable or disable wall collisions; world bounds always apply
    #[must_use]
    pub const fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions = enabled;
        self
    }

    /// The grid moves are validated against
    #[must_use]
    pub const fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Whether wall collisions are checked
    #[must_use]
    pub const fn collisions(&self) -> bool {
        self.collisions
    }

    /// Check a candidate position against world bounds and the wall
    /// volumes of the cell containing it
    #[must_use]
    pub fn obstruction(&self, candidate: Vec3) -> Option<Obstruction> {
        let Some((x, z)) = self.grid.cell_at(candidate) else {
            return Some(Obstruction::OutOfBounds);
        };
        if !self.collisions {
            return None;
        }
        self.grid
            .wall_bounds(x, z)
            .iter()
            .any(|aabb| aabb.contains_xz(candidate))
            .then_some(Obstruction::Wall)
    }

    /// Move `pose` by `local_delta` in the frame given by `rotation`.
    ///
    /// On success both position and rotation are written; on rejection the
    /// pose is left exactly as it was.
    pub fn try_move(&self, pose: &mut Pose, rotation: f32, local_delta: Vec3) -> MoveOutcome {
        let candidate = preview_move(pose.position, rotation, local_delta);
        if let Some(obstruction) = self.obstruction(candidate) {
            log::trace!("Move to {candidate} rejected: {obstruction:?}");
            return MoveOutcome::Rejected(obstruction);
        }
        pose.position = candidate;
        pose.rotation = rotation;
        MoveOutcome::Committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    /// 3x1 corridor with both inner walls carved
    fn corridor() -> Grid {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.carve(0, 0, Direction::East);
        grid.carve(1, 0, Direction::East);
        grid
    }

    #[test]
    fn test_preview_zero_delta_is_identity() {
        for rotation in [0.0, 0.3, FRAC_PI_2, PI, -2.0, 10.0] {
            let p = Vec3::new(1.25, 0.5, 7.5);
            assert_eq!(preview_move(p, rotation, Vec3::ZERO), p);
        }
    }

    #[test]
    fn test_preview_rotates_forward() {
        let p = Vec3::new(1.0, 0.5, 1.0);
        assert!(approx(preview_move(p, 0.0, Vec3::Z), Vec3::new(1.0, 0.5, 2.0)));
        assert!(approx(preview_move(p, FRAC_PI_2, Vec3::Z), Vec3::new(2.0, 0.5, 1.0)));
        assert!(approx(preview_move(p, PI, Vec3::Z), Vec3::new(1.0, 0.5, 0.0)));
        assert!(approx(preview_move(p, 0.0, Vec3::X), Vec3::new(2.0, 0.5, 1.0)));
    }

    #[test]
    fn test_commit_updates_position_and_rotation() {
        let grid = corridor();
        let controller = MovementController::new(&grid);
        let mut pose = Pose::new(Vec3::new(0.5, 0.5, 0.5), 0.0);

        let outcome = controller.try_move(&mut pose, FRAC_PI_2, Vec3::new(0.0, 0.0, 1.0));

        assert_eq!(outcome, MoveOutcome::Committed);
        assert!(approx(pose.position, Vec3::new(1.5, 0.5, 0.5)));
        assert_eq!(pose.rotation, FRAC_PI_2);
    }

    #[test]
    fn test_west_of_origin_always_rejected() {
        let grid = corridor();
        let controller = MovementController::new(&grid);
        let start = Pose::new(Vec3::new(0.5, 0.5, 0.5), 0.0);

        for distance in [0.45, 0.5, 0.6, 2.0] {
            let mut pose = start;
            let outcome = controller.try_move(&mut pose, -FRAC_PI_2, Vec3::new(0.0, 0.0, distance));
            assert!(!outcome.is_committed(), "distance {distance}");
            assert_eq!(pose, start);
        }
    }

    #[test]
    fn test_bounds_rejected_even_without_collisions() {
        let grid = corridor();
        let controller = MovementController::new(&grid).with_collisions(false);
        let mut pose = Pose::new(Vec3::new(0.5, 0.5, 0.5), 0.0);

        let outcome = controller.try_move(&mut pose, 0.0, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(outcome, MoveOutcome::Rejected(Obstruction::OutOfBounds));

        // Walls are ignored: straight into the north wall
        let outcome = controller.try_move(&mut pose, 0.0, Vec3::new(0.0, 0.0, 0.45));
        assert_eq!(outcome, MoveOutcome::Committed);
    }

    #[test]
    fn test_wall_rejection_leaves_pose_untouched() {
        let grid = corridor();
        let controller = MovementController::new(&grid);
        let start = Pose::new(Vec3::new(1.5, 0.5, 0.5), 1.0);
        let mut pose = start;

        let outcome = controller.try_move(&mut pose, 0.0, Vec3::new(0.0, 0.0, 0.45));

        assert_eq!(outcome, MoveOutcome::Rejected(Obstruction::Wall));
        assert_eq!(pose, start);
    }

    #[test]
    fn test_carved_edge_is_passable() {
        let grid = corridor();
        let controller = MovementController::new(&grid);
        // Straddling the carved x = 1 boundary, away from north/south walls
        assert_eq!(controller.obstruction(Vec3::new(1.0, 0.5, 0.5)), None);
        assert_eq!(controller.obstruction(Vec3::new(0.95, 0.5, 0.5)), None);
    }

    #[test]
    fn test_wall_margin_is_inclusive() {
        let grid = Grid::new(1, 1).unwrap();
        let controller = MovementController::new(&grid);
        // North wall box spans z in [0.9, 1.1]; the face itself collides
        assert_eq!(controller.obstruction(Vec3::new(0.5, 0.5, 0.9)), Some(Obstruction::Wall));
        assert_eq!(controller.obstruction(Vec3::new(0.5, 0.5, 0.89)), None);
        // West wall box spans x in [-0.1, 0.1]
        assert_eq!(controller.obstruction(Vec3::new(0.1, 0.5, 0.5)), Some(Obstruction::Wall));
        assert_eq!(controller.obstruction(Vec3::new(0.11, 0.5, 0.5)), None);
    }

    #[test]
    fn test_world_edge_is_in_bounds() {
        let grid = corridor();
        let controller = MovementController::new(&grid).with_collisions(false);
        assert_eq!(controller.obstruction(Vec3::new(3.0, 0.5, 1.0)), None);
        assert_eq!(
            controller.obstruction(Vec3::new(3.0001, 0.5, 1.0)),
            Some(Obstruction::OutOfBounds)
        );
    }
}
