//! Axis-aligned collision volumes derived from cell walls

use glam::Vec3;
use smallvec::SmallVec;

use super::Direction;

/// Horizontal inflation applied to every wall box
pub const WALL_MARGIN: f32 = 0.1;

/// Collision boxes for one cell, at most one per wall
pub type CellBounds = SmallVec<[Aabb; 4]>;

/// Wall segment corners in cell-local space, indexed by direction.
const WALL_CORNERS: [(Vec3, Vec3); 4] = [
    // North: the z = 1 face
    (Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 1.0, 1.0)),
    // East: the x = 1 face
    (Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0)),
    // South: the z = 0 face
    (Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0)),
    // West: the x = 0 face
    (Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0)),
];

/// Axis-aligned bounding box.
///
/// Containment is closed: a point lying exactly on a face is inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a box spanning two arbitrary corner points
    #[must_use]
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box for one wall of the cell at `(x, z)`, inflated by [`WALL_MARGIN`]
    #[must_use]
    pub fn for_wall(x: usize, z: usize, direction: Direction) -> Self {
        let (a, b) = WALL_CORNERS[direction.index()];
        let offset = Vec3::new(x as f32, 0.0, z as f32);
        Self::from_corners(a + offset, b + offset).inflated_xz(WALL_MARGIN)
    }

    /// Grow the box by `margin` on both horizontal axes
    #[must_use]
    pub fn inflated_xz(self, margin: f32) -> Self {
        let grow = Vec3::new(margin, 0.0, margin);
        Self {
            min: self.min - grow,
            max: self.max + grow,
        }
    }

    /// Check whether a point is inside the box (faces included)
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Same as [`contains`](Self::contains) but ignoring height
    #[must_use]
    pub fn contains_xz(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Box center
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn test_corners_are_normalized() {
        let aabb = Aabb::from_corners(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(aabb.min, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_wall_box_translated_and_inflated() {
        let east = Aabb::for_wall(3, 5, Direction::East);
        assert!(approx(east.min, Vec3::new(3.9, 0.0, 4.9)));
        assert!(approx(east.max, Vec3::new(4.1, 1.0, 6.1)));

        let south = Aabb::for_wall(0, 0, Direction::South);
        assert!(approx(south.min, Vec3::new(-0.1, 0.0, -0.1)));
        assert!(approx(south.max, Vec3::new(1.1, 1.0, 0.1)));
    }

    #[test]
    fn test_boundary_points_are_contained() {
        let aabb = Aabb::from_corners(Vec3::ZERO, Vec3::ONE);
        assert!(aabb.contains(Vec3::ZERO));
        assert!(aabb.contains(Vec3::ONE));
        assert!(aabb.contains(Vec3::new(1.0, 0.5, 0.0)));
        assert!(!aabb.contains(Vec3::new(1.0001, 0.5, 0.5)));
    }

    #[test]
    fn test_contains_xz_ignores_height() {
        let aabb = Aabb::from_corners(Vec3::ZERO, Vec3::ONE);
        let above = Vec3::new(0.5, 7.0, 0.5);
        assert!(!aabb.contains(above));
        assert!(aabb.contains_xz(above));
    }
}
